pub mod multipart;
pub mod response;
pub mod routes;
