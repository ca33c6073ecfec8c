pub mod app_state_builder;
pub mod fakes;
pub mod gallery_doubles;
pub mod gallery_fixtures;
pub mod multipart_body;
pub mod stubs;
