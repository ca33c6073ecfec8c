use chrono::{DateTime, TimeZone, Utc};

use crate::modules::gallery::application::ports::outgoing::{NewGalleryRecord, UpdateGalleryRecord};
use crate::modules::gallery::domain::entities::{
    GalleryId, GalleryRecord, MediaInput, MediaKind, MediaRef,
};

pub fn media_ref(object_id: &str, kind: MediaKind) -> MediaRef {
    MediaRef {
        url: format!("https://cdn.test/{object_id}"),
        object_id: object_id.to_string(),
        kind,
    }
}

pub fn png_input() -> MediaInput {
    MediaInput::new(vec![0x89, b'P', b'N', b'G'])
        .with_file_name("cover.png")
        .with_content_type("image/png")
}

pub fn mp4_input() -> MediaInput {
    MediaInput::new(vec![0, 0, 0, 0x18, b'f', b't', b'y', b'p'])
        .with_file_name("clip.mp4")
        .with_content_type("video/mp4")
}

pub fn fixed_time(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, minute, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Record with image `gallery/thumbs/old-img` and, when `with_video`,
/// video `gallery/videos/old-vid`.
pub fn stored_record(id: i64, with_video: bool) -> GalleryRecord {
    GalleryRecord {
        id: GalleryId::from(id),
        name: "Desk Lamp".to_string(),
        image: media_ref("gallery/thumbs/old-img", MediaKind::Image),
        video: with_video.then(|| media_ref("gallery/videos/old-vid", MediaKind::Video)),
        created_at: fixed_time(0),
        updated_at: fixed_time(0),
    }
}

/// What a record store would return for `data` under `id`.
pub fn inserted_record(id: i64, data: NewGalleryRecord) -> GalleryRecord {
    GalleryRecord {
        id: GalleryId::from(id),
        name: data.name.into_inner(),
        image: data.image,
        video: data.video,
        created_at: fixed_time(id as u32 % 60),
        updated_at: fixed_time(id as u32 % 60),
    }
}

/// Applies `changes` the way the record store's update does.
pub fn updated_record(mut record: GalleryRecord, changes: UpdateGalleryRecord) -> GalleryRecord {
    if let Some(name) = changes.name {
        record.name = name.into_inner();
    }
    if let Some(image) = changes.image {
        record.image = image;
    }
    if let Some(video) = changes.video {
        record.video = Some(video);
    }
    record.updated_at = fixed_time(59);
    record
}
