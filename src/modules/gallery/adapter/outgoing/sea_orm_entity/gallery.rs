use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "gallery")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub image_url: String,

    #[sea_orm(column_type = "String(StringLen::N(1024))")]
    pub image_public_id: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub video_url: Option<String>,

    // Set together with video_url (chk_gallery_video_pair).
    #[sea_orm(column_type = "String(StringLen::N(1024))", nullable)]
    pub video_public_id: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
