use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A generated description for one submitted video link.
///
/// Rows are written once, fully populated, and never updated.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blog_article")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub user_id: i32,
    #[sea_orm(belongs_to, from = "user_id", to = "id")]
    pub user: HasOne<super::user::Entity>,

    pub youtube_link: String,
    /// Falls back to the oEmbed placeholder when the lookup failed.
    pub youtube_title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
