//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub poster: String,
    // Column name kept camelCase to match the deployed schema.
    #[sea_orm(column_name = "timeStamp")]
    pub time_stamp: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for bulletin_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            body: model.body,
            poster: model.poster,
            time_stamp: model.time_stamp.into(),
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<bulletin_core::domain::Post> for ActiveModel {
    fn from(post: bulletin_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            body: Set(post.body),
            poster: Set(post.poster),
            time_stamp: Set(post.time_stamp.into()),
        }
    }
}
