use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One submitted guess inside a round, written as the round is played.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "guesses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "user_id")]
    pub user_id: i64,
    /// Null once the secret has been removed from the word list.
    #[sea_orm(column_name = "word_id", nullable)]
    pub word_id: Option<i64>,
    #[sea_orm(column_name = "guess_word")]
    pub guess_word: String,
    #[sea_orm(column_name = "attempt_no")]
    pub attempt_no: i16,
    #[sea_orm(column_name = "played_at")]
    pub played_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::words::Entity",
        from = "Column::WordId",
        to = "super::words::Column::Id"
    )]
    Word,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::words::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Word.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
