use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{car, errors::ModelError, validation};

pub const USER_EMAIL_MAX_LEN: usize = 150;
pub const DEFAULT_RATING: i32 = 5;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "review")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub car_id: i64,
    pub user_email: String,
    pub rating: i32,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Car }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Car => Entity::belongs_to(car::Entity)
                .from(Column::CarId)
                .to(car::Column::Id)
                .into(),
        }
    }
}

impl Related<car::Entity> for Entity {
    fn to() -> RelationDef { Relation::Car.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Reviews store a display handle here, so only presence and length are checked.
pub fn validate_user_email(user: &str) -> Result<(), ModelError> {
    validation::require_text("user_email", user)?;
    validation::max_len("user_email", user, USER_EMAIL_MAX_LEN)
}

pub fn validate_text(text: &str) -> Result<(), ModelError> {
    validation::require_text("text", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_without_at_sign_is_accepted() {
        assert!(validate_user_email("driver42").is_ok());
        assert!(validate_user_email(&"u".repeat(USER_EMAIL_MAX_LEN + 1)).is_err());
    }

    #[test]
    fn empty_text_is_rejected() {
        assert!(validate_text("Great car").is_ok());
        assert!(validate_text("").is_err());
    }
}
