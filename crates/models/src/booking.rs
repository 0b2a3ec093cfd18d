use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{car, errors::ModelError, validation};

/// Booking lifecycle marker. Any value may replace any other; there is no
/// transition guard and no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum BookingStatus {
    #[default]
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "Confirmed")]
    Confirmed,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub car_id: i64,
    pub user_email: String,
    pub start_date: Date,
    pub end_date: Date,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total_price: Decimal,
    pub status: BookingStatus,
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

pub fn validate_user_email(email: &str) -> Result<(), ModelError> {
    validation::email_address("user_email", email)
}

/// Returns the price rescaled to two decimal places.
pub fn validate_total_price(price: Decimal) -> Result<Decimal, ModelError> {
    validation::money("total_price", price, 10, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_pending() {
        assert_eq!(BookingStatus::default(), BookingStatus::Pending);
    }

    #[test]
    fn status_uses_capitalized_wire_names() {
        assert_eq!(serde_json::to_string(&BookingStatus::Confirmed).unwrap(), "\"Confirmed\"");
        let parsed: BookingStatus = serde_json::from_str("\"Pending\"").unwrap();
        assert_eq!(parsed, BookingStatus::Pending);
        assert!(serde_json::from_str::<BookingStatus>("\"Cancelled\"").is_err());
    }

    #[test]
    fn status_db_values() {
        assert_eq!(BookingStatus::Pending.to_value(), "Pending".to_string());
        assert_eq!(BookingStatus::Confirmed.to_value(), "Confirmed".to_string());
    }
}
