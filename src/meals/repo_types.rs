use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Meal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub session_id: Uuid,
    pub name: String,
    pub description: String,
    pub date: String, // dd/mm/yyyy
    pub time: String, // hh:mm:ss
    pub within_diet: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

/// Column values written on insert and update.
#[derive(Debug, Clone)]
pub struct MealFields {
    pub name: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub within_diet: bool,
}
