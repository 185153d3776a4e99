use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::meals::repo_types::Meal;

#[derive(Debug, Deserialize)]
pub struct MealRequest {
    pub name: String,
    pub description: String,
    pub date: String,
    pub time: String,
    #[serde(alias = "withinDiet")]
    pub within_diet: bool,
}

/// Optional summaries for `GET /meals`; the first flag set wins.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default)]
    pub total_register: bool,
    #[serde(default)]
    pub total_within_diet: bool,
    #[serde(default)]
    pub total_without_diet: bool,
    #[serde(default)]
    pub better_sequence_within_diet: bool,
}

#[derive(Debug, Serialize)]
pub struct MealListResponse {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_register: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_within_diet: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_without_diet: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub better_sequence_within_diet: Option<usize>,
    pub meals: Vec<Meal>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
