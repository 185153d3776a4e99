mod dto;
pub mod handlers;
mod repo;
pub mod repo_types;
mod services;
pub mod streak;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::meal_routes())
}
