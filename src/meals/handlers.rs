use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::{
    dto::{ListQuery, MealListResponse, MealRequest, MessageResponse},
    repo,
    services::{summarize, validate_meal},
};
use crate::{
    auth::extractors::BasicUser,
    error::AppError,
    extract::{AppJson, AppPath, AppQuery},
    session::{ensure_session, SessionId},
    state::AppState,
};

pub fn meal_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", get(list_meals).post(create_meal))
        .route("/meals/:id", put(update_meal).delete(delete_meal))
}

#[instrument(skip(state, user, headers, body), fields(user_id = %user.id))]
pub async fn create_meal(
    State(state): State<AppState>,
    BasicUser(user): BasicUser,
    headers: HeaderMap,
    AppJson(body): AppJson<MealRequest>,
) -> Result<(StatusCode, HeaderMap, Json<MessageResponse>), AppError> {
    let fields = validate_meal(body)?;
    let (session_id, cookie) = ensure_session(&headers, &state.config.session)?;

    let meal = repo::insert(&state.db, user.id, session_id, &fields).await?;
    info!(meal_id = %meal.id, %session_id, within_diet = meal.within_diet, "meal created");

    let mut out = HeaderMap::new();
    if let Some(cookie) = cookie {
        out.insert(header::SET_COOKIE, cookie);
    }
    Ok((
        StatusCode::CREATED,
        out,
        Json(MessageResponse {
            message: "Meal created successfully!",
        }),
    ))
}

#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn list_meals(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    BasicUser(user): BasicUser,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<Json<MealListResponse>, AppError> {
    let meals = repo::list_by_user_session(&state.db, user.id, session_id).await?;
    Ok(Json(summarize(&user, meals, &query)))
}

#[instrument(skip(state, user, body), fields(user_id = %user.id))]
pub async fn update_meal(
    State(state): State<AppState>,
    BasicUser(user): BasicUser,
    AppPath(id): AppPath<Uuid>,
    AppJson(body): AppJson<MealRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let fields = validate_meal(body)?;
    if !repo::update(&state.db, user.id, id, &fields).await? {
        return Err(AppError::NotFound("Meal not found!".into()));
    }
    info!(meal_id = %id, "meal updated");
    Ok(Json(MessageResponse {
        message: "Meal updated successfully!",
    }))
}

#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn delete_meal(
    State(state): State<AppState>,
    BasicUser(user): BasicUser,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    if !repo::delete(&state.db, user.id, id).await? {
        return Err(AppError::NotFound("Meal not found!".into()));
    }
    info!(meal_id = %id, "meal removed");
    Ok(Json(MessageResponse {
        message: "Meal removed successfully!",
    }))
}
