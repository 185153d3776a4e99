use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{Meal, MealFields};

const MEAL_COLUMNS: &str = "id, user_id, session_id, name, description, date, time, \
                            within_diet, created_at, updated_at";

pub async fn insert(
    db: &PgPool,
    user_id: Uuid,
    session_id: Uuid,
    fields: &MealFields,
) -> anyhow::Result<Meal> {
    let meal = sqlx::query_as::<_, Meal>(&format!(
        r#"
        INSERT INTO meals (user_id, session_id, name, description, date, time, within_diet)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING {MEAL_COLUMNS}
        "#
    ))
    .bind(user_id)
    .bind(session_id)
    .bind(&fields.name)
    .bind(&fields.description)
    .bind(&fields.date)
    .bind(&fields.time)
    .bind(fields.within_diet)
    .fetch_one(db)
    .await
    .context("insert meal")?;
    Ok(meal)
}

/// Meals of one user within one session, oldest first.
///
/// The diet streak is computed over this sequence as a leading run, so the
/// ascending creation order is part of the contract.
pub async fn list_by_user_session(
    db: &PgPool,
    user_id: Uuid,
    session_id: Uuid,
) -> anyhow::Result<Vec<Meal>> {
    let rows = sqlx::query_as::<_, Meal>(&format!(
        r#"
        SELECT {MEAL_COLUMNS}
        FROM meals
        WHERE user_id = $1 AND session_id = $2
        ORDER BY created_at ASC
        "#
    ))
    .bind(user_id)
    .bind(session_id)
    .fetch_all(db)
    .await
    .context("list meals by user and session")?;
    Ok(rows)
}

/// Returns whether the caller's meal existed and was updated.
pub async fn update(
    db: &PgPool,
    user_id: Uuid,
    meal_id: Uuid,
    fields: &MealFields,
) -> anyhow::Result<bool> {
    let res = sqlx::query(
        r#"
        UPDATE meals
           SET name = $3, description = $4, date = $5, time = $6,
               within_diet = $7, updated_at = now()
         WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(meal_id)
    .bind(user_id)
    .bind(&fields.name)
    .bind(&fields.description)
    .bind(&fields.date)
    .bind(&fields.time)
    .bind(fields.within_diet)
    .execute(db)
    .await
    .context("update meal")?;
    Ok(res.rows_affected() > 0)
}

pub async fn delete(db: &PgPool, user_id: Uuid, meal_id: Uuid) -> anyhow::Result<bool> {
    let res = sqlx::query("DELETE FROM meals WHERE id = $1 AND user_id = $2")
        .bind(meal_id)
        .bind(user_id)
        .execute(db)
        .await
        .context("delete meal")?;
    Ok(res.rows_affected() > 0)
}
