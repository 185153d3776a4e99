//! Shared fixtures for tests that run against a live Postgres.
//!
//! Tests asking for a pool are skipped when `DATABASE_URL` is unset or the
//! server is unreachable.

use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

use crate::auth::{repo::CreateUser, repo_types::User};

pub async fn test_pool() -> Option<PgPool> {
    dotenvy::dotenv().ok();
    let url = std::env::var("DATABASE_URL").ok()?;
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .acquire_timeout(Duration::from_secs(3))
        .connect(&url)
        .await
        .ok()?;
    sqlx::migrate!("./migrations").run(&pool).await.ok()?;
    Some(pool)
}

/// Inserts a user with a unique name; the hash is a placeholder.
pub async fn insert_user(db: &PgPool) -> User {
    let username = format!("user-{}", Uuid::new_v4());
    match User::create(db, &username, "$argon2id$placeholder").await {
        Ok(CreateUser::Created(u)) => u,
        Ok(CreateUser::UsernameTaken) => panic!("fresh username {username} taken"),
        Err(e) => panic!("insert user: {e:#}"),
    }
}
