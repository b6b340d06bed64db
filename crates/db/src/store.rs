//! Mission persistence.
//!
//! [`MissionStore`] is the capability the HTTP layer is handed at startup.
//! Handlers only ever see the trait object, so tests can swap in an
//! in-memory implementation.

use async_trait::async_trait;
use missions_core::mission::NewMission;
use serde_json::Value;

use crate::DbPool;

/// Executes the two statements the service issues against `missions`.
#[async_trait]
pub trait MissionStore: Send + Sync {
    /// Insert one mission.
    ///
    /// `Ok(false)` means the statement ran but the store did not report a
    /// written row; `Err` means execution itself failed.
    async fn insert(&self, mission: &NewMission) -> Result<bool, sqlx::Error>;

    /// Return every stored row as-is, including store-assigned columns.
    async fn list(&self) -> Result<Vec<Value>, sqlx::Error>;
}

/// PostgreSQL-backed [`MissionStore`].
#[derive(Clone)]
pub struct PgMissionStore {
    pool: DbPool,
}

impl PgMissionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MissionStore for PgMissionStore {
    async fn insert(&self, mission: &NewMission) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO missions (objective, reward, active, failed) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(&mission.objective)
        .bind(mission.reward)
        .bind(mission.active)
        .bind(mission.failed)
        .execute(&self.pool)
        .await?;

        tracing::debug!(rows_affected = result.rows_affected(), "Mission insert executed");
        Ok(result.rows_affected() == 1)
    }

    async fn list(&self) -> Result<Vec<Value>, sqlx::Error> {
        // to_jsonb keeps whatever columns the table has, not a fixed struct.
        sqlx::query_scalar::<_, Value>("SELECT to_jsonb(m) FROM (SELECT * FROM missions) AS m")
            .fetch_all(&self.pool)
            .await
    }
}
