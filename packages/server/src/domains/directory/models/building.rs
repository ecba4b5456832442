use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::BuildingId;

/// Building - independent entity; organizations hold a non-owning reference
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Building {
    pub id: BuildingId,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Building {
    /// Find all buildings with their coordinates
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Building>("SELECT * FROM buildings ORDER BY id")
            .fetch_all(pool)
            .await
    }
}
