use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{BuildingId, OrganizationId};
use crate::domains::directory::models::Building;

/// Organization - anchor entity of the directory
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    pub building_id: Option<BuildingId>,
}

/// Joined row for the base fetch (organization plus its building).
#[derive(Debug, Clone, sqlx::FromRow)]
struct OrganizationBuildingRow {
    id: OrganizationId,
    name: String,
    building_id: BuildingId,
    address: String,
    latitude: f64,
    longitude: f64,
}

impl OrganizationBuildingRow {
    fn into_pair(self) -> (Organization, Building) {
        (
            Organization {
                id: self.id,
                name: self.name,
                building_id: Some(self.building_id),
            },
            Building {
                id: self.building_id,
                address: self.address,
                latitude: self.latitude,
                longitude: self.longitude,
            },
        )
    }
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Organization {
    /// Base fetch: organizations joined to their buildings, ordered by id.
    ///
    /// `ids = None` means no identifier filter was applied (fetch everything).
    /// Organizations without a building are not complete aggregates and are
    /// excluded by the inner join.
    pub async fn find_with_buildings(
        ids: Option<&[OrganizationId]>,
        pool: &PgPool,
    ) -> Result<Vec<(Organization, Building)>, sqlx::Error> {
        let rows = match ids {
            Some(ids) => {
                sqlx::query_as::<_, OrganizationBuildingRow>(
                    r#"
                    SELECT o.id, o.name, o.building_id, b.address, b.latitude, b.longitude
                    FROM organizations o
                    INNER JOIN buildings b ON o.building_id = b.id
                    WHERE o.id = ANY($1)
                    ORDER BY o.id
                    "#,
                )
                .bind(ids)
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, OrganizationBuildingRow>(
                    r#"
                    SELECT o.id, o.name, o.building_id, b.address, b.latitude, b.longitude
                    FROM organizations o
                    INNER JOIN buildings b ON o.building_id = b.id
                    ORDER BY o.id
                    "#,
                )
                .fetch_all(pool)
                .await?
            }
        };

        Ok(rows
            .into_iter()
            .map(OrganizationBuildingRow::into_pair)
            .collect())
    }

    /// Ids of organizations housed in any of the given buildings
    pub async fn ids_by_building_ids(
        building_ids: &[BuildingId],
        pool: &PgPool,
    ) -> Result<Vec<OrganizationId>, sqlx::Error> {
        sqlx::query_scalar::<_, OrganizationId>(
            "SELECT id FROM organizations WHERE building_id = ANY($1)",
        )
        .bind(building_ids)
        .fetch_all(pool)
        .await
    }

    /// Ids of organizations whose name matches the substring (case-insensitive)
    pub async fn ids_by_name_match(
        search: &str,
        pool: &PgPool,
    ) -> Result<Vec<OrganizationId>, sqlx::Error> {
        sqlx::query_scalar::<_, OrganizationId>(
            "SELECT id FROM organizations WHERE name ILIKE $1",
        )
        .bind(format!("%{}%", search))
        .fetch_all(pool)
        .await
    }
}
