use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, Transaction};

use crate::common::{ActivityId, DirectoryError, OrganizationId};

/// Activity category. `parent_id` is a plain identifier, not an object
/// link, so the tree is a forest indexed by id.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    pub parent_id: Option<ActivityId>,
}

/// Helper struct for batch-loading activities with their linked organization.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivityWithOrganizationId {
    pub organization_id: OrganizationId,
    #[sqlx(flatten)]
    pub activity: Activity,
}

/// Maximum number of levels in an activity chain (a root and two
/// generations below it). A write whose parent chain is already this long
/// is rejected.
pub const MAX_ACTIVITY_LEVELS: i64 = 3;

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Activity {
    /// Batch-load activities for multiple organizations, ordered by activity
    /// name within each organization.
    pub async fn find_for_organization_ids(
        organization_ids: &[OrganizationId],
        pool: &PgPool,
    ) -> Result<Vec<ActivityWithOrganizationId>, sqlx::Error> {
        sqlx::query_as::<_, ActivityWithOrganizationId>(
            r#"
            SELECT oa.organization_id, a.id, a.name, a.parent_id
            FROM activities a
            INNER JOIN organization_activities oa ON oa.activity_id = a.id
            WHERE oa.organization_id = ANY($1)
            ORDER BY oa.organization_id, a.name
            "#,
        )
        .bind(organization_ids)
        .fetch_all(pool)
        .await
    }

    /// Ids of activities whose name matches the substring (case-insensitive)
    pub async fn matching_by_name(
        search: &str,
        pool: &PgPool,
    ) -> Result<Vec<ActivityId>, sqlx::Error> {
        sqlx::query_scalar::<_, ActivityId>("SELECT id FROM activities WHERE name ILIKE $1")
            .bind(format!("%{}%", search))
            .fetch_all(pool)
            .await
    }

    /// Transitive closure downward: the seed activities plus every activity
    /// reachable by repeatedly following child-of links. Descent is
    /// unbounded in the query; the depth cap bounds it in practice.
    pub async fn descendants_of(
        seed_ids: &[ActivityId],
        pool: &PgPool,
    ) -> Result<Vec<ActivityId>, sqlx::Error> {
        sqlx::query_scalar::<_, ActivityId>(
            r#"
            WITH RECURSIVE descendants AS (
                SELECT id FROM activities WHERE id = ANY($1)
                UNION
                SELECT a.id
                FROM activities a
                INNER JOIN descendants d ON a.parent_id = d.id
            )
            SELECT id FROM descendants
            "#,
        )
        .bind(seed_ids)
        .fetch_all(pool)
        .await
    }

    /// Ids of organizations linked to any of the given activities
    pub async fn organization_ids_linked_to(
        activity_ids: &[ActivityId],
        pool: &PgPool,
    ) -> Result<Vec<OrganizationId>, sqlx::Error> {
        sqlx::query_scalar::<_, OrganizationId>(
            "SELECT DISTINCT organization_id FROM organization_activities WHERE activity_id = ANY($1)",
        )
        .bind(activity_ids)
        .fetch_all(pool)
        .await
    }

    /// Insert a new activity, enforcing the depth cap in the same
    /// transaction as the write. The database trigger backs this up for
    /// writes that bypass the application.
    pub async fn create(
        name: &str,
        parent_id: Option<ActivityId>,
        pool: &PgPool,
    ) -> Result<Self, DirectoryError> {
        let mut tx = pool.begin().await?;

        if let Some(parent_id) = parent_id {
            enforce_depth(&mut tx, parent_id).await?;
        }

        let activity = sqlx::query_as::<_, Activity>(
            "INSERT INTO activities (name, parent_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(name)
        .bind(parent_id)
        .fetch_one(tx.as_mut())
        .await?;

        tx.commit().await?;
        Ok(activity)
    }

    /// Reassign an activity's parent, enforcing the depth cap in the same
    /// transaction as the write.
    pub async fn set_parent(
        id: ActivityId,
        parent_id: Option<ActivityId>,
        pool: &PgPool,
    ) -> Result<Self, DirectoryError> {
        let mut tx = pool.begin().await?;

        if let Some(parent_id) = parent_id {
            enforce_depth(&mut tx, parent_id).await?;
        }

        let activity = sqlx::query_as::<_, Activity>(
            "UPDATE activities SET parent_id = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(parent_id)
        .fetch_one(tx.as_mut())
        .await?;

        tx.commit().await?;
        Ok(activity)
    }
}

/// Walk upward from the prospective parent counting hops until a root is
/// reached. A chain already `MAX_ACTIVITY_LEVELS` long leaves no room for a
/// child; the walk also stops there, which keeps it finite even over a
/// cyclic parent chain.
async fn enforce_depth(
    tx: &mut Transaction<'_, Postgres>,
    parent_id: ActivityId,
) -> Result<(), DirectoryError> {
    let mut depth: i64 = 0;
    let mut cursor = Some(parent_id);

    while let Some(id) = cursor {
        depth += 1;
        if depth >= MAX_ACTIVITY_LEVELS {
            return Err(DirectoryError::ActivityDepthExceeded { depth });
        }

        cursor = sqlx::query_scalar::<_, Option<ActivityId>>(
            "SELECT parent_id FROM activities WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(tx.as_mut())
        .await?
        .flatten();
    }

    Ok(())
}
