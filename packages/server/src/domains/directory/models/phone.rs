use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{OrganizationId, PhoneId};

/// Phone number belonging to one organization
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Phone {
    pub id: PhoneId,
    pub organization_id: OrganizationId,
    pub phone_number: String,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Phone {
    /// Batch-load phones for multiple organizations
    pub async fn find_for_organization_ids(
        organization_ids: &[OrganizationId],
        pool: &PgPool,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Phone>(
            "SELECT * FROM phones WHERE organization_id = ANY($1) ORDER BY id",
        )
        .bind(organization_ids)
        .fetch_all(pool)
        .await
    }
}
