//! Read-side facade over the directory.

use sqlx::PgPool;

use crate::common::{DirectoryError, OrganizationId};
use crate::domains::directory::filters::OrganizationFilters;
use crate::domains::directory::models::Organization;
use crate::domains::directory::resolution::Resolution;
use crate::domains::directory::responses::OrganizationResponse;
use crate::domains::directory::{hydrator, resolvers};

/// Resolves filter combinations into hydrated organization aggregates
/// against a single store handle. All state is request-scoped.
#[derive(Clone)]
pub struct DirectoryService {
    pool: PgPool,
}

impl DirectoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Resolve a filter combination into hydrated aggregates.
    ///
    /// Active dimensions are resolved concurrently, combined by the
    /// intersection engine, and a known-empty combination returns without
    /// touching the store again.
    pub async fn resolve(
        &self,
        filters: &OrganizationFilters,
    ) -> Result<Vec<OrganizationResponse>, DirectoryError> {
        let candidates = resolvers::resolve_candidates(filters, &self.pool).await?;

        let pairs = match Resolution::combine(candidates) {
            resolution if resolution.is_empty() => return Ok(Vec::new()),
            Resolution::Unconstrained => {
                Organization::find_with_buildings(None, &self.pool).await?
            }
            Resolution::Ids(ids) => {
                let ids: Vec<OrganizationId> = ids.into_iter().collect();
                Organization::find_with_buildings(Some(ids.as_slice()), &self.pool).await?
            }
        };

        Ok(hydrator::hydrate(pairs, &self.pool).await?)
    }

    /// Resolve a single organization by id. A miss is `OrganizationNotFound`,
    /// distinct from a filter combination that matches nothing.
    pub async fn resolve_one(
        &self,
        organization_id: OrganizationId,
    ) -> Result<OrganizationResponse, DirectoryError> {
        let filters = OrganizationFilters {
            explicit_ids: Some(vec![organization_id]),
            ..OrganizationFilters::default()
        };

        self.resolve(&filters)
            .await?
            .into_iter()
            .next()
            .ok_or(DirectoryError::OrganizationNotFound)
    }
}
