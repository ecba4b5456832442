use axum::extract::{Extension, Path, Query};
use axum::Json;

use crate::common::{DirectoryError, OrganizationId};
use crate::domains::directory::filters::{OrganizationFilterQuery, OrganizationFilters};
use crate::domains::directory::responses::{OrganizationResponse, OrganizationsListResponse};
use crate::server::app::AppState;

/// Get organizations matching an arbitrary combination of filter dimensions.
pub async fn list_organizations(
    Extension(state): Extension<AppState>,
    Query(query): Query<OrganizationFilterQuery>,
) -> Result<Json<OrganizationsListResponse>, DirectoryError> {
    let filters = OrganizationFilters::try_from(query)?;
    let results = state.directory.resolve(&filters).await?;
    Ok(Json(OrganizationsListResponse { results }))
}

/// Get detailed information about one organization.
pub async fn get_organization(
    Extension(state): Extension<AppState>,
    Path(organization_id): Path<OrganizationId>,
) -> Result<Json<OrganizationResponse>, DirectoryError> {
    let organization = state.directory.resolve_one(organization_id).await?;
    Ok(Json(organization))
}
