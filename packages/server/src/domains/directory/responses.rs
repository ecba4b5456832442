//! Response aggregates returned by the directory.

use serde::Serialize;

use crate::common::{ActivityId, BuildingId, OrganizationId};

#[derive(Debug, Clone, Serialize)]
pub struct OrganizationsListResponse {
    pub results: Vec<OrganizationResponse>,
}

/// Fully hydrated organization aggregate. Relation lists are `None` rather
/// than empty when the organization has no rows for them.
#[derive(Debug, Clone, Serialize)]
pub struct OrganizationResponse {
    pub id: OrganizationId,
    pub name: String,
    pub building: BuildingResponse,
    pub activities: Option<Vec<ActivityResponse>>,
    pub phones: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildingResponse {
    pub id: BuildingId,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityResponse {
    pub id: ActivityId,
    pub name: String,
    pub parent_id: Option<ActivityId>,
}
