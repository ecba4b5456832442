//! Aggregate hydration: batch-load related activities and phones, then
//! merge them into response aggregates.

use std::collections::HashMap;

use sqlx::PgPool;

use crate::common::OrganizationId;
use crate::domains::directory::models::{Activity, Building, Organization, Phone};
use crate::domains::directory::responses::{
    ActivityResponse, BuildingResponse, OrganizationResponse,
};

/// Hydrate base (organization, building) pairs into full aggregates.
///
/// Exactly one batched query per relation regardless of how many
/// organizations came back; the two fetches run concurrently and both
/// complete before merging. Base-fetch ordering is preserved.
pub async fn hydrate(
    pairs: Vec<(Organization, Building)>,
    pool: &PgPool,
) -> Result<Vec<OrganizationResponse>, sqlx::Error> {
    if pairs.is_empty() {
        return Ok(Vec::new());
    }

    let organization_ids: Vec<OrganizationId> = pairs.iter().map(|(org, _)| org.id).collect();

    let (activity_rows, phones) = tokio::try_join!(
        Activity::find_for_organization_ids(&organization_ids, pool),
        Phone::find_for_organization_ids(&organization_ids, pool),
    )?;

    let mut activities_by_organization: HashMap<OrganizationId, Vec<ActivityResponse>> =
        HashMap::new();
    for row in activity_rows {
        activities_by_organization
            .entry(row.organization_id)
            .or_default()
            .push(ActivityResponse {
                id: row.activity.id,
                name: row.activity.name,
                parent_id: row.activity.parent_id,
            });
    }

    let mut phones_by_organization: HashMap<OrganizationId, Vec<String>> = HashMap::new();
    for phone in phones {
        phones_by_organization
            .entry(phone.organization_id)
            .or_default()
            .push(phone.phone_number);
    }

    Ok(pairs
        .into_iter()
        .map(|(organization, building)| OrganizationResponse {
            id: organization.id,
            name: organization.name,
            building: BuildingResponse {
                id: building.id,
                address: building.address,
                latitude: building.latitude,
                longitude: building.longitude,
            },
            activities: activities_by_organization.remove(&organization.id),
            phones: phones_by_organization.remove(&organization.id),
        })
        .collect())
}
