//! Criterion resolvers: one candidate-set computation per filter dimension.
//!
//! Each resolver answers for exactly one dimension and returns `Ok(None)`
//! when that dimension is absent from the request. Resolvers never consume
//! another resolver's output, so the active ones run concurrently against
//! the same pool.

use std::collections::HashSet;

use sqlx::PgPool;

use crate::common::{geo, ActivityId, BuildingId, OrganizationId};
use crate::domains::directory::filters::{OrganizationFilters, RadiusFilter};
use crate::domains::directory::models::{Activity, Building, Organization};

/// Resolve every active dimension into its candidate set, concurrently.
/// Absent dimensions contribute nothing to the result.
pub async fn resolve_candidates(
    filters: &OrganizationFilters,
    pool: &PgPool,
) -> Result<Vec<HashSet<OrganizationId>>, sqlx::Error> {
    let (explicit, in_buildings, with_activities, with_matching_activity, matching_name, in_radius) =
        tokio::try_join!(
            explicit_ids(filters.explicit_ids.as_deref()),
            organizations_in_buildings(filters.building_ids.as_deref(), pool),
            organizations_with_activities(filters.activity_ids.as_deref(), pool),
            organizations_with_matching_activity(filters.activity_search.as_deref(), pool),
            organizations_matching_name(filters.search.as_deref(), pool),
            organizations_within_radius(filters.within_radius, pool),
        )?;

    Ok([
        explicit,
        in_buildings,
        with_activities,
        with_matching_activity,
        matching_name,
        in_radius,
    ]
    .into_iter()
    .flatten()
    .collect())
}

/// Explicit-id dimension: the parsed id set itself is the candidate set.
async fn explicit_ids(
    ids: Option<&[OrganizationId]>,
) -> Result<Option<HashSet<OrganizationId>>, sqlx::Error> {
    Ok(ids.map(|ids| ids.iter().copied().collect()))
}

/// Building dimension: organizations housed in any of the given buildings.
async fn organizations_in_buildings(
    building_ids: Option<&[BuildingId]>,
    pool: &PgPool,
) -> Result<Option<HashSet<OrganizationId>>, sqlx::Error> {
    let Some(building_ids) = building_ids else {
        return Ok(None);
    };

    let ids = Organization::ids_by_building_ids(building_ids, pool).await?;
    Ok(Some(ids.into_iter().collect()))
}

/// Activity dimension: organizations linked to any of the given activities.
/// Exact match only — no hierarchy expansion here.
async fn organizations_with_activities(
    activity_ids: Option<&[ActivityId]>,
    pool: &PgPool,
) -> Result<Option<HashSet<OrganizationId>>, sqlx::Error> {
    let Some(activity_ids) = activity_ids else {
        return Ok(None);
    };

    let ids = Activity::organization_ids_linked_to(activity_ids, pool).await?;
    Ok(Some(ids.into_iter().collect()))
}

/// Activity-text dimension: activities matching the substring seed the
/// closure, and organizations linked to any node of the expanded tree
/// qualify. Searching a root category therefore also finds organizations
/// tagged only with one of its descendants.
async fn organizations_with_matching_activity(
    search: Option<&str>,
    pool: &PgPool,
) -> Result<Option<HashSet<OrganizationId>>, sqlx::Error> {
    let Some(search) = search else {
        return Ok(None);
    };

    let seeds = Activity::matching_by_name(search, pool).await?;
    if seeds.is_empty() {
        return Ok(Some(HashSet::new()));
    }

    let expanded = Activity::descendants_of(&seeds, pool).await?;
    let ids = Activity::organization_ids_linked_to(&expanded, pool).await?;
    Ok(Some(ids.into_iter().collect()))
}

/// Text dimension: substring match on the organization name itself.
async fn organizations_matching_name(
    search: Option<&str>,
    pool: &PgPool,
) -> Result<Option<HashSet<OrganizationId>>, sqlx::Error> {
    let Some(search) = search else {
        return Ok(None);
    };

    let ids = Organization::ids_by_name_match(search, pool).await?;
    Ok(Some(ids.into_iter().collect()))
}

/// Geospatial dimension: keep buildings whose great-circle distance from
/// the center is within the radius (inclusive), then the organizations
/// housed in them.
async fn organizations_within_radius(
    radius: Option<RadiusFilter>,
    pool: &PgPool,
) -> Result<Option<HashSet<OrganizationId>>, sqlx::Error> {
    let Some(filter) = radius else {
        return Ok(None);
    };

    let buildings = Building::find_all(pool).await?;
    let building_ids: Vec<BuildingId> = buildings
        .iter()
        .filter(|building| {
            geo::distance_km(
                filter.latitude,
                filter.longitude,
                building.latitude,
                building.longitude,
            ) <= filter.radius_km
        })
        .map(|building| building.id)
        .collect();

    if building_ids.is_empty() {
        return Ok(Some(HashSet::new()));
    }

    let ids = Organization::ids_by_building_ids(&building_ids, pool).await?;
    Ok(Some(ids.into_iter().collect()))
}
