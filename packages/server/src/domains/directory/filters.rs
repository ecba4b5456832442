//! Organization filter parsing and validation.

use serde::Deserialize;

use crate::common::{ActivityId, BuildingId, DirectoryError, OrganizationId};

/// Raw query-string form of the organization filters, one parameter per
/// filter dimension. Id lists arrive as comma-delimited strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganizationFilterQuery {
    pub ids: Option<String>,
    pub building_ids: Option<String>,
    pub activity_ids: Option<String>,
    pub activity_search: Option<String>,
    pub search: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub radius: Option<f64>,
}

/// Fully-enumerated filter set: one optional value per dimension. A `None`
/// field means the dimension is absent from the request.
#[derive(Debug, Clone, Default)]
pub struct OrganizationFilters {
    pub explicit_ids: Option<Vec<OrganizationId>>,
    pub building_ids: Option<Vec<BuildingId>>,
    pub activity_ids: Option<Vec<ActivityId>>,
    pub activity_search: Option<String>,
    pub search: Option<String>,
    pub within_radius: Option<RadiusFilter>,
}

/// Geospatial proximity filter. All three parts are required together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusFilter {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
}

impl TryFrom<OrganizationFilterQuery> for OrganizationFilters {
    type Error = DirectoryError;

    fn try_from(query: OrganizationFilterQuery) -> Result<Self, Self::Error> {
        let within_radius = match (query.lat, query.lon, query.radius) {
            (Some(latitude), Some(longitude), Some(radius_km)) => Some(RadiusFilter {
                latitude,
                longitude,
                radius_km,
            }),
            (None, None, None) => None,
            _ => {
                return Err(DirectoryError::InvalidFilter(
                    "lat, lon and radius must be provided together".to_string(),
                ))
            }
        };

        Ok(Self {
            explicit_ids: query.ids.as_deref().and_then(parse_id_list),
            building_ids: query.building_ids.as_deref().and_then(parse_id_list),
            activity_ids: query.activity_ids.as_deref().and_then(parse_id_list),
            activity_search: non_blank(query.activity_search),
            search: non_blank(query.search),
            within_radius,
        })
    }
}

/// Parse a comma-delimited id list. Non-numeric tokens are silently
/// discarded; a blank parameter counts as absent.
fn parse_id_list(raw: &str) -> Option<Vec<i32>> {
    if raw.trim().is_empty() {
        return None;
    }

    Some(
        raw.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()))
            .filter_map(|token| token.parse::<i32>().ok())
            .collect(),
    )
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
