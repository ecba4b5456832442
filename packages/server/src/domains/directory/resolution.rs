//! Intersection engine: combines per-dimension candidate sets into the
//! final identifier constraint.

use std::collections::HashSet;

use crate::common::OrganizationId;

/// Outcome of combining the candidate sets of the active filter dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No filter dimension was present: fetch everything.
    Unconstrained,
    /// Fetch exactly these organizations (possibly none).
    Ids(HashSet<OrganizationId>),
}

impl Resolution {
    /// Intersect candidate sets in arrival order: adopt the first set,
    /// intersect with each following one, and stop as soon as the running
    /// result is empty — later dimensions cannot win members back.
    pub fn combine<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = HashSet<OrganizationId>>,
    {
        let mut resolution = Resolution::Unconstrained;

        for set in candidates {
            resolution = match resolution {
                Resolution::Unconstrained => Resolution::Ids(set),
                Resolution::Ids(current) => Resolution::Ids(&current & &set),
            };

            if resolution.is_empty() {
                break;
            }
        }

        resolution
    }

    /// True when the combination has already settled on "matches nothing".
    pub fn is_empty(&self) -> bool {
        matches!(self, Resolution::Ids(ids) if ids.is_empty())
    }
}
