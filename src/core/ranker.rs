use std::cmp::Ordering;
use serde::Serialize;
use crate::models::{Coordinate, Facility, RankedFacility};
use crate::core::distance::{format_distance, haversine_distance};
use crate::core::filters::{service_preview, SERVICE_PREVIEW_LEN};

/// Heading shown when facilities are ranked from the user's position
pub const NEARBY_HEADING: &str = "Nearby Facilities";
/// Heading shown when no position is known
pub const ALL_HEADING: &str = "All Facilities";

/// Rank facilities nearest-first from the user's position
///
/// Without a position the catalog order is returned unchanged and no
/// distance is attached. With one, every facility gets its great-circle
/// distance and the sequence is sorted ascending by it. The sort is
/// stable, so equal distances keep their catalog order.
pub fn rank(user: Option<Coordinate>, facilities: &[Facility]) -> Vec<RankedFacility<'_>> {
    let Some(user) = user else {
        return facilities
            .iter()
            .map(|facility| ranked_facility(facility, None))
            .collect();
    };

    let mut ranked: Vec<RankedFacility<'_>> = facilities
        .iter()
        .map(|facility| {
            ranked_facility(facility, Some(haversine_distance(user, facility.location)))
        })
        .collect();

    ranked.sort_by(|a, b| {
        compare_distance(
            a.distance_km.unwrap_or(f64::NAN),
            b.distance_km.unwrap_or(f64::NAN),
        )
    });

    ranked
}

fn ranked_facility(facility: &Facility, distance_km: Option<f64>) -> RankedFacility<'_> {
    RankedFacility {
        facility,
        distance_km,
        distance_label: distance_km.map(format_distance),
        service_preview: service_preview(facility, SERVICE_PREVIEW_LEN),
    }
}

/// Ascending order with NaN after every number
///
/// Two NaNs compare equal, so a stable sort leaves them in input order.
#[inline]
pub fn compare_distance(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// A ranked listing together with how it should be framed
#[derive(Debug, Clone, Serialize)]
pub struct RankedView<'a> {
    pub heading: &'static str,
    #[serde(rename = "sortedByDistance")]
    pub sorted_by_distance: bool,
    #[serde(rename = "locationUnavailable")]
    pub location_unavailable: bool,
    pub facilities: Vec<RankedFacility<'a>>,
}

impl<'a> RankedView<'a> {
    pub fn build(user: Option<Coordinate>, facilities: &'a [Facility]) -> Self {
        let located = user.is_some();
        tracing::debug!(
            "Ranking {} facilities ({})",
            facilities.len(),
            if located { "by distance" } else { "catalog order" }
        );

        Self {
            heading: if located { NEARBY_HEADING } else { ALL_HEADING },
            sorted_by_distance: located,
            location_unavailable: !located,
            facilities: rank(user, facilities),
        }
    }
}
