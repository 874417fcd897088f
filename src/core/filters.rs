use crate::models::{Facility, Specialty};

/// Reserved filter value meaning "no filtering"
///
/// Never used as a specialty category in the catalog.
pub const ALL_CATEGORIES: &str = "All";

/// Distinct specialty categories of a facility, "All" first
///
/// Categories after the sentinel appear in first-seen catalog order.
pub fn categories(facility: &Facility) -> Vec<String> {
    let mut result = vec![ALL_CATEGORIES.to_string()];
    for specialty in &facility.specialties {
        if !result[1..].contains(&specialty.category) {
            result.push(specialty.category.clone());
        }
    }
    result
}

/// Specialties of a facility matching the selected category
///
/// `"All"` returns every specialty. A category nobody offers yields an
/// empty list, which callers render as a "no results" state.
pub fn filter<'a>(facility: &'a Facility, selected: &str) -> Vec<&'a Specialty> {
    if selected == ALL_CATEGORIES {
        return facility.specialties.iter().collect();
    }

    facility
        .specialties
        .iter()
        .filter(|specialty| specialty.category == selected)
        .collect()
}

/// Number of service labels a listing card shows
pub const SERVICE_PREVIEW_LEN: usize = 3;

/// First `limit` service labels, as shown on listing cards
#[inline]
pub fn service_preview(facility: &Facility, limit: usize) -> &[String] {
    &facility.services[..facility.services.len().min(limit)]
}
