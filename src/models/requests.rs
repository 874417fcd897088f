use serde::{Deserialize, Serialize};
use validator::Validate;

/// Optional user position passed with listing requests
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationQuery {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

/// Query for a facility detail screen
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FacilityDetailQuery {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    /// Specialty category to show, "All" when omitted
    #[validate(length(min = 1, max = 64))]
    #[serde(default)]
    pub category: Option<String>,
}

impl FacilityDetailQuery {
    pub fn location(&self) -> LocationQuery {
        LocationQuery {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_category_rejected() {
        let query = FacilityDetailQuery {
            category: Some(String::new()),
            ..Default::default()
        };
        assert!(query.validate().is_err());

        let query = FacilityDetailQuery {
            category: Some("Cardiology".to_string()),
            ..Default::default()
        };
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_missing_category_is_valid() {
        assert!(FacilityDetailQuery::default().validate().is_ok());
    }
}
