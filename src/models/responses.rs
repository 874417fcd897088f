use serde::Serialize;
use crate::models::domain::{Facility, Product, Specialty};

/// Response for a facility detail screen
#[derive(Debug, Clone, Serialize)]
pub struct FacilityDetailResponse<'a> {
    pub facility: &'a Facility,
    #[serde(rename = "distanceKm", skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    pub categories: Vec<String>,
    #[serde(rename = "selectedCategory")]
    pub selected_category: String,
    pub specialties: Vec<&'a Specialty>,
    #[serde(rename = "noResults")]
    pub no_results: bool,
}

/// Store item with its display badges resolved
#[derive(Debug, Clone, Serialize)]
pub struct ProductSummary<'a> {
    #[serde(flatten)]
    pub product: &'a Product,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<u32>,
    #[serde(rename = "onSale")]
    pub on_sale: bool,
}

impl<'a> From<&'a Product> for ProductSummary<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            product,
            savings: product.savings(),
            on_sale: product.on_sale(),
        }
    }
}

/// Response for the store listing
#[derive(Debug, Clone, Serialize)]
pub struct ProductListResponse<'a> {
    pub products: Vec<ProductSummary<'a>>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
