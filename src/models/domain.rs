use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees
///
/// Values are not range-checked; out-of-range coordinates still produce a
/// (meaningless) distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Kind of healthcare facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityKind {
    Hospital,
    Clinic,
    Diagnostic,
}

/// A medical department offered by one facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specialty {
    pub id: u32,
    pub name: String,
    /// Free-form grouping tag used by the specialty filter
    pub category: String,
    pub description: String,
    #[serde(rename = "availableDoctors")]
    pub available_doctors: u32,
}

/// Static catalog record for a hospital, clinic or diagnostic center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FacilityKind,
    pub address: String,
    pub rating: f32,
    pub reviews: u32,
    pub services: Vec<String>,
    pub specialties: Vec<Specialty>,
    #[serde(rename = "isOpen")]
    pub is_open: bool,
    pub phone: String,
    pub email: String,
    pub website: String,
    #[serde(rename = "operatingHours")]
    pub operating_hours: String,
    pub location: Coordinate,
}

/// A facility as seen from the user's position
///
/// Borrows the catalog record; ranking never copies or mutates it.
#[derive(Debug, Clone, Serialize)]
pub struct RankedFacility<'a> {
    #[serde(flatten)]
    pub facility: &'a Facility,
    /// Kilometers from the user, absent when no location is known
    #[serde(rename = "distanceKm", skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    /// Card label for `distance_km`, e.g. `1.6 km`
    #[serde(rename = "distanceLabel", skip_serializing_if = "Option::is_none")]
    pub distance_label: Option<String>,
    /// Leading service labels shown on the card
    #[serde(rename = "servicePreview")]
    pub service_preview: &'a [String],
}

/// Store item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    /// Price in whole rupees
    pub price: u32,
    /// Pre-discount price, present only for discounted items
    #[serde(rename = "originalPrice", default)]
    pub original_price: Option<u32>,
    pub description: String,
    pub features: Vec<String>,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
    pub rating: f32,
    pub reviews: u32,
}

impl Product {
    /// Amount saved against the original price, if the item is discounted
    pub fn savings(&self) -> Option<u32> {
        self.original_price
            .map(|original| original.saturating_sub(self.price))
    }

    /// Discounted items are only advertised as on sale while in stock
    pub fn on_sale(&self) -> bool {
        self.original_price.is_some() && self.in_stock
    }
}
