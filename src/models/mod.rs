// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Coordinate, Facility, FacilityKind, Specialty, Product, RankedFacility};
pub use requests::{LocationQuery, FacilityDetailQuery};
pub use responses::{FacilityDetailResponse, ProductSummary, ProductListResponse, HealthResponse, ErrorResponse};
