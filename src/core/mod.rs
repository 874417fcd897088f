// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod geolocation;
pub mod navigation;
pub mod ranker;

pub use distance::{haversine_distance, format_distance, EARTH_RADIUS_KM};
pub use filters::{categories, filter, service_preview, ALL_CATEGORIES, SERVICE_PREVIEW_LEN};
pub use geolocation::{acquire_location, GeolocationProvider, LocationError, LocationOutcome};
pub use navigation::{Screen, Tab, ViewAction, ViewState};
pub use ranker::{rank, RankedView};
