use std::time::Duration;
use thiserror::Error;
use tokio::sync::oneshot;
use crate::models::{Coordinate, LocationQuery};

/// Reasons a position could not be obtained
///
/// Every variant is handled the same way: the finder falls back to the
/// unranked catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("timed out waiting for a position")]
    Timeout,

    #[error("position unavailable")]
    PositionUnavailable,

    #[error("geolocation is not supported")]
    Unsupported,
}

/// Single-fire reply slot handed to a provider
pub type PositionReply = oneshot::Sender<Result<Coordinate, LocationError>>;

/// Source of the user's current position
///
/// The provider is consumed by the request, so a position is asked for at
/// most once. It must answer through `reply` exactly once, or drop it.
pub trait GeolocationProvider {
    fn request_position(self, reply: PositionReply);
}

/// Result of the one-time location lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationOutcome {
    Located(Coordinate),
    Unavailable(LocationError),
}

impl LocationOutcome {
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Self::Located(coordinate) => Some(*coordinate),
            Self::Unavailable(_) => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Ask the provider for a position once and wait at most `timeout`
///
/// Never fails and never retries: an error reply, a dropped reply slot or
/// an elapsed timeout all resolve to `LocationOutcome::Unavailable`.
pub async fn acquire_location<P>(provider: P, timeout: Duration) -> LocationOutcome
where
    P: GeolocationProvider,
{
    let (reply, response) = oneshot::channel();
    provider.request_position(reply);

    let result = match tokio::time::timeout(timeout, response).await {
        Ok(Ok(result)) => result,
        Ok(Err(_)) => Err(LocationError::PositionUnavailable),
        Err(_) => Err(LocationError::Timeout),
    };

    match result {
        Ok(coordinate) => {
            tracing::debug!("Location acquired: {}, {}", coordinate.lat, coordinate.lng);
            LocationOutcome::Located(coordinate)
        }
        Err(e) => {
            // A missing position is routine for clients that never share one
            tracing::debug!("Location unavailable: {}", e);
            LocationOutcome::Unavailable(e)
        }
    }
}

/// Provider that always reports the same position
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinate);

impl GeolocationProvider for FixedLocation {
    fn request_position(self, reply: PositionReply) {
        let _ = reply.send(Ok(self.0));
    }
}

/// Provider that always fails with the given reason
#[derive(Debug, Clone, Copy)]
pub struct DeniedLocation(pub LocationError);

impl GeolocationProvider for DeniedLocation {
    fn request_position(self, reply: PositionReply) {
        let _ = reply.send(Err(self.0));
    }
}

/// Stand-in for an environment without geolocation support
#[derive(Debug, Clone, Copy)]
pub struct NoGeolocation;

impl GeolocationProvider for NoGeolocation {
    fn request_position(self, reply: PositionReply) {
        let _ = reply.send(Err(LocationError::Unsupported));
    }
}

/// Position supplied by the client alongside a request
///
/// Both halves must be present and finite; anything else counts as an
/// unavailable position.
#[derive(Debug, Clone, Copy)]
pub struct QueryLocation(Option<Coordinate>);

impl From<&LocationQuery> for QueryLocation {
    fn from(query: &LocationQuery) -> Self {
        match (query.lat, query.lng) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => {
                Self(Some(Coordinate::new(lat, lng)))
            }
            _ => Self(None),
        }
    }
}

impl GeolocationProvider for QueryLocation {
    fn request_position(self, reply: PositionReply) {
        let _ = reply.send(self.0.ok_or(LocationError::PositionUnavailable));
    }
}
