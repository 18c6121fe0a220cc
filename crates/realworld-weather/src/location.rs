//! Position sources and the tracker that remembers the last reading.

use std::future::Future;

use crate::types::{Location, LocationError};

/// Anything that can report the device's current position
pub trait LocationSource {
    fn current_position(&self) -> impl Future<Output = Result<Location, LocationError>> + Send;
}

/// Always reports the same coordinates (configured or given on the command line).
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Location);

impl LocationSource for FixedLocation {
    async fn current_position(&self) -> Result<Location, LocationError> {
        Ok(self.0)
    }
}

/// Used when no position source exists on this host.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableLocation;

impl LocationSource for UnavailableLocation {
    async fn current_position(&self) -> Result<Location, LocationError> {
        Err(LocationError::ServiceUnavailable)
    }
}

/// Last known coordinates, or the reason they could not be read
#[derive(Debug, Default)]
pub struct LocationTracker {
    coords: Option<Location>,
    error: Option<String>,
}

impl LocationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn coords(&self) -> Option<&Location> {
        self.coords.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Ask `source` for a position and record the outcome.
    ///
    /// A failed reading clears any previous coordinates.
    pub async fn locate<S: LocationSource>(&mut self, source: &S) -> Result<Location, LocationError> {
        match source.current_position().await {
            Ok(location) => {
                tracing::info!("Got location: {}, {}", location.latitude, location.longitude);
                self.coords = Some(location);
                self.error = None;
                Ok(location)
            }
            Err(e) => {
                tracing::warn!("Location lookup failed: {}", e);
                self.coords = None;
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
