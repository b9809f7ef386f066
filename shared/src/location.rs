use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::recovery::PermissionDialog;

#[derive(Debug, Clone, Copy, PartialEq, Error, Serialize, Deserialize)]
pub enum CoordinateError {
    #[error("coordinates must be finite")]
    NonFinite,
    #[error("latitude {0} out of range [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} out of range [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("accuracy {0} must be a non-negative finite number of meters")]
    InvalidAccuracy(f64),
}

/// A position as reported by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
    pub accuracy_m: Option<f64>,
}

impl Position {
    pub fn new(lat: f64, lng: f64, accuracy_m: Option<f64>) -> Result<Self, CoordinateError> {
        Self { lat, lng, accuracy_m }.validated()
    }

    /// Shell payloads bypass `new`, so results are re-checked before use.
    pub fn validated(self) -> Result<Self, CoordinateError> {
        if !self.lat.is_finite() || !self.lng.is_finite() {
            return Err(CoordinateError::NonFinite);
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(CoordinateError::LatitudeOutOfRange(self.lat));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(CoordinateError::LongitudeOutOfRange(self.lng));
        }
        if let Some(accuracy) = self.accuracy_m {
            if !accuracy.is_finite() || accuracy < 0.0 {
                return Err(CoordinateError::InvalidAccuracy(accuracy));
            }
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("position unavailable")]
    PositionUnavailable,

    #[error("location request timed out")]
    Timeout,

    #[error("geolocation not supported on this platform")]
    Unsupported,
}

impl LocationError {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::PermissionDenied => "LOCATION_PERMISSION_DENIED",
            Self::PositionUnavailable => "LOCATION_UNAVAILABLE",
            Self::Timeout => "LOCATION_TIMEOUT",
            Self::Unsupported => "LOCATION_UNSUPPORTED",
        }
    }

    /// Maps `GeolocationPositionError.code` from the browser API.
    #[must_use]
    pub const fn from_platform_code(code: u16) -> Self {
        match code {
            1 => Self::PermissionDenied,
            2 => Self::PositionUnavailable,
            3 => Self::Timeout,
            _ => Self::Unsupported,
        }
    }

    #[must_use]
    pub const fn is_permission_error(self) -> bool {
        matches!(self, Self::PermissionDenied)
    }

    #[must_use]
    pub fn user_facing_message(self) -> &'static str {
        match self {
            Self::PermissionDenied => "Location access is blocked for this site.",
            Self::PositionUnavailable => "Your position could not be determined.",
            Self::Timeout => "Finding your location took too long.",
            Self::Unsupported => "This browser cannot share your location.",
        }
    }
}

pub type GeolocationResult = Result<Position, LocationError>;

/// Generation token attached to every acquisition attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AttemptEpoch(pub u64);

impl fmt::Display for AttemptEpoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LocationStatus {
    #[default]
    Idle,
    Locating,
    Located { position: Position },
    Failed { error: LocationError },
}

impl LocationStatus {
    #[must_use]
    pub const fn is_locating(&self) -> bool {
        matches!(self, Self::Locating)
    }

    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::Located { position } => Some(*position),
            _ => None,
        }
    }
}

/// Outcome of handing an acquisition result to [`LocationContext::publish`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Publication {
    Located(Position),
    Failed(LocationError),
    /// Superseded by a newer attempt or already published.
    Stale,
}

/// Tracks acquisition attempts and publishes their results.
///
/// Only the latest issued attempt may publish, and only once. A failure
/// opens the recovery dialog; a success closes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationContext {
    last_issued: Option<AttemptEpoch>,
    outstanding: Option<AttemptEpoch>,
    status: LocationStatus,
    attempts: u64,
}

impl LocationContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_attempt(&mut self) -> AttemptEpoch {
        let epoch = AttemptEpoch(self.last_issued.map_or(1, |e| e.0 + 1));
        self.last_issued = Some(epoch);
        self.outstanding = Some(epoch);
        self.status = LocationStatus::Locating;
        self.attempts += 1;
        epoch
    }

    pub fn publish(
        &mut self,
        epoch: AttemptEpoch,
        result: GeolocationResult,
        dialog: &mut PermissionDialog,
    ) -> Publication {
        if self.outstanding != Some(epoch) {
            return Publication::Stale;
        }
        self.outstanding = None;

        match result.and_then(|p| p.validated().map_err(|_| LocationError::PositionUnavailable)) {
            Ok(position) => {
                self.status = LocationStatus::Located { position };
                dialog.close();
                Publication::Located(position)
            }
            Err(error) => {
                self.status = LocationStatus::Failed { error };
                dialog.open();
                Publication::Failed(error)
            }
        }
    }

    #[must_use]
    pub const fn status(&self) -> &LocationStatus {
        &self.status
    }

    #[must_use]
    pub const fn outstanding(&self) -> Option<AttemptEpoch> {
        self.outstanding
    }

    #[must_use]
    pub const fn attempts(&self) -> u64 {
        self.attempts
    }
}
