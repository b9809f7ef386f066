mod geolocation;

pub use self::geolocation::{
    AcquisitionOptions, Geolocation, GeolocationOperation, DEFAULT_TIMEOUT_MS,
    MAX_MAXIMUM_AGE_MS, MAX_TIMEOUT_MS, MIN_TIMEOUT_MS,
};

pub use crux_core::render::Render;

// The Effect derive expands to `WithContext<App, Effect>`.
#[allow(unused_imports)]
use crate::App;
use crate::event::Event;

#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub render: Render<Event>,
    pub geolocation: Geolocation<Event>,
}
