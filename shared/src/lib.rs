//! Shared core for the location permission recovery flow.
//!
//! The shell owns rendering and the platform geolocation call. This crate
//! owns device classification, the recovery dialog state and the retry
//! protocol around acquisition attempts.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod capabilities;
pub mod device;
pub mod event;
pub mod instructions;
pub mod location;
pub mod model;
pub mod recovery;
pub mod view;

pub use app::App;
pub use capabilities::{AcquisitionOptions, Capabilities, Effect, GeolocationOperation};
pub use crux_core::App as CruxApp;
pub use device::{classify, DeviceCategory, DeviceProfile};
pub use event::Event;
pub use instructions::{instructions_for, HeaderIcon, RecoveryInstructionSet};
pub use location::{
    AttemptEpoch, CoordinateError, GeolocationResult, LocationContext, LocationError,
    LocationStatus, Position, Publication,
};
pub use model::Model;
pub use recovery::{
    AcquireLocation, ActionOutcome, DialogState, PermissionDialog, RecoveryController, UserAction,
};
pub use view::{LocationModalView, LocationStatusView, ViewModel};

pub mod app {
    use tracing::{debug, info, warn};

    use super::*;

    #[derive(Default)]
    pub struct App;

    /// Issues acquisition attempts through the geolocation capability, tagging
    /// each with a fresh epoch so superseded results can be dropped.
    struct ShellAcquirer<'a> {
        location: &'a mut LocationContext,
        options: AcquisitionOptions,
        caps: &'a Capabilities,
    }

    impl AcquireLocation for ShellAcquirer<'_> {
        fn request_location(&mut self) {
            let epoch = self.location.begin_attempt();
            debug!(%epoch, "requesting current position");
            self.caps
                .geolocation
                .current_position(epoch, self.options, move |result| {
                    Event::LocationResolved { epoch, result }
                });
        }
    }

    impl App {
        fn acquirer<'a>(
            location: &'a mut LocationContext,
            options: AcquisitionOptions,
            caps: &'a Capabilities,
        ) -> ShellAcquirer<'a> {
            ShellAcquirer {
                location,
                options,
                caps,
            }
        }

        fn handle_dialog_action(action: UserAction, model: &mut Model, caps: &Capabilities) {
            let mut acquirer = Self::acquirer(&mut model.location, model.options, caps);
            let outcome = model.controller.handle(action, &mut model.dialog, &mut acquirer);
            info!(?action, ?outcome, "dialog action handled");
        }
    }

    impl crux_core::App for App {
        type Event = Event;
        type Model = Model;
        type ViewModel = ViewModel;
        type Capabilities = Capabilities;

        fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
            let event_name = event.name();
            if event.is_user_initiated() {
                info!(event = event_name, "user action");
            } else {
                debug!(event = event_name, "event received");
            }

            match event {
                Event::Noop => return,

                Event::Activated { user_agent } => {
                    let category = model.controller.activate(&user_agent);
                    info!(%category, "device classified");
                }

                Event::LocationRequested => {
                    Self::acquirer(&mut model.location, model.options, caps).request_location();
                }

                Event::LocationResolved { epoch, result } => {
                    match model.location.publish(epoch, result, &mut model.dialog) {
                        Publication::Located(position) => {
                            info!(%epoch, accuracy_m = ?position.accuracy_m, "position acquired");
                        }
                        Publication::Failed(error) => {
                            warn!(%epoch, code = error.code(), "location unavailable, showing recovery dialog");
                        }
                        Publication::Stale => {
                            debug!(%epoch, "discarding superseded location result");
                            return;
                        }
                    }
                }

                Event::RetryPressed => Self::handle_dialog_action(UserAction::Retry, model, caps),

                Event::DialogDismissed => {
                    Self::handle_dialog_action(UserAction::Dismiss, model, caps);
                }

                Event::AcquisitionOptionsChanged(options) => {
                    model.options = options.validated();
                    debug!(options = ?model.options, "acquisition options updated");
                }
            }

            caps.render.render();
        }

        fn view(&self, model: &Model) -> ViewModel {
            ViewModel {
                device: model.controller.device(),
                modal: LocationModalView::new(model.is_dialog_open(), model.controller.instructions()),
                location: LocationStatusView::from(model.location.status()),
            }
        }
    }
}
