pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::SiteConfig;

pub use adapters::{
    console::{ConsoleNavigator, ConsoleNotifier},
    http::ReqwestRelay,
    memory::{RecordingNavigator, RecordingNotifier},
};
pub use crate::core::{
    booking::BookingForm,
    confirmation::Confirmation,
    contact::ContactForm,
    submission::{SubmissionPhase, SubmitOutcome},
};
pub use utils::error::{FormError, Result};
