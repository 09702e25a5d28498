#![forbid(unsafe_code)]

pub mod achievements;
pub mod app_services;
pub mod error;
pub mod journey_service;
pub mod progress;
pub mod recommend;

pub use achievements::derive_achievements;
pub use app_services::AppServices;
pub use error::AppServicesError;
pub use journey_service::{JourneyOverview, JourneyService};
pub use progress::{ProgressSnapshot, derive_path, load_snapshot};
pub use recommend::next_recommended;
