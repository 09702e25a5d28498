mod journey_map;
mod state;
mod topic;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use journey_map::{JourneyMapBody, JourneyMapBodyProps, LearningJourneyMap};
pub use state::{ViewState, view_state_from_resource};
pub use topic::{HomeView, TopicView};
