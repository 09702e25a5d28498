mod icons;
mod journey_vm;

pub use icons::{difficulty_class, icon_glyph};
pub use journey_vm::{
    AchievementVm, ConnectionVm, JourneyMapVm, MapNodeVm, NodeDetailVm, NodeStatus, QuizStatsVm,
};
