mod achievement;
mod ids;
mod node;
mod path;
mod progress;

pub use ids::{NodeId, PathId};

pub use achievement::{Achievement, AchievementKind};
pub use node::{Difficulty, IconId, LearningNode, NodeKind};
pub use path::LearningPath;
pub use progress::{PageAnalytics, ProgressParseError, QuizAttempt, QuizProgress};
