use journey_core::Canvas;
use journey_core::model::{Achievement, IconId, LearningNode, QuizProgress};
use services::JourneyOverview;

use crate::vm::icons::{difficulty_class, icon_glyph};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeStatus {
    Completed,
    Unlocked,
    Locked,
}

impl NodeStatus {
    fn of(node: &LearningNode) -> Self {
        if node.is_completed {
            NodeStatus::Completed
        } else if node.is_unlocked {
            NodeStatus::Unlocked
        } else {
            NodeStatus::Locked
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            NodeStatus::Completed => "node-completed",
            NodeStatus::Unlocked => "node-unlocked",
            NodeStatus::Locked => "node-locked",
        }
    }
}

/// A node bubble on the canvas. `left`/`top` are the bubble's top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct MapNodeVm {
    pub id: String,
    pub title: String,
    pub estimated_time: String,
    pub glyph: &'static str,
    pub status: NodeStatus,
    pub is_unlocked: bool,
    pub is_current: bool,
    pub left: f64,
    pub top: f64,
    pub route: String,
}

impl MapNodeVm {
    /// Route to open on click; locked nodes go nowhere.
    #[must_use]
    pub fn navigation_target(&self) -> Option<&str> {
        self.is_unlocked.then_some(self.route.as_str())
    }

    #[must_use]
    pub fn class_names(&self, is_hovered: bool) -> String {
        let mut class = format!("journey-node {}", self.status.class());
        if self.is_current {
            class.push_str(" node-current");
        }
        if is_hovered {
            class.push_str(" node-hovered");
        }
        class
    }
}

/// Line between consecutive nodes, styled by the earlier node's completion.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectionVm {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub completed: bool,
}

impl ConnectionVm {
    #[must_use]
    pub fn stroke(&self) -> &'static str {
        if self.completed { "#22c55e" } else { "#cbd5e1" }
    }

    #[must_use]
    pub fn dash(&self) -> &'static str {
        if self.completed { "0" } else { "4,4" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizStatsVm {
    pub average_label: String,
    pub taken_label: String,
}

/// Everything the hover panel and the next-step card show for one node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeDetailVm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub glyph: &'static str,
    pub difficulty: &'static str,
    pub difficulty_class: &'static str,
    pub estimated_time: String,
    pub completion_label: String,
    pub skills: Vec<String>,
    pub quiz_stats: Option<QuizStatsVm>,
    pub route: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AchievementVm {
    pub title: &'static str,
    pub description: &'static str,
    pub glyph: &'static str,
}

impl From<&Achievement> for AchievementVm {
    fn from(achievement: &Achievement) -> Self {
        Self {
            title: achievement.title,
            description: achievement.description,
            glyph: icon_glyph(achievement.icon),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct JourneyMapVm {
    pub title_glyph: &'static str,
    pub path_title: String,
    pub view_box: String,
    pub canvas_style: String,
    /// 0..=100, for the progress bar width.
    pub progress_width: f64,
    pub progress_label: String,
    pub nodes: Vec<MapNodeVm>,
    pub connections: Vec<ConnectionVm>,
    pub achievements: Vec<AchievementVm>,
    pub next_step: Option<NodeDetailVm>,
    details: Vec<NodeDetailVm>,
}

impl JourneyMapVm {
    #[must_use]
    pub fn build(overview: &JourneyOverview, current_page: &str, canvas: &Canvas) -> Self {
        let path = &overview.path;
        let total = path.len();

        let nodes = path
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| {
                let center = canvas.node_position(index, total);
                let status = NodeStatus::of(node);
                MapNodeVm {
                    id: node.id.to_string(),
                    title: node.title.clone(),
                    estimated_time: node.estimated_time.clone(),
                    glyph: if status == NodeStatus::Completed {
                        icon_glyph(IconId::CheckCircle)
                    } else {
                        icon_glyph(node.icon)
                    },
                    status,
                    is_unlocked: node.is_unlocked,
                    is_current: node.id == current_page,
                    left: center.x - canvas.node_radius,
                    top: center.y - canvas.node_radius,
                    route: node.path.clone(),
                }
            })
            .collect();

        let connections = canvas
            .connections(total)
            .into_iter()
            .map(|link| ConnectionVm {
                x1: link.from.x,
                y1: link.from.y,
                x2: link.to.x,
                y2: link.to.y,
                completed: path.nodes[link.from_index].is_completed,
            })
            .collect();

        let details = path
            .nodes
            .iter()
            .map(|node| map_node_detail(node, overview.quiz.as_ref()))
            .collect();

        Self {
            title_glyph: icon_glyph(IconId::Path),
            path_title: path.title.clone(),
            view_box: format!("0 0 {} {}", canvas.width, canvas.height),
            canvas_style: format!("width: {}px; height: {}px;", canvas.width, canvas.height),
            progress_width: path.total_progress.clamp(0.0, 100.0),
            progress_label: percent_label(path.total_progress),
            nodes,
            connections,
            achievements: overview.achievements.iter().map(AchievementVm::from).collect(),
            next_step: overview
                .next_recommended()
                .map(|node| map_node_detail(node, overview.quiz.as_ref())),
            details,
        }
    }

    /// Detail panel content for the node with `id`, if it is on the map.
    #[must_use]
    pub fn detail(&self, id: &str) -> Option<&NodeDetailVm> {
        self.details.iter().find(|detail| detail.id == id)
    }
}

fn map_node_detail(node: &LearningNode, quiz: Option<&QuizProgress>) -> NodeDetailVm {
    let quiz_stats = quiz.filter(|_| node.is_quiz()).map(|quiz| QuizStatsVm {
        average_label: format!("{}% avg score", round_label(quiz.average_score())),
        taken_label: format!("{} quizzes taken", quiz.attempt_count()),
    });

    NodeDetailVm {
        id: node.id.to_string(),
        title: node.title.clone(),
        description: node.description.clone(),
        glyph: icon_glyph(node.icon),
        difficulty: node.difficulty.as_str(),
        difficulty_class: difficulty_class(node.difficulty),
        estimated_time: node.estimated_time.clone(),
        completion_label: format!("{}% complete", round_label(node.completion_rate)),
        skills: node.skills.clone(),
        quiz_stats,
        route: node.path.clone(),
    }
}

fn round_label(value: f64) -> String {
    format!("{:.0}", value.round())
}

fn percent_label(value: f64) -> String {
    format!("{}%", round_label(value))
}
