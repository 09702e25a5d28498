#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;
use journey_core::Canvas;
use journey_core::catalog::DEFAULT_CURRENT_NODE;

use crate::context::AppContext;
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::{AchievementVm, ConnectionVm, JourneyMapVm, MapNodeVm, NodeDetailVm};

/// Overlay showing the learning path, progress and next steps.
///
/// Progress is re-read from the store each time `is_visible` changes. Clicking
/// an unlocked node or "Continue Learning" calls `on_navigate` with the node's
/// route.
#[component]
pub fn LearningJourneyMap(
    current_page: Option<String>,
    is_visible: bool,
    on_close: EventHandler<()>,
    on_navigate: EventHandler<String>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let journey = ctx.journey();

    let resource = use_resource(use_reactive((&is_visible,), move |(visible,)| {
        let journey = journey.clone();
        async move {
            if visible {
                Some(journey.overview().await)
            } else {
                None
            }
        }
    }));

    if !is_visible {
        return rsx! {};
    }

    let current = current_page.unwrap_or_else(|| DEFAULT_CURRENT_NODE.to_string());
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "journey-overlay",
            div { class: "journey-card",
                match state {
                    ViewState::Ready(Some(overview)) => {
                        let vm = JourneyMapVm::build(&overview, &current, &Canvas::default());
                        rsx! {
                            JourneyMapPanel { vm, on_close, on_navigate }
                        }
                    }
                    ViewState::Idle | ViewState::Loading | ViewState::Ready(None) => rsx! {
                        p { class: "journey-loading", "Loading..." }
                    },
                }
            }
        }
    }
}

/// Holds the hovered node. Unmounted whenever the map is hidden, so hover
/// never survives a close.
#[component]
fn JourneyMapPanel(
    vm: JourneyMapVm,
    on_close: EventHandler<()>,
    on_navigate: EventHandler<String>,
) -> Element {
    let mut hovered = use_signal(|| None::<String>);
    let on_hover = use_callback(move |id: Option<String>| hovered.set(id));
    let close = use_callback(move |()| {
        hovered.set(None);
        on_close.call(());
    });
    let navigate = use_callback(move |route: String| {
        hovered.set(None);
        on_navigate.call(route);
    });

    rsx! {
        JourneyMapBody {
            vm,
            hovered: hovered(),
            on_hover,
            on_close: close,
            on_navigate: navigate,
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct JourneyMapBodyProps {
    pub vm: JourneyMapVm,
    #[props(!optional)]
    pub hovered: Option<String>,
    pub on_hover: EventHandler<Option<String>>,
    pub on_close: EventHandler<()>,
    pub on_navigate: EventHandler<String>,
}

#[component]
pub fn JourneyMapBody(props: JourneyMapBodyProps) -> Element {
    let JourneyMapBodyProps {
        vm,
        hovered,
        on_hover,
        on_close,
        on_navigate,
    } = props;
    let detail = hovered
        .as_deref()
        .and_then(|id| vm.detail(id))
        .cloned();
    let achievement_count = vm.achievements.len();
    let nodes = vm.nodes.clone();
    // Locked nodes swallow the click.
    let on_select = use_callback(move |id: String| {
        let target = nodes
            .iter()
            .find(|node| node.id == id)
            .and_then(|node| node.navigation_target());
        if let Some(route) = target {
            on_navigate.call(route.to_owned());
        }
    });

    #[cfg(test)]
    {
        if let Some(handles) = try_consume_context::<JourneyMapTestHandles>() {
            handles.register(on_hover, on_select);
        }
    }

    rsx! {
        header { class: "journey-header",
            div { class: "journey-heading",
                div {
                    h2 { class: "journey-title",
                        span { class: "journey-title-icon", "{vm.title_glyph}" }
                        "Learning Journey Map"
                    }
                    p { class: "journey-subtitle",
                        "Visualize your progress and discover your next steps"
                    }
                }
                button {
                    class: "btn btn-ghost journey-close",
                    r#type: "button",
                    "aria-label": "Close",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
            div { class: "journey-stats",
                div { class: "journey-progress",
                    span { class: "journey-progress-label", "Overall Progress:" }
                    div { class: "progress-track",
                        div { class: "progress-fill", style: "width: {vm.progress_width}%;" }
                    }
                    span { class: "journey-progress-value", "{vm.progress_label}" }
                }
                if achievement_count > 0 {
                    div { class: "journey-achievement-count",
                        span { class: "journey-trophy", "🏆" }
                        span { "{achievement_count} achievements" }
                    }
                }
            }
        }

        section { class: "journey-canvas", style: "{vm.canvas_style}",
            svg {
                class: "journey-links",
                "viewBox": "{vm.view_box}",
                "preserveAspectRatio": "xMidYMid meet",
                for (index, link) in vm.connections.iter().enumerate() {
                    ConnectionLine { key: "connection-{index}", link: link.clone() }
                }
            }
            for node in vm.nodes.iter() {
                MapNode {
                    key: "{node.id}",
                    node: node.clone(),
                    hovered: hovered.clone(),
                    on_hover,
                    on_select,
                }
            }
        }

        div { class: "journey-panels",
            match vm.next_step.clone() {
                Some(detail) => rsx! {
                    NextStepCard { detail, on_navigate }
                },
                None => rsx! {},
            }
            if !vm.achievements.is_empty() {
                AchievementsCard { achievements: vm.achievements.clone() }
            }
        }

        match detail {
            Some(detail) => rsx! {
                NodeDetailCard { detail }
            },
            // Keeps the card height stable while nothing is hovered.
            None => rsx! {
                div { class: "journey-detail journey-detail-placeholder", "aria-hidden": "true",
                    div { class: "placeholder-line" }
                    div { class: "placeholder-line" }
                    div { class: "placeholder-line" }
                    div { class: "placeholder-line" }
                }
            },
        }
    }
}

#[component]
fn ConnectionLine(link: ConnectionVm) -> Element {
    rsx! {
        line {
            class: "journey-link",
            "x1": "{link.x1}",
            "y1": "{link.y1}",
            "x2": "{link.x2}",
            "y2": "{link.y2}",
            "stroke": link.stroke(),
            "stroke-width": "1.5",
            "stroke-dasharray": link.dash(),
            "opacity": "0.7",
        }
    }
}

#[component]
fn MapNode(
    node: MapNodeVm,
    #[props(!optional)] hovered: Option<String>,
    on_hover: EventHandler<Option<String>>,
    on_select: EventHandler<String>,
) -> Element {
    let is_hovered = hovered.as_deref() == Some(node.id.as_str());
    let class = node.class_names(is_hovered);
    let z_index = if is_hovered { 20 } else { 10 };
    let disabled = !node.is_unlocked;
    let clicked = node.id.clone();
    let entered = node.id.clone();

    rsx! {
        div {
            class: "{class}",
            style: "left: {node.left}px; top: {node.top}px; z-index: {z_index};",
            "data-node": "{node.id}",
            "aria-disabled": "{disabled}",
            onclick: move |_| on_select.call(clicked.clone()),
            onmouseenter: move |_| on_hover.call(Some(entered.clone())),
            onmouseleave: move |_| on_hover.call(None),
            span { class: "journey-node-glyph", "{node.glyph}" }
            div { class: "journey-node-label",
                div { class: "journey-node-title", "{node.title}" }
                div { class: "journey-node-time", "{node.estimated_time}" }
            }
        }
    }
}

#[component]
fn NextStepCard(detail: NodeDetailVm, on_navigate: EventHandler<String>) -> Element {
    let route = detail.route.clone();

    rsx! {
        div { class: "panel panel-next",
            h3 { class: "panel-title",
                span { "🎯" }
                "Recommended Next Step"
            }
            div { class: "panel-next-body",
                div { class: "panel-icon", "{detail.glyph}" }
                div {
                    h4 { "{detail.title}" }
                    p { class: "muted", "{detail.description}" }
                }
            }
            div { class: "badge-row",
                span { class: "{detail.difficulty_class}", "{detail.difficulty}" }
                span { class: "badge badge-outline", "{detail.estimated_time}" }
            }
            button {
                class: "btn btn-primary btn-block",
                r#type: "button",
                onclick: move |_| on_navigate.call(route.clone()),
                "Continue Learning"
            }
        }
    }
}

#[component]
fn AchievementsCard(achievements: Vec<AchievementVm>) -> Element {
    rsx! {
        div { class: "panel panel-achievements",
            h3 { class: "panel-title",
                span { "✨" }
                "Achievements"
            }
            ul { class: "achievement-list",
                for achievement in achievements {
                    li { class: "achievement",
                        span { class: "achievement-icon", "{achievement.glyph}" }
                        div {
                            div { class: "achievement-title", "{achievement.title}" }
                            div { class: "achievement-description muted", "{achievement.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NodeDetailCard(detail: NodeDetailVm) -> Element {
    rsx! {
        div { class: "journey-detail",
            div { class: "journey-detail-head",
                span { class: "panel-icon", "{detail.glyph}" }
                h4 { "{detail.title}" }
                span { class: "{detail.difficulty_class}", "{detail.difficulty}" }
            }
            p { class: "muted", "{detail.description}" }
            div { class: "journey-detail-stats",
                span { "⏱️ {detail.estimated_time}" }
                span { "✅ {detail.completion_label}" }
                match detail.quiz_stats.clone() {
                    Some(stats) => rsx! {
                        span { "📊 {stats.average_label}" }
                        span { "🎯 {stats.taken_label}" }
                    },
                    None => rsx! {},
                }
            }
            div { class: "badge-row",
                for skill in detail.skills.iter() {
                    span { class: "badge badge-outline", "{skill}" }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct JourneyMapTestHandles {
    hover: Rc<RefCell<Option<Callback<Option<String>>>>>,
    select: Rc<RefCell<Option<Callback<String>>>>,
}

#[cfg(test)]
impl JourneyMapTestHandles {
    fn register(&self, hover: Callback<Option<String>>, select: Callback<String>) {
        *self.hover.borrow_mut() = Some(hover);
        *self.select.borrow_mut() = Some(select);
    }

    pub(crate) fn hover(&self) -> Callback<Option<String>> {
        (*self.hover.borrow()).expect("map hover registered")
    }

    pub(crate) fn select(&self) -> Callback<String> {
        (*self.select.borrow()).expect("map select registered")
    }
}
