use dioxus::prelude::*;
use journey_core::catalog::beginner_path;

use crate::vm::{difficulty_class, icon_glyph};

#[component]
pub fn HomeView() -> Element {
    rsx! {
        TopicPage { route: "/".to_string() }
    }
}

#[component]
pub fn TopicView(slug: String) -> Element {
    rsx! {
        TopicPage { route: format!("/{slug}") }
    }
}

/// Landing page for one catalog node, looked up by its route.
#[component]
fn TopicPage(route: String) -> Element {
    let path = beginner_path();
    let Some(node) = path.node_by_path(&route).cloned() else {
        return rsx! {
            div { class: "page",
                h2 { "Page not found" }
                p { class: "muted", "Open the journey map to pick a section." }
            }
        };
    };
    let glyph = icon_glyph(node.icon);

    rsx! {
        div { class: "page topic-page",
            header { class: "view-header",
                h2 { class: "view-title",
                    span { class: "panel-icon", "{glyph}" }
                    "{node.title}"
                }
                p { class: "view-subtitle", "{node.description}" }
            }
            div { class: "view-divider" }
            div { class: "badge-row",
                span { class: difficulty_class(node.difficulty), "{node.difficulty}" }
                span { class: "badge badge-outline", "{node.estimated_time}" }
            }
            h3 { "Skills" }
            ul { class: "skill-list",
                for skill in node.skills.iter() {
                    li { "{skill}" }
                }
            }
        }
    }
}
