use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable, use_navigator, use_route};
use journey_core::catalog::{DEFAULT_CURRENT_NODE, beginner_path};

use crate::views::{HomeView, LearningJourneyMap, TopicView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/:slug", TopicView)] Topic { slug: String },
}

/// Node id whose page `route` shows, falling back to the default node.
#[must_use]
pub fn current_node_id(route: &str) -> String {
    beginner_path()
        .node_by_path(route)
        .map_or_else(|| DEFAULT_CURRENT_NODE.to_string(), |node| node.id.to_string())
}

#[component]
fn Layout() -> Element {
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let mut map_open = use_signal(|| false);
    let current_page = current_node_id(&route.to_string());

    rsx! {
        div { class: "app",
            header { class: "app-bar",
                h1 { "Learning Journey" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| map_open.set(true),
                    "Journey Map"
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
            LearningJourneyMap {
                current_page,
                is_visible: map_open(),
                on_close: move |_| map_open.set(false),
                on_navigate: move |target: String| {
                    map_open.set(false);
                    match target.parse::<Route>() {
                        Ok(route) => {
                            navigator.push(route);
                        }
                        Err(_) => tracing::warn!(%target, "journey map requested an unknown route"),
                    }
                },
            }
        }
    }
}
