use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::JourneyService;
use storage::repository::InMemoryProgressStore;

use crate::context::{UiApp, build_app_context};
use crate::views::journey_map::JourneyMapTestHandles;
use crate::views::{JourneyMapBody, LearningJourneyMap};
use crate::vm::JourneyMapVm;

struct TestApp {
    journey: Arc<JourneyService>,
}

impl UiApp for TestApp {
    fn journey(&self) -> Arc<JourneyService> {
        Arc::clone(&self.journey)
    }
}

/// Lets tests flip visibility and see where the map navigated.
#[derive(Clone, Default)]
struct MapControls {
    visible: Rc<RefCell<Option<Signal<bool>>>>,
    navigations: Rc<RefCell<Vec<String>>>,
}

#[derive(Props, Clone)]
struct MapHarnessProps {
    app: Arc<TestApp>,
    visible: bool,
    #[props(!optional)]
    current_page: Option<String>,
    controls: MapControls,
    handles: JourneyMapTestHandles,
}

impl PartialEq for MapHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn MapRoot(props: MapHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());

    let mut visible = use_signal(|| props.visible);
    *props.controls.visible.borrow_mut() = Some(visible);

    // Mirrors the app layout: closing or navigating hides the map.
    let close = use_callback(move |()| visible.set(false));
    let navigations = props.controls.navigations.clone();
    let navigate = use_callback(move |route: String| {
        visible.set(false);
        navigations.borrow_mut().push(route);
    });

    match props.current_page.clone() {
        Some(current_page) => rsx! {
            LearningJourneyMap {
                current_page,
                is_visible: visible(),
                on_close: close,
                on_navigate: navigate,
            }
        },
        None => rsx! {
            LearningJourneyMap {
                is_visible: visible(),
                on_close: close,
                on_navigate: navigate,
            }
        },
    }
}

pub struct MapHarness {
    pub dom: VirtualDom,
    controls: MapControls,
    handles: JourneyMapTestHandles,
}

impl MapHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Let pending resources resolve and re-render.
    pub async fn settle(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Pointer enters (`Some`) or leaves (`None`) a node.
    pub fn hover(&mut self, id: Option<&str>) {
        let hover = self.handles.hover();
        self.dom.in_runtime(|| hover.call(id.map(str::to_owned)));
        drive_dom(&mut self.dom);
    }

    /// Click on the node with `id`.
    pub fn click_node(&mut self, id: &str) {
        let select = self.handles.select();
        self.dom.in_runtime(|| select.call(id.to_owned()));
        drive_dom(&mut self.dom);
    }

    pub fn set_visible(&mut self, visible: bool) {
        let signal = *self.controls.visible.borrow();
        if let Some(mut signal) = signal {
            self.dom.in_runtime(|| signal.set(visible));
        }
        drive_dom(&mut self.dom);
    }

    pub fn navigations(&self) -> Vec<String> {
        self.controls.navigations.borrow().clone()
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_map_harness(
    store: InMemoryProgressStore,
    visible: bool,
    current_page: Option<&str>,
) -> MapHarness {
    let journey = Arc::new(JourneyService::with_default_path(Arc::new(store)));
    let controls = MapControls::default();
    let handles = JourneyMapTestHandles::default();
    let dom = VirtualDom::new_with_props(
        MapRoot,
        MapHarnessProps {
            app: Arc::new(TestApp { journey }),
            visible,
            current_page: current_page.map(str::to_owned),
            controls: controls.clone(),
            handles: handles.clone(),
        },
    );
    MapHarness {
        dom,
        controls,
        handles,
    }
}

#[derive(Props, Clone, PartialEq)]
struct BodyHarnessProps {
    vm: JourneyMapVm,
    #[props(!optional)]
    hovered: Option<String>,
}

#[component]
fn BodyRoot(props: BodyHarnessProps) -> Element {
    rsx! {
        JourneyMapBody {
            vm: props.vm.clone(),
            hovered: props.hovered.clone(),
            on_hover: move |_: Option<String>| {},
            on_close: move |_: ()| {},
            on_navigate: move |_: String| {},
        }
    }
}

/// Render the map body for a prepared view model, synchronously.
pub fn render_body(vm: JourneyMapVm, hovered: Option<&str>) -> String {
    let mut dom = VirtualDom::new_with_props(
        BodyRoot,
        BodyHarnessProps {
            vm,
            hovered: hovered.map(str::to_owned),
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
