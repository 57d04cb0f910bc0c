use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use mathbook_core::time::fixed_now;
use services::{Clock, ContentCatalog, ProgressService};
use storage::repository::{InMemorySnapshotStore, SnapshotStore};

use crate::context::{UiApp, build_app_context};
use crate::views::{ChapterView, HomeView, LessonView, NotFoundView, ProgressView, QuizView};

#[derive(Clone)]
struct TestApp {
    catalog: Arc<ContentCatalog>,
    progress: Arc<ProgressService>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<ContentCatalog> {
        Arc::clone(&self.catalog)
    }

    fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Chapter(&'static str),
    Lesson(&'static str, &'static str),
    Quiz(&'static str),
    Progress,
    NotFound,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Chapter(chapter_id) => rsx! {
            ChapterView { chapter_id: chapter_id.to_string() }
        },
        ViewKind::Lesson(chapter_id, lesson_id) => rsx! {
            LessonView { chapter_id: chapter_id.to_string(), lesson_id: lesson_id.to_string() }
        },
        ViewKind::Quiz(chapter_id) => rsx! {
            QuizView { chapter_id: chapter_id.to_string() }
        },
        ViewKind::Progress => rsx! { ProgressView {} },
        ViewKind::NotFound => rsx! {
            NotFoundView { segments: vec!["missing".to_string()] }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub store: Arc<dyn SnapshotStore>,
    pub progress: Arc<ProgressService>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let store: Arc<dyn SnapshotStore> = Arc::new(InMemorySnapshotStore::new());
    setup_view_harness_with(view, ContentCatalog::bundled().expect("bundled catalog"), store).await
}

pub async fn setup_view_harness_with(
    view: ViewKind,
    catalog: ContentCatalog,
    store: Arc<dyn SnapshotStore>,
) -> ViewHarness {
    let clock = Clock::fixed(fixed_now());
    let progress = Arc::new(ProgressService::load(clock, Arc::clone(&store)).await);
    let app = Arc::new(TestApp {
        catalog: Arc::new(catalog),
        progress: Arc::clone(&progress),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness {
        dom,
        store,
        progress,
    }
}
