use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use lingo_core::model::{
    Exercise, Language, Lesson, LessonSummary, Question, VocabEntry,
};
use services::{ApiError, LanguageMenu, LessonBackend, SpeechService};

use crate::context::{UiApp, build_app_context};
use crate::study::StudySession;
use crate::views::{ExerciseView, LanguagesView, LessonView, LessonsView};

/// Canned backend for view tests: every operation resolves immediately from
/// the configured data, or fails across the board when `fail` is set.
pub struct StubBackend {
    pub menu: LanguageMenu,
    pub lessons: Vec<LessonSummary>,
    pub lesson: Lesson,
    pub exercise: Exercise,
    pub fail: bool,
}

impl Default for StubBackend {
    fn default() -> Self {
        Self {
            menu: LanguageMenu {
                languages: vec![
                    Language::new("Kabyle", "Kabyle"),
                    Language::new("Tarifit", "Tarifit"),
                ],
                instructions: "Select a language and press Start to continue.".to_string(),
                start_label: "Start".to_string(),
            },
            lessons: vec![
                LessonSummary {
                    id: 1,
                    title: "Greetings".to_string(),
                    description: "Learn how to greet people.".to_string(),
                },
                LessonSummary {
                    id: 2,
                    title: "Numbers".to_string(),
                    description: "Counting from 1 to 10.".to_string(),
                },
            ],
            lesson: Lesson::new(
                "Azul means hello.",
                vec![
                    VocabEntry::new("azul", "hello", None),
                    VocabEntry::new("tanemmirt", "thank you", Some("ta-nem-MIRT".to_string())),
                ],
            ),
            exercise: Exercise {
                instructions: Some("Match each word with its translation.".to_string()),
                questions: vec![
                    Question::new(
                        1,
                        "azul",
                        None,
                        vec!["hello".into(), "goodbye".into()],
                        "hello",
                    ),
                    Question::new(
                        2,
                        "tanemmirt",
                        None,
                        vec!["thank you".into(), "goodbye".into()],
                        "thank you",
                    ),
                ],
            },
            fail: false,
        }
    }
}

impl StubBackend {
    fn check(&self) -> Result<(), ApiError> {
        if self.fail {
            Err(ApiError::Backend("stub failure".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl LessonBackend for StubBackend {
    async fn languages(&self) -> Result<LanguageMenu, ApiError> {
        self.check()?;
        Ok(self.menu.clone())
    }

    async fn lessons(&self) -> Result<Vec<LessonSummary>, ApiError> {
        self.check()?;
        Ok(self.lessons.clone())
    }

    async fn lesson(&self, _language: &str, _topic: &str) -> Result<Lesson, ApiError> {
        self.check()?;
        Ok(self.lesson.clone())
    }

    async fn exercise(
        &self,
        _language: &str,
        _vocabulary: &[VocabEntry],
    ) -> Result<Exercise, ApiError> {
        self.check()?;
        Ok(self.exercise.clone())
    }

    async fn synthesize(&self, _text: &str, _language: &str) -> Result<Vec<u8>, ApiError> {
        self.check()?;
        Ok(Vec::new())
    }
}

struct TestApp {
    backend: Arc<StubBackend>,
    speech: Arc<SpeechService>,
}

impl UiApp for TestApp {
    fn backend(&self) -> Arc<dyn LessonBackend> {
        Arc::clone(&self.backend) as Arc<dyn LessonBackend>
    }

    fn speech(&self) -> Arc<SpeechService> {
        Arc::clone(&self.speech)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Languages,
    Lessons,
    Lesson,
    Exercise,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    study: StudySession,
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
    let study = props.study.clone();
    use_context_provider(|| Signal::new(study));
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
        ViewKind::Languages => rsx! { LanguagesView {} },
        ViewKind::Lessons => rsx! { LessonsView {} },
        ViewKind::Lesson => rsx! { LessonView {} },
        ViewKind::Exercise => rsx! { ExerciseView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
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

fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, backend: StubBackend, study: StudySession) -> ViewHarness {
    let backend = Arc::new(backend);
    let speech = Arc::new(SpeechService::new(
        Arc::clone(&backend) as Arc<dyn LessonBackend>
    ));
    let app = Arc::new(TestApp { backend, speech });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view, study });

    ViewHarness { dom }
}

/// Rebuild, let the view's resources resolve, and return the rendered HTML.
pub async fn render_settled(harness: &mut ViewHarness) -> String {
    harness.rebuild();
    for _ in 0..4 {
        harness.drive_async().await;
    }
    harness.render()
}
