use lingo_core::model::{Exercise, Language, Lesson, VocabEntry};

use crate::study::StudySession;

use super::test_harness::{StubBackend, ViewKind, render_settled, setup_view_harness};

fn kabyle_session() -> StudySession {
    StudySession::with_language(Language::new("Kabyle", "Kabyle")).with_topic("Greetings")
}

#[tokio::test(flavor = "current_thread")]
async fn languages_view_smoke_renders_menu() {
    let mut harness = setup_view_harness(
        ViewKind::Languages,
        StubBackend::default(),
        StudySession::default(),
    );
    let html = render_settled(&mut harness).await;

    assert!(html.contains("Select a language..."), "missing placeholder in {html}");
    assert!(html.contains("Kabyle"), "missing language in {html}");
    assert!(html.contains("Tarifit"), "missing language in {html}");
    assert!(html.contains("Start"), "missing start control in {html}");
    assert!(
        html.contains("Select a language and press Start to continue."),
        "missing instructions in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn languages_view_smoke_renders_error_state() {
    let backend = StubBackend {
        fail: true,
        ..StubBackend::default()
    };
    let mut harness = setup_view_harness(ViewKind::Languages, backend, StudySession::default());
    let html = render_settled(&mut harness).await;

    assert!(html.contains("Error loading languages"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lessons_view_smoke_lists_topics() {
    let mut harness = setup_view_harness(
        ViewKind::Lessons,
        StubBackend::default(),
        kabyle_session(),
    );
    let html = render_settled(&mut harness).await;

    assert!(html.contains("Learning Kabyle"), "missing subtitle in {html}");
    assert!(html.contains("Greetings"), "missing lesson title in {html}");
    assert!(html.contains("Counting from 1 to 10."), "missing description in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lessons_view_smoke_renders_empty_state() {
    let backend = StubBackend {
        lessons: Vec::new(),
        ..StubBackend::default()
    };
    let mut harness = setup_view_harness(ViewKind::Lessons, backend, kabyle_session());
    let html = render_settled(&mut harness).await;

    assert!(html.contains("No lessons available"), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_escapes_backend_markup() {
    let backend = StubBackend {
        lesson: Lesson::new(
            "<b>Azul</b> means hello. <script>alert(1)</script>",
            vec![VocabEntry::new("<i>azul</i>", "hello", None)],
        ),
        ..StubBackend::default()
    };
    let mut harness = setup_view_harness(ViewKind::Lesson, backend, kabyle_session());
    let html = render_settled(&mut harness).await;

    assert!(!html.contains("<script>"), "live markup leaked into {html}");
    assert!(!html.contains("<b>Azul</b>"), "live markup leaked into {html}");
    assert!(html.contains("&lt;script&gt;"), "missing escaped markup in {html}");
    assert!(html.contains("&lt;i&gt;azul&lt;/i&gt;"), "missing escaped word in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_renders_pronunciation_placeholder() {
    let mut harness = setup_view_harness(
        ViewKind::Lesson,
        StubBackend::default(),
        kabyle_session(),
    );
    let html = render_settled(&mut harness).await;

    // First stub entry has no pronunciation, the second does.
    assert!(
        html.contains(r#"<td class="vocab-pronunciation">-</td>"#),
        "missing placeholder cell in {html}"
    );
    assert!(html.contains("ta-nem-MIRT"), "missing pronunciation in {html}");
    assert!(html.contains("Learning Kabyle - Greetings"), "missing heading in {html}");
    assert!(html.contains("Practice Vocabulary"), "missing exercise control in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_renders_error_state() {
    let backend = StubBackend {
        fail: true,
        ..StubBackend::default()
    };
    let mut harness = setup_view_harness(ViewKind::Lesson, backend, kabyle_session());
    let html = render_settled(&mut harness).await;

    assert!(
        html.contains("Error generating lesson. Please try again."),
        "missing error in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exercise_view_smoke_renders_questions() {
    let mut harness = setup_view_harness(
        ViewKind::Exercise,
        StubBackend::default(),
        kabyle_session(),
    );
    let html = render_settled(&mut harness).await;

    assert!(html.contains("azul"), "missing question word in {html}");
    assert!(html.contains("tanemmirt"), "missing question word in {html}");
    assert!(html.contains("Check Answers"), "missing submit control in {html}");
    assert!(
        html.contains("Match each word with its translation."),
        "missing instructions in {html}"
    );
    assert!(html.contains("type=\"radio\""), "missing radio controls in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exercise_view_smoke_renders_empty_state_without_submit() {
    let backend = StubBackend {
        exercise: Exercise::default(),
        ..StubBackend::default()
    };
    let mut harness = setup_view_harness(ViewKind::Exercise, backend, kabyle_session());
    let html = render_settled(&mut harness).await;

    assert!(html.contains("No questions available."), "missing empty state in {html}");
    assert!(!html.contains("Check Answers"), "submit control leaked into {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exercise_view_smoke_renders_error_state() {
    let backend = StubBackend {
        fail: true,
        ..StubBackend::default()
    };
    let mut harness = setup_view_harness(ViewKind::Exercise, backend, kabyle_session());
    let html = render_settled(&mut harness).await;

    assert!(
        html.contains("Error generating exercise. Please try again."),
        "missing error in {html}"
    );
}
