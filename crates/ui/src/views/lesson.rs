use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::study::StudySession;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::map_vocab_rows;

/// Topic used when a lesson is opened without one, mirroring the backend's
/// own default.
const DEFAULT_TOPIC: &str = "Greetings";

#[component]
pub fn LessonView() -> Element {
    let ctx = use_context::<AppContext>();
    let study = use_context::<Signal<StudySession>>();
    let navigator = use_navigator();
    let backend = ctx.backend();
    let speech = ctx.speech();

    // Captured once at mount; picking another topic navigates here again and
    // remounts the view.
    let (language, topic) = {
        let session = study.peek();
        (
            session.language().cloned(),
            session
                .topic()
                .unwrap_or(DEFAULT_TOPIC)
                .to_string(),
        )
    };

    let language_for_resource = language.clone();
    let topic_for_resource = topic.clone();
    let resource = use_resource(move || {
        let backend = backend.clone();
        let language = language_for_resource.clone();
        let topic = topic_for_resource.clone();
        let study = study;
        async move {
            let Some(language) = language else {
                return Err(ViewError::NoLanguage);
            };
            let lesson = backend
                .lesson(&language.value, &topic)
                .await
                .map_err(|_| ViewError::Unknown)?;
            // Replace the shared lesson wholesale so the exercise always sees
            // the vocabulary of the most recent fetch.
            let mut study = study;
            let next = study.peek().with_lesson(lesson.clone());
            study.set(next);
            Ok::<_, ViewError>(lesson)
        }
    });

    let state = view_state_from_resource(&resource);
    let heading = language.as_ref().map_or_else(
        || "Lesson".to_string(),
        |language| format!("Learning {} - {topic}", language.label),
    );
    let language_value = language.map(|language| language.value);

    rsx! {
        div { class: "page lesson-page",
            header { class: "view-header",
                h2 { class: "view-title", "{heading}" }
            }
            button {
                class: "btn btn-ghost",
                r#type: "button",
                onclick: move |_| {
                    let _ = navigator.push(Route::Lessons {});
                },
                "Back to Lessons"
            }
            div { class: "view-divider" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "loading", "Generating your lesson..." }
                },
                ViewState::Error(err) => rsx! {
                    if err == ViewError::NoLanguage {
                        p { class: "error", "{err.message()}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                let _ = navigator.push(Route::Languages {});
                            },
                            "Choose a Language"
                        }
                    } else {
                        p { class: "error", "Error generating lesson. Please try again." }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                let mut resource = resource;
                                resource.restart();
                            },
                            "Retry"
                        }
                    }
                },
                ViewState::Ready(lesson) => {
                    let rows = map_vocab_rows(&lesson.vocabulary);
                    let has_vocabulary = !rows.is_empty();
                    let vocab_rows = rows.iter().map(|row| {
                        let word = row.word.clone();
                        let speech = speech.clone();
                        let language_value = language_value.clone();
                        rsx! {
                            tr {
                                td { class: "vocab-word", "{row.word}" }
                                td { class: "vocab-translation", "{row.translation}" }
                                td { class: "vocab-pronunciation", "{row.pronunciation_label}" }
                                td {
                                    button {
                                        class: "btn-speak",
                                        r#type: "button",
                                        title: "Pronounce",
                                        onclick: move |_| {
                                            let speech = speech.clone();
                                            let word = word.clone();
                                            let language = language_value.clone().unwrap_or_default();
                                            spawn(async move {
                                                speech.speak(&word, &language).await;
                                            });
                                        },
                                        "\u{1f50a}"
                                    }
                                }
                            }
                        }
                    });
                    rsx! {
                        div { class: "lesson-main", "{lesson.text}" }
                        if has_vocabulary {
                            div { class: "vocabulary-section",
                                h3 { "Vocabulary" }
                                table { class: "vocabulary-table",
                                    thead {
                                        tr {
                                            th { "Word" }
                                            th { "Translation" }
                                            th { "Pronunciation" }
                                            th {}
                                        }
                                    }
                                    tbody {
                                        {vocab_rows}
                                    }
                                }
                            }
                        }
                        div { class: "lesson-actions",
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| {
                                    let mut resource = resource;
                                    resource.restart();
                                },
                                "New Lesson"
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                disabled: !has_vocabulary,
                                onclick: move |_| {
                                    let _ = navigator.push(Route::Exercise {});
                                },
                                "Practice Vocabulary"
                            }
                        }
                    }
                }
            }
        }
    }
}
