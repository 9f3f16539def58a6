use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::study::StudySession;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[component]
pub fn LessonsView() -> Element {
    let ctx = use_context::<AppContext>();
    let study = use_context::<Signal<StudySession>>();
    let navigator = use_navigator();
    let backend = ctx.backend();

    let language_label = study.read().language().map(|language| language.label.clone());

    let resource = use_resource(move || {
        let backend = backend.clone();
        async move { backend.lessons().await.map_err(|_| ViewError::Unknown) }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page lessons-page",
            header { class: "view-header",
                h2 { class: "view-title", "Lessons" }
                if let Some(label) = language_label.as_ref() {
                    p { class: "view-subtitle", "Learning {label}" }
                }
            }
            button {
                class: "btn btn-ghost",
                r#type: "button",
                onclick: move |_| {
                    let mut study = study;
                    study.set(StudySession::cleared());
                    let _ = navigator.push(Route::Languages {});
                },
                "Change Language"
            }
            div { class: "view-divider" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "loading", "Loading..." }
                },
                ViewState::Error(_) => rsx! {
                    p { class: "error", "Error loading lessons. Please try again." }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(lessons) => {
                    let cards = lessons.iter().map(|lesson| {
                        let title = lesson.title.clone();
                        let nav = navigator;
                        let study = study;
                        rsx! {
                            div {
                                class: "lesson-card",
                                onclick: move |_| {
                                    let mut study = study;
                                    let next = study.peek().with_topic(title.clone());
                                    study.set(next);
                                    let _ = nav.push(Route::Lesson {});
                                },
                                h3 { "{lesson.title}" }
                                p { "{lesson.description}" }
                            }
                        }
                    });
                    rsx! {
                        if lessons.is_empty() {
                            p { class: "error", "No lessons available" }
                        } else {
                            div { class: "lesson-list",
                                {cards}
                            }
                        }
                    }
                }
            }
        }
    }
}
