use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::study::StudySession;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[component]
pub fn LanguagesView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut study = use_context::<Signal<StudySession>>();
    let navigator = use_navigator();
    let backend = ctx.backend();
    let mut selected = use_signal(String::new);

    let resource = use_resource(move || {
        let backend = backend.clone();
        async move { backend.languages().await.map_err(|_| ViewError::Unknown) }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page languages-page",
            header { class: "view-header",
                h2 { class: "view-title", "Lingo" }
                p { class: "view-subtitle", "Learn a language, one lesson at a time." }
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
                    p { class: "error", "Error loading languages" }
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
                ViewState::Ready(menu) => {
                    let value = selected();
                    let chosen = menu
                        .languages
                        .iter()
                        .find(|language| language.value == value)
                        .cloned();
                    rsx! {
                        p { class: "view-hint", id: "instructions", "{menu.instructions}" }
                        select {
                            class: "language-select",
                            onchange: move |evt| selected.set(evt.value()),
                            option { value: "", "Select a language..." }
                            for language in menu.languages.iter() {
                                option {
                                    value: "{language.value}",
                                    selected: language.value == value,
                                    "{language.label}"
                                }
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: chosen.is_none(),
                            onclick: move |_| {
                                if let Some(language) = chosen.clone() {
                                    study.set(StudySession::with_language(language));
                                    let _ = navigator.push(Route::Lessons {});
                                }
                            },
                            "{menu.start_label}"
                        }
                    }
                }
            }
        }
    }
}
