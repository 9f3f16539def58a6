use dioxus::prelude::*;
use dioxus_router::use_navigator;

use services::{ExerciseError, ExerciseSession};

use crate::context::AppContext;
use crate::routes::Route;
use crate::study::StudySession;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{FeedbackTone, OptionMark, map_exercise_questions, score_text};

#[component]
pub fn ExerciseView() -> Element {
    let ctx = use_context::<AppContext>();
    let study = use_context::<Signal<StudySession>>();
    let navigator = use_navigator();
    let backend = ctx.backend();
    let speech = ctx.speech();

    // Captured once at mount, like the lesson view.
    let (language, topic, vocabulary) = {
        let session = study.peek();
        (
            session.language().cloned(),
            session.topic().unwrap_or_default().to_string(),
            session.vocabulary().to_vec(),
        )
    };

    let session = use_signal(|| None::<ExerciseSession>);

    let language_for_resource = language.clone();
    let resource = use_resource(move || {
        let backend = backend.clone();
        let language = language_for_resource.clone();
        let vocabulary = vocabulary.clone();
        let mut session = session;
        async move {
            let Some(language) = language else {
                return Err(ViewError::NoLanguage);
            };
            let exercise = backend
                .exercise(&language.value, &vocabulary)
                .await
                .map_err(|_| ViewError::Unknown)?;
            match ExerciseSession::new(exercise) {
                Ok(started) => {
                    session.set(Some(started));
                    Ok(())
                }
                Err(ExerciseError::Empty) => Err(ViewError::EmptyExercise),
                Err(_) => Err(ViewError::Unknown),
            }
        }
    });

    let state = view_state_from_resource(&resource);

    let heading = language.as_ref().map_or_else(
        || "Exercise".to_string(),
        |language| format!("{} - {topic} Exercise", language.label),
    );
    let language_value = language.map(|language| language.value);

    // Reactive snapshot of the session for rendering; event handlers write
    // back through the signal.
    let (questions, graded, score, instructions) = {
        let guard = session.read();
        match guard.as_ref() {
            Some(active) => (
                map_exercise_questions(active),
                active.is_graded(),
                active.score(),
                active.instructions().to_string(),
            ),
            None => (Vec::new(), false, None, String::new()),
        }
    };
    let score_line = score.map(score_text);

    rsx! {
        div { class: "page exercise-page",
            header { class: "view-header",
                h2 { class: "view-title", "{heading}" }
            }
            button {
                class: "btn btn-ghost",
                r#type: "button",
                onclick: move |_| {
                    let _ = navigator.push(Route::Lesson {});
                },
                "Back to Lesson"
            }
            div { class: "view-divider" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "loading", "Generating exercise..." }
                },
                ViewState::Error(err) => rsx! {
                    if err == ViewError::EmptyExercise {
                        p { class: "empty-state", "{err.message()}" }
                    } else if err == ViewError::NoLanguage {
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
                        p { class: "error", "Error generating exercise. Please try again." }
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
                ViewState::Ready(()) => {
                    let question_blocks = questions.iter().enumerate().map(|(index, question)| {
                        let word_for_speech = question.word.clone();
                        let speech = speech.clone();
                        let language_value = language_value.clone();
                        let options = question.options.iter().map(|option| {
                            let value = option.value.clone();
                            let mut label_class = String::from("option-label");
                            if option.selected {
                                label_class.push_str(" selected");
                            }
                            match option.mark {
                                OptionMark::Correct => label_class.push_str(" correct"),
                                OptionMark::WrongChoice => label_class.push_str(" incorrect"),
                                OptionMark::Plain => {}
                            }
                            rsx! {
                                label { class: "{label_class}",
                                    input {
                                        class: "option-radio",
                                        r#type: "radio",
                                        name: "question-{question.id}",
                                        value: "{option.value}",
                                        checked: option.selected,
                                        disabled: question.inert,
                                        onchange: move |_| {
                                            let mut session = session;
                                            if let Some(active) = session.write().as_mut() {
                                                let _ = active.select(index, &value);
                                            }
                                        },
                                    }
                                    span { class: "option-text", "{option.label}" }
                                }
                            }
                        });
                        let feedback_class = question.feedback.as_ref().map(|feedback| {
                            match feedback.tone {
                                FeedbackTone::Correct => "answer-feedback feedback-correct",
                                FeedbackTone::Incorrect => "answer-feedback feedback-incorrect",
                            }
                        });
                        rsx! {
                            div { class: "exercise-question",
                                div { class: "question-header",
                                    span { class: "question-word", "{question.word}" }
                                    button {
                                        class: "btn-speak",
                                        r#type: "button",
                                        title: "Pronounce",
                                        onclick: move |_| {
                                            let speech = speech.clone();
                                            let word = word_for_speech.clone();
                                            let language = language_value.clone().unwrap_or_default();
                                            spawn(async move {
                                                speech.speak(&word, &language).await;
                                            });
                                        },
                                        "\u{1f50a}"
                                    }
                                    if let Some(pronunciation) = question.pronunciation.as_ref() {
                                        span { class: "question-pronunciation", "[{pronunciation}]" }
                                    }
                                }
                                div { class: "options-list",
                                    {options}
                                }
                                if let Some(feedback) = question.feedback.as_ref() {
                                    div { class: feedback_class.unwrap_or_default(), "{feedback.text}" }
                                }
                            }
                        }
                    });
                    rsx! {
                        p { class: "exercise-instructions", "{instructions}" }
                        div { class: "exercise-questions",
                            {question_blocks}
                        }
                        if !graded {
                            button {
                                class: "btn btn-primary submit-exercise-btn",
                                r#type: "button",
                                onclick: move |_| {
                                    let mut session = session;
                                    if let Some(active) = session.write().as_mut() {
                                        let _ = active.grade();
                                    }
                                },
                                "Check Answers"
                            }
                        }
                        if let Some(line) = score_line.as_ref() {
                            div { class: "exercise-results",
                                p { class: "score-text", "{line}" }
                                div { class: "exercise-results-actions",
                                    button {
                                        class: "btn btn-secondary",
                                        r#type: "button",
                                        onclick: move |_| {
                                            let mut session = session;
                                            if let Some(active) = session.write().as_mut() {
                                                active.retry();
                                            }
                                        },
                                        "Try Again"
                                    }
                                    button {
                                        class: "btn btn-ghost",
                                        r#type: "button",
                                        onclick: move |_| {
                                            let _ = navigator.push(Route::Lesson {});
                                        },
                                        "Back to Lesson"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
