use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{ExerciseView, LanguagesView, LessonView, LessonsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", LanguagesView)] Languages {},
        #[route("/lessons", LessonsView)] Lessons {},
        #[route("/lesson", LessonView)] Lesson {},
        #[route("/exercise", ExerciseView)] Exercise {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
