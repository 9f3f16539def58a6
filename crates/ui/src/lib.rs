pub mod app;
pub mod context;
pub mod routes;
pub mod study;
pub mod views;
pub mod vm;

pub use app::App;
pub use context::{AppContext, UiApp, build_app_context};
pub use study::StudySession;
