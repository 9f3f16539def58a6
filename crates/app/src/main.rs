use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{ApiClient, ApiConfig, DEFAULT_FALLBACK_LOCALE, LessonBackend, SpeechService};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    backend: Arc<dyn LessonBackend>,
    speech: Arc<SpeechService>,
}

impl UiApp for DesktopApp {
    fn backend(&self) -> Arc<dyn LessonBackend> {
        Arc::clone(&self.backend)
    }

    fn speech(&self) -> Arc<SpeechService> {
        Arc::clone(&self.speech)
    }
}

struct Args {
    api_url: String,
    fallback_locale: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--fallback-locale <tag>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url http://localhost:8000");
    eprintln!("  --fallback-locale {DEFAULT_FALLBACK_LOCALE}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  LINGO_API_URL, LINGO_FALLBACK_LOCALE");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api_url = std::env::var("LINGO_API_URL")
            .ok()
            .unwrap_or_else(|| "http://localhost:8000".into());
        let mut fallback_locale = std::env::var("LINGO_FALLBACK_LOCALE")
            .ok()
            .unwrap_or_else(|| DEFAULT_FALLBACK_LOCALE.into());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    api_url = validate_api_url(value)?;
                }
                "--fallback-locale" => {
                    fallback_locale = require_value(args, "--fallback-locale")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            api_url,
            fallback_locale,
        })
    }
}

fn validate_api_url(raw: String) -> Result<String, ArgsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || !(trimmed.starts_with("http://") || trimmed.starts_with("https://"))
    {
        return Err(ArgsError::InvalidApiUrl { raw });
    }
    Ok(trimmed.to_string())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    log::info!("using backend at {}", args.api_url);

    let backend: Arc<dyn LessonBackend> = Arc::new(ApiClient::new(ApiConfig {
        base_url: args.api_url,
    }));
    let speech = Arc::new(
        SpeechService::new(Arc::clone(&backend)).with_fallback_locale(args.fallback_locale),
    );

    let app = DesktopApp { backend, speech };
    let context = build_app_context(&(Arc::new(app) as Arc<dyn UiApp>));

    // Explicitly disable always-on-top; some dev setups default to it.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Lingo")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
