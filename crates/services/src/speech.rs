use std::io::Cursor;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink};

use crate::api::LessonBackend;
use crate::error::SpeechError;

/// Locale for the platform speech engine when remote synthesis is
/// unavailable. Matches the original deployment's target audience.
pub const DEFAULT_FALLBACK_LOCALE: &str = "ar-MA";

/// Pronounces single words: remote synthesis played through the audio
/// device, with a same-turn fallback to the platform speech engine on any
/// failure along the way. Playback is fire-and-forget; failures are logged,
/// never surfaced to views.
pub struct SpeechService {
    backend: Arc<dyn LessonBackend>,
    fallback_locale: String,
}

impl SpeechService {
    #[must_use]
    pub fn new(backend: Arc<dyn LessonBackend>) -> Self {
        Self {
            backend,
            fallback_locale: DEFAULT_FALLBACK_LOCALE.to_string(),
        }
    }

    #[must_use]
    pub fn with_fallback_locale(mut self, locale: impl Into<String>) -> Self {
        self.fallback_locale = locale.into();
        self
    }

    #[must_use]
    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }

    /// Request synthesis for `word` and play the result. On request or
    /// backend failure the fallback engine speaks instead; playback errors
    /// inside the detached thread fall back the same way.
    pub async fn speak(&self, word: &str, language: &str) {
        let word = word.trim();
        if word.is_empty() {
            return;
        }

        match self.backend.synthesize(word, language).await {
            Ok(audio) => self.play_detached(word, audio),
            Err(err) => {
                log::warn!("speech synthesis failed for {word:?}: {err}");
                self.fallback_detached(word);
            }
        }
    }

    fn play_detached(&self, word: &str, audio: Vec<u8>) {
        let word = word.to_string();
        let locale = self.fallback_locale.clone();
        thread::spawn(move || {
            if let Err(err) = play_audio(audio) {
                log::warn!("audio playback failed for {word:?}: {err}");
                speak_with_engine(&word, &locale);
            }
        });
    }

    fn fallback_detached(&self, word: &str) {
        let word = word.to_string();
        let locale = self.fallback_locale.clone();
        thread::spawn(move || speak_with_engine(&word, &locale));
    }
}

/// Decode and play one WAV payload, blocking until playback ends. The output
/// stream lives on this thread's stack, so the device is released as soon as
/// the audio finishes.
fn play_audio(audio: Vec<u8>) -> Result<(), SpeechError> {
    let (_stream, handle) = OutputStream::try_default()?;
    let sink = Sink::try_new(&handle)?;
    let source = Decoder::new(Cursor::new(audio))?;
    sink.append(source);
    sink.sleep_until_end();
    Ok(())
}

/// Speak through the platform engine, preferring a voice that matches the
/// fallback locale. Blocks until the utterance ends so the engine is not
/// dropped mid-speech.
fn speak_with_engine(word: &str, locale: &str) {
    let mut engine = match engine_for_locale(locale) {
        Ok(engine) => engine,
        Err(err) => {
            log::warn!("platform speech engine unavailable: {err}");
            return;
        }
    };

    if let Err(err) = engine.speak(word, true) {
        log::warn!("platform speech failed for {word:?}: {err}");
        return;
    }

    while engine.is_speaking().unwrap_or(false) {
        thread::sleep(Duration::from_millis(50));
    }
}

fn engine_for_locale(locale: &str) -> Result<tts::Tts, tts::Error> {
    let mut engine = tts::Tts::default()?;
    if let Ok(voices) = engine.voices() {
        let wanted = voices
            .iter()
            .find(|voice| voice.language().as_str().eq_ignore_ascii_case(locale));
        if let Some(voice) = wanted {
            // A missing voice is not fatal; the engine default still speaks.
            if let Err(err) = engine.set_voice(voice) {
                log::warn!("could not select {locale} voice: {err}");
            }
        }
    }
    Ok(engine)
}
