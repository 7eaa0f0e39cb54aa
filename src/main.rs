//! Vaarta - Voice Conversational Assistant
//!
//! Listens to the microphone, translates the utterance into a chosen
//! Indian language and back to English, scores sentiment, and keeps an
//! in-memory session table.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use vaarta::audio::{self, Listener};
use vaarta::config::Config;
use vaarta::error::VaartaError;
use vaarta::language::LanguageEntry;
use vaarta::pipeline::Assistant;
use vaarta::selector::LanguageSelector;
use vaarta::session::{self, SessionLog};
use vaarta::stt::{self, SttEngine};
use vaarta::translate;
use vaarta::tts::{self, TtsEngine};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Audio input device index
    #[arg(short, long)]
    device: Option<usize>,

    /// Preselect the target language (skips the spoken dialog)
    #[arg(short, long)]
    target: Option<String>,

    /// Speak prompts aloud
    #[arg(long)]
    speak: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("🗣️ Vaarta v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;

    // Initialize audio capture
    let audio_rx = audio::start_capture(args.device)?;
    let mut listener = Listener::new(audio_rx, &config);
    info!("🎙️ Audio capture started");

    // Initialize engines
    let mut stt_engine = stt::create_engine(&config)?;
    let translator = translate::create_translator(&config);
    let assistant = Assistant::new(translator);
    let selector = LanguageSelector::new();
    let mut log = SessionLog::new(config.wrap_width);

    // Optionally speak prompts
    let tts_engine = if config.tts_enabled || args.speak {
        Some(tts::create_engine(&config)?)
    } else {
        None
    };

    // A target given up front skips the per-turn dialog
    let preselected = match args.target.as_deref().or(nonempty(&config.default_target)) {
        Some(wanted) => Some(
            selector
                .resolve(wanted)
                .ok_or_else(|| VaartaError::Language(wanted.to_string()))?,
        ),
        None => None,
    };
    if let Some(entry) = preselected {
        info!("🌐 Target language fixed: {} ({})", entry.name, entry.code);
    }

    info!("✅ Vaarta ready - say 'exit' to quit");

    loop {
        println!("Speak...");
        say(&tts_engine, "Speak now", "en").await;

        let utterance = listener.listen().await?;
        let transcript = match stt_engine.transcribe(&utterance).await {
            Ok(Some(t)) => t,
            Ok(None) => {
                println!("Could not understand the audio. Please speak again.");
                continue;
            }
            Err(e) => {
                warn!("Speech recognition service failed: {}", e);
                println!("Speech Recognition service failed. Please try again.");
                continue;
            }
        };

        println!("You: {}\n", transcript.text);

        if transcript.text.trim().eq_ignore_ascii_case("exit") {
            println!("Exiting the program.");
            say(&tts_engine, "Goodbye", "en").await;
            break;
        }

        let target = match preselected {
            Some(entry) => entry,
            None => {
                choose_target(&selector, &mut listener, stt_engine.as_mut(), &tts_engine).await?
            }
        };

        let turn = assistant.run_turn(&transcript.text, target).await;

        println!("\nTranslated Text ({}):", target.name);
        print_wrapped(&turn.translated_text, config.wrap_width);
        println!();
        // Read the translation back in the target language's voice
        say(&tts_engine, &turn.translated_text, target.code).await;

        if target.code != "en" {
            println!("English Translation:");
            print_wrapped(&turn.english_text, config.wrap_width);
            println!();
        }

        let class = assistant.classify(&turn);
        println!("Sentiment Score: {:.2}", turn.sentiment);
        println!("Sentiment: {}", class);

        log.push(turn);

        println!("\nConversation History:");
        println!("{}", log.render_table());
        println!("{}\n", "=".repeat(config.wrap_width));
    }

    Ok(())
}

/// Spoken target-language dialog: re-prompt until a supported answer
async fn choose_target(
    selector: &LanguageSelector,
    listener: &mut Listener,
    stt_engine: &mut dyn SttEngine,
    tts_engine: &Option<Arc<dyn TtsEngine>>,
) -> Result<&'static LanguageEntry> {
    println!("{}", selector.prompt_text());
    say(tts_engine, "Which language?", "en").await;

    loop {
        let utterance = listener.listen().await?;
        let heard = match stt_engine.transcribe(&utterance).await {
            Ok(Some(t)) => t.text,
            Ok(None) => {
                println!("Could not understand the audio. Please speak again.");
                continue;
            }
            Err(e) => {
                warn!("Speech recognition service failed: {}", e);
                println!("Speech Recognition service failed. Please try again.");
                continue;
            }
        };

        match selector.resolve(&heard) {
            Some(entry) => {
                info!("🌐 Target language: {} ({})", entry.name, entry.code);
                return Ok(entry);
            }
            None => {
                println!("{}", selector.invalid_text(&heard));
                say(tts_engine, "That language is not supported", "en").await;
            }
        }
    }
}

/// Best-effort spoken output in the given language
async fn say(tts_engine: &Option<Arc<dyn TtsEngine>>, text: &str, lang: &str) {
    if let Some(engine) = tts_engine {
        if let Err(e) = engine.speak(text, lang).await {
            tracing::debug!("TTS unavailable: {}", e);
        }
    }
}

fn print_wrapped(text: &str, width: usize) {
    for line in session::wrap_text(text, width) {
        println!("{}", line);
    }
}

fn nonempty(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
