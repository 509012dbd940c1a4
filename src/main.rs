use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cognitive_tts::{
    AudioOutputFormat, ClientConfig, Gender, SpeechManager, SynthesisRequest, VoiceCatalog,
    VoiceName, WavFileSink,
};

/// Cognitive Services text-to-speech client
#[derive(Parser, Debug)]
#[command(name = "cognitive-tts")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Synthesize text and write it to a WAV file
    Speak {
        /// Text to speak
        #[arg(short = 't', long = "text")]
        text: String,

        /// Voice identifier (e.g. enUSJessaRUS) or full voice name
        #[arg(short = 'v', long = "voice")]
        voice: Option<VoiceName>,

        /// Voice gender (female or male); defaults to the voice's own
        #[arg(short = 'g', long = "gender")]
        gender: Option<Gender>,

        /// Pitch shift in Hz
        #[arg(short = 'p', long = "pitch", default_value_t = 0, allow_hyphen_values = true)]
        pitch: i32,

        /// Locale override (e.g. en-GB); defaults to the voice's locale
        #[arg(short = 'l', long = "locale")]
        locale: Option<String>,

        /// Output format wire string (must be a riff PCM format)
        #[arg(short = 'f', long = "format")]
        format: Option<AudioOutputFormat>,

        /// Output WAV file
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: PathBuf,
    },

    /// List available voices
    Voices {
        /// Only show voices for this locale
        #[arg(short = 'l', long = "locale")]
        locale: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (must be done before config loading)
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Voices { locale } => {
            list_voices(locale.as_deref());
            Ok(())
        }
        Commands::Speak {
            text,
            voice,
            gender,
            pitch,
            locale,
            format,
            output,
        } => {
            let config = load_config(cli.config)?;
            let voice = voice.unwrap_or(config.default_voice);
            let gender =
                gender.unwrap_or_else(|| VoiceCatalog::standard().resolve(voice).gender);

            let mut request = SynthesisRequest::new(text)
                .with_voice(voice)
                .with_gender(gender)
                .with_pitch_delta(pitch)
                .with_output_format(format.unwrap_or(config.output_format));
            if let Some(locale) = locale {
                request = request.with_locale(locale);
            }

            speak(&config, &request, output).await
        }
    }
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<ClientConfig> {
    let config = match path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            ClientConfig::from_file(&path)
        }
        None => ClientConfig::from_env(),
    };
    config.map_err(|e| anyhow!(e)).context("Failed to load configuration")
}

async fn speak(
    config: &ClientConfig,
    request: &SynthesisRequest,
    output: PathBuf,
) -> anyhow::Result<()> {
    let sink = Arc::new(WavFileSink::new(output.clone()));
    let manager = SpeechManager::from_config(config, sink)?;

    manager
        .start()
        .await
        .context("Failed to authenticate with the token endpoint")?;

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling synthesis");
            on_interrupt.cancel();
        }
    });

    let result = manager.speak(request, &cancel).await;
    manager.shutdown();

    let duration = result.with_context(|| format!("Failed to speak into {}", output.display()))?;
    println!(
        "Wrote {:.2}s of audio to {}",
        duration.as_secs_f64(),
        output.display()
    );
    Ok(())
}

fn list_voices(locale: Option<&str>) {
    let catalog = VoiceCatalog::standard();
    let entries = match locale {
        Some(locale) => catalog.voices_for_locale(locale),
        None => catalog.entries().iter().collect(),
    };

    for entry in entries {
        println!(
            "{:<20} {:<6} {:<7} {}",
            entry.id, entry.locale, entry.gender, entry.wire_name
        );
    }
}
