mod display;
mod generate;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use nyaya_ai::{Mode, OnnxClassifier, PredictError, Predictor, complaint_from_args};
use nyaya_core::ScoringConfig;
use nyaya_core::config::{
    CATALOG_PREFIX, DEFAULT_MAX_LENGTH, DEFAULT_SAMPLES, DEFAULT_TEMPERATURE, DEFAULT_THRESHOLD,
    DEFAULT_TOP_K, TYPO_RATE,
};
use nyaya_core::{Envelope, Prediction};
use nyaya_synth::DatasetOptions;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(name = "nyaya", version, about = "Statute section prediction for complaint text")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Predict applicable sections for a complaint and print JSON
    Predict {
        #[command(flatten)]
        model: ModelArgs,
        /// Rank the top-k sections instead of applying the threshold
        #[arg(long)]
        ranked: bool,
        /// Complaint text; multiple words are joined with spaces
        text: Vec<String>,
    },
    /// Rank the most likely sections; prompts for text when none is given
    Rank {
        #[command(flatten)]
        model: ModelArgs,
        /// Complaint text; multiple words are joined with spaces
        text: Vec<String>,
    },
    /// Generate a synthetic labelled complaint dataset (JSONL)
    Generate {
        /// Section catalog: JSON array of {section_number, title}
        #[arg(long, default_value = "bns_sections.json")]
        catalog: PathBuf,
        /// Output JSONL file
        #[arg(long, default_value = "training_dataset.jsonl")]
        output: PathBuf,
        /// Number of records to generate
        #[arg(long, default_value_t = DEFAULT_SAMPLES)]
        samples: usize,
        /// Sample only the first N catalog entries
        #[arg(long, default_value_t = CATALOG_PREFIX)]
        prefix: usize,
        /// Probability of injecting typos into a complaint
        #[arg(long, default_value_t = TYPO_RATE)]
        typo_rate: f64,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args)]
struct ModelArgs {
    /// Directory containing model.onnx, tokenizer.json, and labels.json
    #[arg(long, env = "NYAYA_MODEL_DIR", default_value = "models/bns-classifier")]
    model_dir: PathBuf,
    /// Sigmoid probability a section must exceed (multi-label mode)
    #[arg(long, env = "NYAYA_THRESHOLD", default_value_t = DEFAULT_THRESHOLD)]
    threshold: f32,
    /// Number of ranked sections
    #[arg(long, env = "NYAYA_TOP_K", default_value_t = DEFAULT_TOP_K)]
    k: usize,
    /// Softmax temperature (ranked mode)
    #[arg(long, env = "NYAYA_TEMPERATURE", default_value_t = DEFAULT_TEMPERATURE)]
    temperature: f32,
    /// Token budget in ranked mode; longer complaints are truncated
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
    max_length: usize,
}

impl ModelArgs {
    fn scoring(&self) -> ScoringConfig {
        ScoringConfig {
            threshold: self.threshold,
            top_k: self.k,
            temperature: self.temperature,
            max_length: self.max_length,
        }
    }

    fn load(&self) -> anyhow::Result<Predictor<OnnxClassifier>> {
        nyaya_ai::load_predictor(&self.model_dir, self.scoring())
    }
}

impl Command {
    /// Log level when `RUST_LOG` is unset. Prediction callers may treat any
    /// stderr output as failure, so only warnings get through there.
    fn default_log_level(&self) -> LevelFilter {
        match self {
            Command::Predict { .. } | Command::Rank { .. } => LevelFilter::WARN,
            Command::Generate { .. } => LevelFilter::INFO,
        }
    }
}

fn log_filter(command: &Command) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(command.default_log_level().into())
        .from_env_lossy()
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // stdout carries the JSON payload only; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&cli.command))
        .with_writer(io::stderr)
        .init();
    tracing::debug!("nyaya v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Predict {
            model,
            ranked,
            text,
        } => {
            let mode = if ranked { Mode::Ranked } else { Mode::MultiLabel };
            predict(&model, &text, mode)
        }
        Command::Rank { model, text } if text.is_empty() => interactive(&model),
        Command::Rank { model, text } => predict(&model, &text, Mode::Ranked),
        Command::Generate {
            catalog,
            output,
            samples,
            prefix,
            typo_rate,
            seed,
        } => {
            let options = DatasetOptions {
                samples,
                prefix,
                typo_rate,
            };
            let stats = generate::run_generate(&catalog, &output, &options, seed)?;
            eprintln!(
                "Dataset generation complete! Generated {} samples from {} sections in {:.1}s.",
                stats.records, stats.distinct_sections, stats.elapsed_secs
            );
            eprintln!("Saved to: {}", output.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// One complaint from the command line, one JSON object on stdout.
///
/// Blank input is rejected before the model is loaded.
fn predict(model: &ModelArgs, text: &[String], mode: Mode) -> anyhow::Result<ExitCode> {
    let complaint = match complaint_from_args(text) {
        Ok(c) => c,
        Err(e) => return emit(&error_envelope(e)),
    };

    let mut predictor = model.load()?;
    emit(&predictor.respond(&complaint, mode))
}

/// Prompt for one complaint on stdin and print a readable ranking.
fn interactive(model: &ModelArgs) -> anyhow::Result<ExitCode> {
    let mut predictor = model.load()?;

    print!("\nEnter your legal complaint text: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    match predictor.rank(&line) {
        Ok(ranked) => {
            display::print_ranked(&ranked);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => emit(&error_envelope(e)),
    }
}

fn error_envelope(e: PredictError) -> Envelope {
    tracing::debug!(kind = e.kind(), "rejecting request");
    Envelope::from(Err::<Prediction, _>(e))
}

fn emit(envelope: &Envelope) -> anyhow::Result<ExitCode> {
    println!("{}", envelope.to_json()?);
    Ok(exit_code(envelope))
}

fn exit_code(envelope: &Envelope) -> ExitCode {
    if envelope.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn predict_collects_words() {
        let cli = Cli::try_parse_from(["nyaya", "predict", "He", "stole", "my", "bike"]).unwrap();
        let Command::Predict { text, ranked, model } = cli.command else {
            panic!("expected predict");
        };
        assert!(!ranked);
        assert_eq!(text, vec!["He", "stole", "my", "bike"]);
        assert_eq!(model.scoring(), ScoringConfig::default());
        assert_eq!(model.max_length, 192);
    }

    #[test]
    fn predict_ranked_flags() {
        let cli = Cli::try_parse_from([
            "nyaya",
            "predict",
            "--ranked",
            "--k",
            "5",
            "--temperature",
            "2.0",
            "someone cheated me",
        ])
        .unwrap();
        let Command::Predict { ranked, model, .. } = cli.command else {
            panic!("expected predict");
        };
        assert!(ranked);
        assert_eq!(model.k, 5);
        assert_eq!(model.temperature, 2.0);
    }

    #[test]
    fn generate_defaults() {
        let cli = Cli::try_parse_from(["nyaya", "generate"]).unwrap();
        let Command::Generate {
            samples,
            prefix,
            typo_rate,
            seed,
            ..
        } = cli.command
        else {
            panic!("expected generate");
        };
        assert_eq!(samples, 25_000);
        assert_eq!(prefix, 50);
        assert_eq!(typo_rate, 0.1);
        assert!(seed.is_none());
    }

    #[test]
    fn missing_text_is_rejected_without_model() {
        let cli = Cli::try_parse_from([
            "nyaya",
            "predict",
            "--model-dir",
            "/nonexistent/model",
        ])
        .unwrap();
        let Command::Predict { model, text, .. } = cli.command else {
            panic!("expected predict");
        };
        // The model directory does not exist; the error must come from the
        // input check, not from loading.
        let code = predict(&model, &text, Mode::MultiLabel).unwrap();
        assert_eq!(code, ExitCode::FAILURE);
    }

    #[test]
    fn error_envelope_shape() {
        let env = error_envelope(PredictError::MissingInput);
        assert_eq!(
            env.to_json().unwrap(),
            r#"{"error":"No input text provided"}"#
        );
        assert_eq!(exit_code(&env), ExitCode::FAILURE);
    }

    /// Dispatcher with the command's default filter and no `RUST_LOG`.
    fn default_dispatch(args: &[&str]) -> tracing::Dispatch {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        let filter = EnvFilter::builder()
            .with_default_directive(cli.command.default_log_level().into())
            .parse_lossy("");
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::sink)
            .finish();
        tracing::Dispatch::new(subscriber)
    }

    #[test]
    fn prediction_default_filter_drops_info() {
        for args in [&["nyaya", "predict", "x"][..], &["nyaya", "rank"][..]] {
            tracing::dispatcher::with_default(&default_dispatch(args), || {
                assert!(!tracing::enabled!(tracing::Level::INFO));
                assert!(tracing::enabled!(tracing::Level::WARN));
            });
        }
    }

    #[test]
    fn generate_default_filter_keeps_progress() {
        tracing::dispatcher::with_default(&default_dispatch(&["nyaya", "generate"]), || {
            assert!(tracing::enabled!(tracing::Level::INFO));
            assert!(!tracing::enabled!(tracing::Level::DEBUG));
        });
    }

    #[test]
    fn max_length_flows_into_config() {
        let cli = Cli::try_parse_from(["nyaya", "rank", "--max-length", "64", "x"]).unwrap();
        let Command::Rank { model, .. } = cli.command else {
            panic!("expected rank");
        };
        assert_eq!(model.scoring().max_length, 64);
    }

    #[test]
    fn success_exit_code() {
        let env = Envelope::Sections {
            sections: Prediction::Labels(vec!["IPC 302".into()]),
        };
        assert_eq!(exit_code(&env), ExitCode::SUCCESS);
    }
}
