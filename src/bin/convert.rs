use clap::Parser;
use dict_core::config::{ConvertConfig, CONVERTED_PATH, DICTIONARY_PATH, TOP_ENTRIES};
use dict_core::core::frequency::PROGRESS_INTERVAL;
use dict_core::report::write_summary;
use dict_core::DictionaryConverter;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dict_convert",
    about = "Convert a Shan word list into a frequency-annotated JSON dictionary"
)]
struct Cli {
    /// Word list, one word per line
    #[arg(long, default_value = DICTIONARY_PATH)]
    dictionary: PathBuf,

    /// Corpus file (.jsonl with title/content records, or plain text) or directory
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Output path for the JSON resource
    #[arg(long, default_value = CONVERTED_PATH)]
    output: PathBuf,

    /// Value recorded as metadata.source (defaults to the dictionary file name)
    #[arg(long)]
    source: Option<String>,

    /// Split the corpus into this many shards counted in parallel
    #[arg(long, default_value_t = 1)]
    shards: usize,

    /// Documents between progress lines
    #[arg(long, default_value_t = PROGRESS_INTERVAL)]
    progress_interval: usize,

    /// Skip the dictionary tokenizer and syllable rules; use the pattern fallback only
    #[arg(long)]
    no_primary: bool,

    /// Entries shown per list in the summary
    #[arg(long, default_value_t = TOP_ENTRIES)]
    top: usize,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ConvertConfig {
        dictionary_path: cli.dictionary,
        corpus_path: cli.corpus,
        output_path: cli.output,
        source: cli.source,
        shards: cli.shards.max(1),
        progress_interval: cli.progress_interval,
        use_primary: !cli.no_primary,
        top_entries: cli.top,
    };
    let converter = DictionaryConverter::new(config);

    match converter.run() {
        Ok(summary) => {
            if let Err(e) = write_summary(
                &mut std::io::stdout(),
                "CONVERSION SUMMARY",
                &summary,
                &converter.config().output_path,
            ) {
                tracing::error!("Could not print summary: {e}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Conversion failed: {e}");
            ExitCode::FAILURE
        }
    }
}
