use clap::Parser;
use dict_core::config::{FilterConfig, CONVERTED_PATH, DICTIONARY_PATH, FILTERED_PATH, TOP_ENTRIES};
use dict_core::core::filter::REMOVED_PREVIEW_LIMIT;
use dict_core::report::{write_filter_report, write_summary};
use dict_core::run_filter;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dict_filter",
    about = "Keep only syllables that are dictionary words in a converted JSON dictionary"
)]
struct Cli {
    /// Converted JSON resource
    #[arg(long, default_value = CONVERTED_PATH)]
    input: PathBuf,

    /// Word list, one word per line
    #[arg(long, default_value = DICTIONARY_PATH)]
    dictionary: PathBuf,

    /// Output path for the filtered resource
    #[arg(long, default_value = FILTERED_PATH)]
    output: PathBuf,

    /// Removed syllables listed in the report
    #[arg(long, default_value_t = REMOVED_PREVIEW_LIMIT)]
    preview: usize,

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

    let config = FilterConfig {
        input_path: cli.input,
        dictionary_path: cli.dictionary,
        output_path: cli.output,
        preview_limit: cli.preview,
        top_entries: cli.top,
    };

    match run_filter(&config) {
        Ok((summary, report)) => {
            let mut stdout = std::io::stdout();
            let printed = write_filter_report(&mut stdout, &report)
                .and_then(|_| write_summary(&mut stdout, "FILTER SUMMARY", &summary, &config.output_path));
            if let Err(e) = printed {
                tracing::error!("Could not print report: {e}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Filtering failed: {e}");
            ExitCode::FAILURE
        }
    }
}
