use clap::Parser;
use std::path::PathBuf;

use aoai_translate::cli::Args;
use aoai_translate::cli::commands::batch::{self, BatchOptions, DEFAULT_OUTPUT};
use aoai_translate::cli::commands::translate::{self, TranslateOptions};
use aoai_translate::cli::commands::exit_code;
use aoai_translate::output::{self, OutputConfig};
use aoai_translate::ui::Style;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        ..OutputConfig::default()
    });

    let result = if let Some(input) = args.csv {
        batch::run_batch(BatchOptions {
            input,
            output: args.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            to: args.to,
            endpoint: args.endpoint,
        })
        .await
    } else {
        translate::run_translate(TranslateOptions {
            text: args.text,
            to: args.to,
            endpoint: args.endpoint,
            dry_run: args.dry_run,
        })
        .await
    };

    if let Err(err) = result {
        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(exit_code(&err));
    }
}
