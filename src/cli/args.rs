use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "aoai-translate")]
#[command(about = "Translate text with a structured-output chat-completions request")]
#[command(version)]
pub struct Args {
    /// Text to translate (defaults to a built-in sample sentence)
    pub text: Option<String>,

    /// Target language code (ISO 639-1, e.g., ja, en, zh)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Chat-completions endpoint URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Translate every `Item,Description` row of a CSV file (no header row)
    #[arg(long, value_name = "FILE", conflicts_with_all = ["text", "dry_run"])]
    pub csv: Option<PathBuf>,

    /// File translated CSV rows are appended to [default: output.csv]
    #[arg(short = 'o', long, value_name = "FILE", requires = "csv")]
    pub output: Option<PathBuf>,

    /// Print the request payload and exit without sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress status messages and the progress spinner
    #[arg(short = 'q', long)]
    pub quiet: bool,
}
