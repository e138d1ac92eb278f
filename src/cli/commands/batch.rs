use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Instant;

use crate::config::{ResolveOptions, load_config};
use crate::input::{ChecklistReader, ChecklistWriter};
use crate::status;
use crate::translation::{ChecklistTranslation, RequestPayload, TranslateError, TranslationClient};
use crate::ui::{RowProgress, Style};

/// Output file used when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "output.csv";

pub struct BatchOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub to: Option<String>,
    pub endpoint: Option<String>,
}

/// Translates every checklist row in order, appending each result to the output file.
///
/// Stops at the first failing row. Rows written before it stay in the output.
pub async fn run_batch(options: BatchOptions) -> Result<()> {
    let resolved = load_config(&ResolveOptions {
        text: None,
        to: options.to,
        endpoint: options.endpoint,
    })?;
    let rows = ChecklistReader::read(&options.input)?;

    let api_key = resolved.api_key()?;
    let client = TranslationClient::new(resolved.endpoint.clone(), api_key, resolved.auth);
    let mut writer = ChecklistWriter::append(&options.output)?;

    status!(
        "{} {} ({}, {} rows)",
        Style::label("POST"),
        Style::value(client.endpoint()),
        resolved.target_language,
        rows.len()
    );

    let start_time = Instant::now();
    let progress = RowProgress::new(rows.len());

    for (index, row) in rows.iter().enumerate() {
        progress.set_row(&row.item);
        let payload = row.payload(resolved.language_name, &resolved.sampling);
        let translated = translate_row(&client, &payload)
            .await
            .with_context(|| format!("Row {} ({}) failed", index + 1, row.item))?;
        writer.write(&translated)?;
        progress.inc();
    }

    progress.finish();
    status!(
        "{} {} rows into {} in {:.2?}",
        Style::label("Translated"),
        rows.len(),
        Style::value(options.output.display()),
        start_time.elapsed()
    );

    Ok(())
}

async fn translate_row(
    client: &TranslationClient,
    payload: &RequestPayload,
) -> Result<ChecklistTranslation, TranslateError> {
    let body = client.send(payload).await?;
    ChecklistTranslation::extract(&body)
}
