use anyhow::Result;

use crate::config::{ResolveOptions, load_config};
use crate::output;
use crate::translation::{Extracted, TranslateError, TranslationClient, extract_translation};
use crate::ui::{Spinner, Style};
use crate::{status, warn};

pub struct TranslateOptions {
    pub text: Option<String>,
    pub to: Option<String>,
    pub endpoint: Option<String>,
    pub dry_run: bool,
}

/// Builds the payload, sends it once, prints the raw body and then the translation.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let resolved = load_config(&ResolveOptions {
        text: options.text,
        to: options.to,
        endpoint: options.endpoint,
    })?;
    let payload = resolved.payload();

    if options.dry_run {
        let rendered =
            serde_json::to_string_pretty(&payload).map_err(TranslateError::Serialize)?;
        output::print_line(&rendered)?;
        return Ok(());
    }

    let api_key = resolved.api_key()?;
    let client = TranslationClient::new(resolved.endpoint.clone(), api_key, resolved.auth);

    status!(
        "{} {} ({})",
        Style::label("POST"),
        Style::value(client.endpoint()),
        resolved.target_language
    );

    let spinner = Spinner::new("Translating...");
    let body = client.send(&payload).await;
    spinner.stop();
    let body = body?;

    output::print_line(&String::from_utf8_lossy(&body))?;

    let extracted = extract_translation(&body)?;
    report(&extracted);
    output::print_line(&extracted.translated)?;

    Ok(())
}

fn report(extracted: &Extracted) {
    if let Some(reason) = extracted.finish_reason.as_deref()
        && reason != "stop"
    {
        warn!(
            "{} finish_reason is '{reason}'; the translation may be incomplete",
            Style::warning("Warning:")
        );
    }

    if let Some(original) = &extracted.original {
        status!("{} {}", Style::label("original:"), original);
    }

    if let Some(usage) = &extracted.usage {
        status!(
            "{} {}  {} prompt={} completion={} total={}",
            Style::label("model:"),
            Style::value(&extracted.model),
            Style::label("tokens:"),
            usage.prompt_tokens,
            usage.completion_tokens,
            usage.total_tokens
        );
    }
}
