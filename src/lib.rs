//! # aoai-translate - One-shot structured translation
//!
//! `aoai-translate` sends a single chat-completions request to an Azure
//! OpenAI deployment, constrains the reply to a strict JSON schema
//! (`{"Original": string, "Translated": string}`), and prints the
//! `Translated` field.
//!
//! ## Quick Start
//!
//! ```bash
//! export OPENAI_API_KEY=...
//!
//! # Translate the built-in sample sentence into Japanese
//! aoai-translate
//!
//! # Translate your own text into French
//! aoai-translate --to fr "Where is the station?"
//!
//! # Inspect the request without sending it
//! aoai-translate --dry-run
//!
//! # Translate a checklist of Item,Description rows, appending to output.csv
//! aoai-translate --csv checklist.csv --output output.csv
//! ```
//!
//! ## Configuration
//!
//! Optional settings live in `~/.config/aoai-translate/config.toml`:
//!
//! ```toml
//! [translate]
//! endpoint = "https://example.openai.azure.com/openai/deployments/gpt-4o/chat/completions?api-version=2024-08-01-preview"
//! api_key_env = "OPENAI_API_KEY"
//! auth = "api-key"
//! to = "ja"
//! temperature = 0.7
//! top_p = 0.95
//! max_tokens = 800
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file loading and option resolution.
pub mod config;

/// Checklist CSV reading and writing.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Request building, transport and response extraction.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
