//! Logging initialization
//!
//! Diagnostics go to stderr through an `EnvFilter` (`RUST_LOG` wins over the
//! configured directive). Transcript events are routed, unadorned, to the
//! transcript file so it can be shown once the demo finishes.

use anyhow::Context;
use autoincrement_example::TRANSCRIPT_TARGET;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Install the global subscriber; truncates the transcript file first
pub fn init(default_directive: &str, transcript_file: &Path) -> anyhow::Result<()> {
    let dir = match transcript_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = transcript_file
        .file_name()
        .with_context(|| format!("invalid transcript file: {}", transcript_file.display()))?
        .to_string_lossy()
        .into_owned();

    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;
    std::fs::File::create(transcript_file)
        .with_context(|| format!("truncating {}", transcript_file.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)?;

    let diagnostics = fmt::layer().with_writer(std::io::stderr).with_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
    );

    let transcript = fmt::layer()
        .with_writer(appender)
        .with_ansi(false)
        .without_time()
        .with_level(false)
        .with_target(false)
        .with_filter(filter_fn(|meta| meta.target() == TRANSCRIPT_TARGET));

    tracing_subscriber::registry()
        .with(diagnostics)
        .with(transcript)
        .try_init()?;
    Ok(())
}
