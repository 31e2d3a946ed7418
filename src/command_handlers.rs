use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use slog::{Logger, info};

use crate::cli::CliArgs;
use crate::filters::FilterCascade;
use crate::models::StreamConfig;
use crate::stream::{InputSource, StreamDriver, StreamSummary, open_input};

/// Builds the cascade and streams standard output until the input runs dry.
pub fn filter(args: &CliArgs, logger: &Logger) -> Result<StreamSummary> {
    let cascade = FilterCascade::low_pass(args.poles, args.response, 0.0)?;
    let config = StreamConfig::from_env(args.mode).context("invalid stream configuration")?;

    info!(logger, "filter ready";
        "response" => args.response,
        "poles" => cascade.poles(),
        "config" => serde_json::to_string(&config).unwrap_or_default());

    let source = match (&args.input, args.noise) {
        (Some(path), _) => InputSource::File(path),
        (None, true) => InputSource::Noise,
        (None, false) => InputSource::Stdin,
    };
    let input = open_input(source, args.samples).with_context(|| match &args.input {
        Some(path) => format!("failed to open {}", path.display()),
        None => "failed to open input".to_string(),
    })?;
    let output = BufWriter::new(io::stdout().lock());

    let mut driver = StreamDriver::new(cascade, config, logger.clone());
    let summary = driver.run(input, output)?;
    Ok(summary)
}
