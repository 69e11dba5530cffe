//! `normalize`: print the canonical hex form of a value.

use coordbackup_core::hex;
use serde::Serialize;

use crate::cli::NormalizeArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
struct Normalized<'a> {
    input: &'a str,
    bytes: u16,
    canonical: String,
}

pub fn handle(args: &NormalizeArgs, settings: &Settings) -> Result<(), CliError> {
    let width = usize::from(args.bytes) * 2;
    let canonical = hex::normalize(&args.value, width);
    if canonical.len() > width {
        tracing::warn!(width = args.bytes, value = %canonical, "value is wider than the field");
    }

    let result = Normalized {
        input: &args.value,
        bytes: args.bytes,
        canonical,
    };
    let out = output::render_single(
        &settings.output,
        &result,
        |n| n.canonical.clone(),
        |n| n.canonical.clone(),
    )?;
    output::print_output(&out, settings.quiet);
    Ok(())
}
