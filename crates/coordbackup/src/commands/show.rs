//! `show`: summary of one backup file.

use coordbackup_core::Backup;

use crate::cli::FileArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

const LABEL_WIDTH: usize = 17;

fn detail(b: &Backup, color: bool) -> String {
    let meta = b.metadata();
    let key = b.network_key();
    let devices = b.devices();
    let routers = devices.iter().filter(|d| !d.is_child()).count();
    let keyed = devices.iter().filter(|d| d.link_key().is_some()).count();

    let mask = b
        .channel_mask()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let line = |name: &str, value: String| format!("{}{value}", output::label(name, LABEL_WIDTH, color));

    let mut lines = vec![
        line("Format", format!("{} v{}", meta.format(), meta.version())),
        line("Source", meta.source().to_owned()),
        line("Coordinator", b.coordinator_ieee().to_owned()),
        line("PAN ID", b.pan_id().to_owned()),
        line("Extended PAN ID", b.extended_pan_id().to_owned()),
        line("Channel", b.channel().to_string()),
        line("Channel mask", if mask.is_empty() { "-".into() } else { mask }),
        line("NWK update ID", b.nwk_update_id().to_string()),
        line(
            "Security",
            format!("{} ({})", b.security_level(), u8::from(b.security_level())),
        ),
        line(
            "Network key",
            format!("seq {}, frame counter {}", key.sequence_number(), key.frame_counter()),
        ),
    ];

    if let Some(stack) = b.stack_specific() {
        lines.push(line("Stack", stack.tag().to_owned()));
    }

    lines.push(line(
        "Devices",
        format!(
            "{} ({routers} routers, {} children, {keyed} with link key)",
            devices.len(),
            devices.len() - routers
        ),
    ));

    if !meta.is_open_coordinator_backup() {
        lines.push(line("Warning", "unrecognized metadata.format".into()));
    }

    lines.join("\n")
}

pub fn handle(args: &FileArgs, settings: &Settings) -> Result<(), CliError> {
    let backup = util::load_backup(&args.file)?;
    tracing::debug!(devices = backup.devices().len(), "loaded backup");

    let out = output::render_single(
        &settings.output,
        &backup,
        |b| detail(b, settings.color),
        |b| b.extended_pan_id().to_owned(),
    )?;
    output::print_output(&out, settings.quiet);
    Ok(())
}
