//! `new`: build a backup from flags and write it.

use coordbackup_core::Backup;
use coordbackup_core::hex::{EUI64_LEN, KEY_LEN, SHORT_ADDR_LEN};

use crate::cli::NewArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

pub fn handle(args: &NewArgs, settings: &Settings) -> Result<(), CliError> {
    util::ensure_writable(&args.file, args.force)?;

    let backup = build(args, settings)?;
    util::store_backup(&backup, &args.file)?;

    tracing::info!(path = %args.file.display(), "created backup");
    output::print_status(&format!("Created {}", args.file.display()), settings.quiet);
    Ok(())
}

fn build(args: &NewArgs, settings: &Settings) -> Result<Backup, CliError> {
    let level = util::parse_security_level(&args.security_level)?;
    let source = args.source.clone().unwrap_or_else(|| settings.source.clone());

    // An empty mask means "only the current channel".
    let mask = if args.channel_mask.is_empty() {
        vec![args.channel]
    } else {
        args.channel_mask.clone()
    };

    let mut backup = Backup::new(source, serde_json::Map::new());
    backup
        .set_coordinator_ieee(&args.coordinator_ieee)
        .set_pan_id(&args.pan_id)
        .set_extended_pan_id(&args.extended_pan_id)
        .set_channel(args.channel)
        .add_channels(mask)
        .set_security_level(level)
        .set_nwk_update_id(args.nwk_update_id)
        .set_network_key(&args.network_key, args.key_seq, args.frame_counter);

    if let Some(seed) = &args.tclk_seed {
        backup.set_zstack_tclk_seed(seed);
    }

    util::check_width("coordinator_ieee", backup.coordinator_ieee(), EUI64_LEN)?;
    util::check_width("pan_id", backup.pan_id(), SHORT_ADDR_LEN)?;
    util::check_width("extended_pan_id", backup.extended_pan_id(), EUI64_LEN)?;
    util::check_width("network_key", backup.network_key().key(), KEY_LEN)?;
    if let Some(zstack) = backup.stack_specific().and_then(|s| s.as_zstack()) {
        util::check_width("tclk_seed", zstack.tclk_seed(), KEY_LEN)?;
    }

    Ok(backup)
}
