//! `add-device`: append one device to an existing backup.

use coordbackup_core::hex::{EUI64_LEN, KEY_LEN, SHORT_ADDR_LEN};
use coordbackup_core::{Backup, Device};

use crate::cli::AddDeviceArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

pub fn handle(args: &AddDeviceArgs, settings: &Settings) -> Result<(), CliError> {
    let mut backup = util::load_backup(&args.file)?;
    let device = device_from(args)?;
    let ieee = device.ieee_address().to_owned();

    append(&mut backup, device);
    util::store_backup(&backup, &args.file)?;

    tracing::info!(ieee = %ieee, devices = backup.devices().len(), "added device");
    output::print_status(
        &format!("Added {ieee} to {}", args.file.display()),
        settings.quiet,
    );
    Ok(())
}

fn device_from(args: &AddDeviceArgs) -> Result<Device, CliError> {
    let mut device = Device::create(&args.ieee, &args.nwk, !args.router);
    if let Some(key) = &args.link_key {
        device.set_link_key(key, args.rx.unwrap_or(0), args.tx.unwrap_or(0));
    }

    util::check_width("ieee_address", device.ieee_address(), EUI64_LEN)?;
    util::check_width("nwk_address", device.nwk_address(), SHORT_ADDR_LEN)?;
    if let Some(lk) = device.link_key() {
        util::check_width("link_key", lk.key(), KEY_LEN)?;
    }
    Ok(device)
}

/// Devices are appended even when the IEEE address is already present.
fn append(backup: &mut Backup, device: Device) {
    if backup
        .devices()
        .iter()
        .any(|d| d.ieee_address() == device.ieee_address())
    {
        tracing::warn!(ieee = %device.ieee_address(), "backup already lists this device");
    }
    backup.add_device(device);
}
