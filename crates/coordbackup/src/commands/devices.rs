//! `devices`: table of the devices stored in a backup.

use coordbackup_core::Device;
use tabled::Tabled;

use crate::cli::FileArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "IEEE")]
    ieee: String,
    #[tabled(rename = "NWK")]
    nwk: String,
    #[tabled(rename = "Role")]
    role: &'static str,
    #[tabled(rename = "Link Key")]
    link_key: &'static str,
    #[tabled(rename = "RX")]
    rx: String,
    #[tabled(rename = "TX")]
    tx: String,
}

impl From<&Device> for DeviceRow {
    fn from(d: &Device) -> Self {
        let key = d.link_key();
        Self {
            ieee: d.ieee_address().to_owned(),
            nwk: d.nwk_address().to_owned(),
            role: if d.is_child() { "child" } else { "router" },
            link_key: util::yes_no(key.is_some()),
            rx: key.map_or_else(|| "-".into(), |k| k.rx_counter().to_string()),
            tx: key.map_or_else(|| "-".into(), |k| k.tx_counter().to_string()),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &FileArgs, settings: &Settings) -> Result<(), CliError> {
    let backup = util::load_backup(&args.file)?;
    let out = output::render_list(
        &settings.output,
        backup.devices(),
        |d| DeviceRow::from(d),
        |d| d.ieee_address().to_owned(),
    )?;
    output::print_output(&out, settings.quiet);
    Ok(())
}
