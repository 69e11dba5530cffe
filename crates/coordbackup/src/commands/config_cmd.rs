//! Config command handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Settings};
use crate::error::CliError;
use crate::output;

use super::util;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let path = config::active_config_path(global);

    match args.command {
        // ── Init ────────────────────────────────────────────────────
        ConfigCommand::Init { force } => {
            util::ensure_writable(&path, force)?;
            let written = config::save_config(&Config::default(), Some(&path))?;
            tracing::info!(path = %written.display(), "wrote default config");
            output::print_status(
                &format!("Configuration written to {}", written.display()),
                global.quiet,
            );
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config(Some(&path))?;
            let settings = Settings::resolve(global, &cfg);
            let text = toml::to_string_pretty(&cfg).map_err(coordbackup_config::ConfigError::from)?;
            let out = output::render_single(
                &settings.output,
                &cfg,
                |_| text.trim_end().to_owned(),
                |_| path.display().to_string(),
            )?;
            output::print_output(&out, settings.quiet);
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            output::print_output(&path.display().to_string(), global.quiet);
            Ok(())
        }
    }
}
