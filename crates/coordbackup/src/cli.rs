//! Clap derive structures for the `coordbackup` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! Kept free of workspace crates so `build.rs` can include it for man pages.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// coordbackup -- inspect and build Zigbee open coordinator backups
#[derive(Debug, Parser)]
#[command(
    name = "coordbackup",
    version,
    about = "Inspect and build Zigbee open coordinator backups",
    long_about = "Reads, writes, and edits Zigbee coordinator backups in the\n\
        open coordinator backup JSON format (zigpy/open-coordinator-backup).\n\n\
        Addresses and keys may be given in any common hex notation; they are\n\
        stored as canonical lowercase hex.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file to use instead of the default location
    #[arg(long, env = "COORDBACKUP_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format (default from config, else table)
    #[arg(long, short = 'o', env = "COORDBACKUP_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summarize a backup file
    #[command(alias = "info")]
    Show(FileArgs),

    /// List the devices in a backup file
    #[command(alias = "dev", alias = "d")]
    Devices(FileArgs),

    /// Create a new backup file
    New(NewArgs),

    /// Append a device to an existing backup file
    AddDevice(AddDeviceArgs),

    /// Rewrite a backup file in canonical layout
    Fmt(FmtArgs),

    /// Print the canonical hex form of an address or key
    #[command(alias = "hex")]
    Normalize(NormalizeArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SHOW / DEVICES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct FileArgs {
    /// Backup file to read
    pub file: PathBuf,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  NEW
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Backup file to create
    pub file: PathBuf,

    /// Application name stored in metadata.source (default from config)
    #[arg(long)]
    pub source: Option<String>,

    /// Coordinator IEEE address (8 bytes, any hex notation)
    #[arg(long)]
    pub coordinator_ieee: String,

    /// PAN ID (2 bytes)
    #[arg(long)]
    pub pan_id: String,

    /// Extended PAN ID (8 bytes)
    #[arg(long)]
    pub extended_pan_id: String,

    /// Current channel
    #[arg(long)]
    pub channel: u32,

    /// Allowed channels, comma-separated (defaults to the current channel)
    #[arg(long, value_delimiter = ',')]
    pub channel_mask: Vec<u32>,

    /// Security level, by name (ENC_MIC32) or number (0-7)
    #[arg(long, default_value = "ENC_MIC32")]
    pub security_level: String,

    /// NWK update ID
    #[arg(long, default_value = "0")]
    pub nwk_update_id: u32,

    /// Network key (16 bytes)
    #[arg(long)]
    pub network_key: String,

    /// Network key sequence number
    #[arg(long, default_value = "0")]
    pub key_seq: u8,

    /// Network key frame counter
    #[arg(long, default_value = "0")]
    pub frame_counter: u32,

    /// Z-Stack trust-center link-key seed (16 bytes)
    #[arg(long)]
    pub tclk_seed: Option<String>,

    /// Overwrite the file if it already exists
    #[arg(long, short = 'f')]
    pub force: bool,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ADD-DEVICE
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AddDeviceArgs {
    /// Backup file to update in place
    pub file: PathBuf,

    /// Device IEEE address (8 bytes)
    #[arg(long)]
    pub ieee: String,

    /// Device NWK address (2 bytes)
    #[arg(long)]
    pub nwk: String,

    /// Mark the device as a router instead of a child
    #[arg(long)]
    pub router: bool,

    /// Trust-center link key (16 bytes)
    #[arg(long)]
    pub link_key: Option<String>,

    /// Link key RX frame counter (default 0)
    #[arg(long, requires = "link_key")]
    pub rx: Option<u32>,

    /// Link key TX frame counter (default 0)
    #[arg(long, requires = "link_key")]
    pub tx: Option<u32>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  FMT / NORMALIZE
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct FmtArgs {
    /// Backup file to rewrite
    pub file: PathBuf,

    /// Report whether the file is already canonical without writing
    #[arg(long)]
    pub check: bool,
}

/// Widest field `normalize` will pad to.
pub const MAX_FIELD_BYTES: i64 = 64;

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Value in any hex notation (e.g. "0x00:0x12:4B")
    pub value: String,

    /// Field width in bytes (1-64); shorter values are zero-padded
    #[arg(
        long,
        short = 'b',
        default_value = "8",
        value_parser = clap::value_parser!(u16).range(1..=MAX_FIELD_BYTES)
    )]
    pub bytes: u16,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Write a config file with default values
    Init {
        /// Overwrite an existing config file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Display current resolved configuration
    Show,

    /// Print the config file location
    Path,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
