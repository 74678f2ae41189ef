use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vkloot")]
#[command(about = "Fast CLI tool for searching and downloading vk.com documents")]
#[command(version)]
pub struct Cli {
    /// Search query
    pub query: String,

    /// Save found files to the loot directory
    #[arg(short, long)]
    pub save: bool,

    /// File extension to keep (repeatable); keeps everything when omitted
    #[arg(short, long = "ext", value_name = "EXT")]
    pub ext: Vec<String>,

    /// Number of concurrent download workers
    #[arg(short, long, default_value_t = 4)]
    pub threads: usize,

    /// Loot directory (overrides VKLOOT_LOOT_DIR)
    #[arg(long, value_name = "DIR")]
    pub loot_dir: Option<PathBuf>,

    /// Settings file path (overrides VKLOOT_SETTINGS_PATH)
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,
}
