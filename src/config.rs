use crate::persist::SaveFormat;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

const MIN_TICK_MS: u64 = 10;
const MAX_TICK_MS: u64 = 1_000;

#[derive(Debug, Parser)]
#[command(name = "pie-maker", about = "Bake one million pies in your terminal", version)]
pub struct Cli {
    /// Save file to load on start and write on quit [default: piemaker.ron, or piemaker.txt for plain]
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Save file format
    #[arg(long, value_enum, default_value_t = SaveFormat::Ron)]
    pub format: SaveFormat,

    /// Ignore any existing save and start a new bakery
    #[arg(long)]
    pub fresh: bool,

    /// Do not write the save file on quit
    #[arg(long)]
    pub no_save: bool,

    /// Milliseconds between simulation ticks
    #[arg(long, default_value_t = 50)]
    pub tick_ms: u64,

    /// Where log output goes (the terminal belongs to the game)
    #[arg(long, default_value = "piemaker.log")]
    pub log_file: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable the `$` key, which grants free pies
    #[arg(long)]
    pub debug_keys: bool,
}

impl Cli {
    pub fn save_path(&self) -> PathBuf {
        self.save
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.format.default_file()))
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms.clamp(MIN_TICK_MS, MAX_TICK_MS))
    }
}
