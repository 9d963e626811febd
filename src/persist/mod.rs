mod load;
pub mod plain;
mod save;

pub use load::load_game;
pub use save::save_game;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SaveFormat {
    /// Full game state as RON
    Ron,
    /// Six numbers, one per line
    Plain,
}

impl SaveFormat {
    /// Save file used when no path is given.
    pub fn default_file(self) -> &'static str {
        match self {
            SaveFormat::Ron => "piemaker.ron",
            SaveFormat::Plain => "piemaker.txt",
        }
    }
}
