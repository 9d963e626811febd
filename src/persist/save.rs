use crate::sim::game::GameState;
use anyhow::{Context, Result};
use ron::ser::PrettyConfig;
use std::fs;
use std::path::Path;
use tracing::info;

use super::SaveFormat;
use super::plain::PlainSave;

pub fn save_game(state: &GameState, path: &Path, format: SaveFormat) -> Result<()> {
    let serialized = match format {
        SaveFormat::Ron => ron::ser::to_string_pretty(state, PrettyConfig::new())?,
        SaveFormat::Plain => PlainSave::from_state(state).to_text(),
    };
    fs::write(path, serialized).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), ?format, "saved game");
    Ok(())
}
