use crate::sim::game::GameState;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

use super::SaveFormat;
use super::plain::PlainSave;

/// Reads a save. A missing file means a fresh start, not an error.
pub fn load_game(path: &Path, format: SaveFormat) -> Result<Option<GameState>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "no save file, starting fresh");
            return Ok(None);
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {}", path.display()));
        }
    };
    let state = decode(&content, format)
        .with_context(|| format!("failed to parse save file {}", path.display()))?;
    info!(path = %path.display(), ?format, "loaded save");
    Ok(Some(state))
}

fn decode(content: &str, format: SaveFormat) -> Result<GameState> {
    match format {
        SaveFormat::Ron => Ok(ron::from_str(content)?),
        SaveFormat::Plain => Ok(PlainSave::from_text(content)?.into_state()),
    }
}
