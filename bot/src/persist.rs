use std::fs;
use std::path::Path;

use anyhow::Context;
use minesweeper_engine::GameState;
use tracing::{info, warn};

/// Loads the saved game, falling back to a fresh random one when the file
/// is missing or does not deserialize. A broken state file is never fatal,
/// the next write simply replaces it.
pub fn load_state(path: &Path) -> GameState {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            info!("no saved game at {} ({err}), starting fresh", path.display());
            return GameState::random();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(state) => state,
        Err(err) => {
            warn!(
                "discarding corrupt game state at {}: {err}",
                path.display()
            );
            GameState::random()
        }
    }
}

pub fn store_state(path: &Path, state: &GameState) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(state).context("serializing game state")?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
