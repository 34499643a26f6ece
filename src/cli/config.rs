//! Match configuration files for CLI commands

use std::path::Path;

use anyhow::{Context, Result};

use crate::pipeline::MatchConfig;

/// Load a [`MatchConfig`] from a JSON file.
///
/// Missing fields take their defaults, so a file may set only what it changes:
///
/// ```json
/// { "num_games": 50, "rules": { "win_rule": "positional" } }
/// ```
pub fn load_match_config(path: &Path) -> Result<MatchConfig> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open match config {}", path.display()))?;
    let config: MatchConfig = serde_json::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("failed to parse match config {}", path.display()))?;
    Ok(config)
}
