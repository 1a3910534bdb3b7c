use anyhow::{Context, Result};
use std::path::Path;

use super::Config;
use crate::scoring::ScoringConfig;

/// Write a config file holding the built-in scoring rules, ready to be edited.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let config = Config {
        input: None,
        export_dir: None,
        scoring: Some(ScoringConfig::default()),
    };

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    // Create parent directories
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use std::env;

    #[test]
    fn test_written_config_loads_back() {
        let path = env::temp_dir()
            .join("lead_scorer_test_init")
            .join("config.yaml");
        let _ = std::fs::remove_file(&path);

        write_default_config(&path, false).unwrap();
        let config = load_config(Some(path.clone())).unwrap();
        assert_eq!(config.scoring, Some(ScoringConfig::default()));

        // Cleanup
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_existing_config_needs_force() {
        let path = env::temp_dir().join("lead_scorer_test_init_force.yaml");
        std::fs::write(&path, "{}").unwrap();

        assert!(write_default_config(&path, false).is_err());
        assert!(write_default_config(&path, true).is_ok());

        // Cleanup
        let _ = std::fs::remove_file(&path);
    }
}
