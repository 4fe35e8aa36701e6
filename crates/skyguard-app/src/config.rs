//! Loading the simulation config from the command line inputs.

use std::fs;
use std::path::Path;

use tracing::info;

use skyguard_core::config::Tuning;
use skyguard_sim::SimConfig;

use crate::error::AppError;

/// Build a validated [`SimConfig`], reading tuning overrides from `path` if given.
pub fn load_sim_config(path: Option<&Path>, seed: u64) -> Result<SimConfig, AppError> {
    let tuning = match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| AppError::TuningFile {
                path: path.to_path_buf(),
                source,
            })?;
            let tuning = Tuning::from_json_str(&text)?;
            info!(path = %path.display(), "loaded tuning overrides");
            tuning
        }
        None => Tuning::default(),
    };
    tuning.validate()?;

    Ok(SimConfig { seed, tuning })
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyguard_core::config::ConfigError;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("skyguard-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_file() {
        let config = load_sim_config(None, 7).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.tuning.win_score, Tuning::default().win_score);
    }

    #[test]
    fn test_overrides_from_file() {
        let path = temp_file("overrides.json", r#"{ "win_score": 200 }"#);
        let config = load_sim_config(Some(&path), 1).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(config.tuning.win_score, 200);
        assert_eq!(config.tuning.points_per_kill, Tuning::default().points_per_kill);
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("skyguard-does-not-exist.json");
        let err = load_sim_config(Some(&path), 1).unwrap_err();
        assert!(matches!(err, AppError::TuningFile { .. }));
    }

    #[test]
    fn test_invalid_tuning_rejected() {
        let path = temp_file("invalid.json", r#"{ "explosion_duration_ticks": 61 }"#);
        let err = load_sim_config(Some(&path), 1).unwrap_err();
        let _ = fs::remove_file(&path);

        assert!(matches!(
            err,
            AppError::Config(ConfigError::ExplosionDuration(61))
        ));
    }
}
