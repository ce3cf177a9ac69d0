//! Config command handler
//!
//! Grading settings are checked against the grading catalog before they are saved.

use super::{confirm, read_catalog};
use crate::args::ConfigSubcommand;
use gpa_calc::config::Config;

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let result = match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => {
            show_all(config);
            Ok(())
        }
        Some(ConfigSubcommand::Get { key: Some(key) }) => config
            .get(&key)
            .map(|value| println!("{value}"))
            .ok_or_else(|| format!("Unknown config key: '{key}'")),
        Some(ConfigSubcommand::Set { key, value }) => {
            set_value(config, &key, &value).map(|()| println!("✓ Set {key} = {value}"))
        }
        Some(ConfigSubcommand::Unset { key }) => config
            .unset(&key, defaults)
            .and_then(|()| save(config))
            .map(|()| println!("✓ Reset {key} to default")),
        Some(ConfigSubcommand::Reset) => reset(),
    };

    if let Err(e) = result {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

fn show_all(config: &Config) {
    println!("\n=== Configuration ===\n");
    println!("File: {}\n", Config::get_config_file_path().display());
    print!("{config}");
}

/// Apply, validate and persist one setting
fn set_value(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    let mut updated = config.clone();
    updated.set(key, value)?;
    validate_grading(&updated)?;
    *config = updated;
    save(config)
}

/// `default_system` must name a system known to the (possibly extended) catalog
fn validate_grading(config: &Config) -> Result<(), String> {
    let catalog = read_catalog(&config.grading.systems_file)?;
    let id = &config.grading.default_system;
    if id.is_empty() || catalog.contains(id) {
        return Ok(());
    }

    let known: Vec<&str> = catalog.systems().iter().map(|s| s.id.as_str()).collect();
    Err(format!(
        "Unknown grading system '{id}' (available: {})",
        known.join(", ")
    ))
}

fn save(config: &Config) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))
}

fn reset() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    if confirm("Are you sure you want to reset config to defaults?") {
        Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_with_system(id: &str) -> Config {
        let mut config = Config::from_defaults();
        config.grading.default_system = id.to_string();
        config.grading.systems_file = String::new();
        config
    }

    #[test]
    fn test_builtin_default_system_is_accepted() {
        assert!(validate_grading(&config_with_system("MY")).is_ok());
        assert!(validate_grading(&config_with_system("")).is_ok());
    }

    #[test]
    fn test_unknown_default_system_is_rejected() {
        let err = validate_grading(&config_with_system("XX")).unwrap_err();
        assert!(err.contains("'XX'"));
        assert!(err.contains("AUS, MY"));
    }

    #[test]
    fn test_default_system_from_systems_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("systems.toml");
        fs::write(
            &path,
            "[[systems]]\nid = \"US\"\ngrades = [[\"A\", 4.0], [\"F\", 0.0]]\n",
        )
        .unwrap();

        let mut config = config_with_system("US");
        assert!(validate_grading(&config).is_err());

        config.grading.systems_file = path.to_string_lossy().to_string();
        assert!(validate_grading(&config).is_ok());
    }

    #[test]
    fn test_broken_systems_file_is_rejected() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("systems.toml");
        fs::write(&path, "[[systems]]\nid = \"X\"\ngrades = [[\"A\", 9.0]]\n").unwrap();

        let mut config = config_with_system("AUS");
        config.grading.systems_file = path.to_string_lossy().to_string();
        assert!(validate_grading(&config).is_err());
    }

    #[test]
    fn test_rejected_value_leaves_config_unchanged() {
        let mut config = config_with_system("AUS");
        let err = set_value(&mut config, "default_system", "XX").unwrap_err();

        assert!(err.contains("Unknown grading system"));
        assert_eq!(config.grading.default_system, "AUS");
    }
}
