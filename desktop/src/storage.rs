use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tq_core::Settings;

const APP_NAME: &str = "times_quiz";
const ORG_NAME: &str = "practice";
const SETTINGS_FILE: &str = "settings.json";

fn get_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", ORG_NAME, APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

fn settings_path() -> Result<PathBuf, String> {
    get_config_dir()
        .map(|dir| dir.join(SETTINGS_FILE))
        .ok_or_else(|| "Could not determine config directory".to_string())
}

pub fn save_to(path: &Path, settings: &Settings) -> Result<(), String> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| format!("Failed to create config directory: {}", e))?;
    }

    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| format!("Failed to serialize: {}", e))?;

    fs::write(path, json).map_err(|e| format!("Failed to write file: {}", e))
}

pub fn load_from(path: &Path) -> Result<Settings, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let settings: Settings =
        serde_json::from_str(&content).map_err(|e| format!("Failed to deserialize: {}", e))?;
    settings
        .validate()
        .map_err(|e| format!("Stored settings rejected: {}", e))?;
    Ok(settings)
}

pub fn save(settings: &Settings) {
    if let Err(e) = settings_path().and_then(|path| save_to(&path, settings)) {
        log::warn!("could not save settings: {}", e);
    }
}

pub fn load_or_default() -> Settings {
    let path = match settings_path() {
        Ok(path) => path,
        Err(e) => {
            log::warn!("{}", e);
            return Settings::default();
        }
    };
    if !path.exists() {
        return Settings::default();
    }

    load_from(&path).unwrap_or_else(|e| {
        log::warn!("using default settings: {}", e);
        Settings::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tq_core::QuestionCount;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("times_quiz_test_{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn settings_round_trip_through_file() {
        let path = temp_file("round_trip.json");
        let settings = Settings::new(9, QuestionCount::Twenty).unwrap();

        save_to(&path, &settings).unwrap();
        assert_eq!(load_from(&path).unwrap(), settings);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn out_of_range_multiplier_is_rejected() {
        let path = temp_file("bad_multiplier.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"multiplier":40,"question_count":5}"#).unwrap();

        assert!(load_from(&path).is_err());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from(&temp_file("does_not_exist.json")).is_err());
    }
}
