pub(crate) use snake_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};
use snake_engine::GameSettings;

const CONFIG_FILE: &str = "snake_console.yaml";

/// Config file next to the executable, falling back to the working directory.
pub fn default_config_path() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_FILE)))
        .and_then(|path| path.to_str().map(str::to_string))
        .unwrap_or_else(|| CONFIG_FILE.to_string())
}

pub fn get_config_manager(path: Option<&str>) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&default_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub game: GameSettings,
    pub logging: LoggingConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub file: String,
    pub use_prefix: bool,
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.file.trim().is_empty() {
            return Err("log file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: "snake_console.log".to_string(),
            use_prefix: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_engine::config::{ConfigContentProvider, ConfigSerializer};
    use snake_engine::snake::Direction;

    fn get_temp_file_path() -> String {
        use std::env;
        let mut path = env::temp_dir();
        let random_number: u32 = rand::random();
        let file_name = format!("temp_snake_console_config_{}.yaml", random_number);
        path.push(file_name);
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let mut config = Config::default();
        config.game.grid.rows = 8;
        config.game.grid.cols = 8;
        config.game.sound.music.mute = true;
        config.logging.use_prefix = true;

        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.as_str()));
        assert!(manager.set_config(&config).is_ok());

        let loaded_config = manager.get_config().unwrap();
        assert_eq!(config, loaded_config);

        let fresh_manager = get_config_manager(Some(file_path.as_str()));
        assert_eq!(config, fresh_manager.get_config().unwrap());
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some("this_file_does_not_exist.yaml"));
        let loaded_config = manager.get_config().unwrap();
        assert_eq!(Config::default(), loaded_config);
    }

    #[test]
    fn test_partial_config_fills_in_defaults() {
        let partial_config_content = r#"
            game:
              snake:
                direction: South
                start_row: 0
                start_col: 3
            logging:
              file: game.log
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider.set_config_content(partial_config_content).unwrap();

        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        let loaded_config = manager.get_config().unwrap();
        assert_eq!(loaded_config.game.snake.direction, Direction::South);
        assert_eq!(loaded_config.game.snake.length, 2);
        assert_eq!(loaded_config.game.grid.rows, 5);
        assert_eq!(loaded_config.logging.file, "game.log");
        assert!(!loaded_config.logging.use_prefix);
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            game:
              grid:
                rows: 1
                cols: 5
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider.set_config_content(invalid_config_content).unwrap();

        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_malformed_yaml_cant_be_read() {
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider.set_config_content("game: [unclosed").unwrap();

        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());
        let _ = std::fs::remove_file(file_path);
    }
}
