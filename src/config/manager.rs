//! Loads and holds the generator settings of one project.

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    GeneratorSettings,
};

/// Name of the config file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = ".localizable-sheets.json";

/// Owns the validated settings and the project root they are relative to.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    current_settings: GeneratorSettings,

    /// Base for the relative paths in the settings.
    project_root: Option<PathBuf>,
}

impl ConfigManager {
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: GeneratorSettings::default(), project_root: None }
    }

    /// Reads `.localizable-sheets.json` from `project_root` and validates it.
    ///
    /// Without a config file the defaults are validated instead, which fails
    /// because `projectName` is required. On error the manager is unchanged.
    ///
    /// # Errors
    /// - The config file cannot be read
    /// - The config file is not valid JSON for [`GeneratorSettings`]
    /// - The settings fail [`GeneratorSettings::validate`]
    pub fn load_settings(&mut self, project_root: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for project: {:?}", project_root);

        let settings = match &project_root {
            Some(root) => Self::read_config_file(root)?.unwrap_or_default(),
            None => GeneratorSettings::default(),
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        self.project_root = project_root;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// `Ok(None)` when the project has no config file.
    fn read_config_file(project_root: &Path) -> Result<Option<GeneratorSettings>, ConfigError> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            tracing::debug!("Configuration file not found: {:?}", config_path);
            return Ok(None);
        }

        tracing::debug!("Loading configuration from: {:?}", config_path);

        let content = std::fs::read_to_string(&config_path)?;
        let settings: GeneratorSettings = serde_json::from_str(&content)?;

        Ok(Some(settings))
    }

    #[must_use]
    pub const fn get_settings(&self) -> &GeneratorSettings {
        &self.current_settings
    }

    #[must_use]
    pub const fn project_root(&self) -> Option<&PathBuf> {
        self.project_root.as_ref()
    }

    /// Resolves a configured path against the project root.
    ///
    /// Absolute paths, and any path when no root is set, are returned as is.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.project_root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    fn project_with_config(content: &str) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), content).unwrap();
        temp_dir
    }

    #[rstest]
    fn test_new_creates_default_settings() {
        let manager = ConfigManager::new();

        assert_eq!(manager.get_settings().columns.key, "key");
        assert!(manager.project_root().is_none());
    }

    #[rstest]
    fn test_load_settings_without_project() {
        let mut manager = ConfigManager::new();

        let result = manager.load_settings(None);

        assert!(matches!(result, Err(ConfigError::ValidationErrors(_))));
        assert!(manager.project_root().is_none());
    }

    #[rstest]
    fn test_load_settings_with_config_file() {
        let temp_dir = project_with_config(
            r#"{"projectName": "Demo", "outputDir": "generated", "columns": {"key": "KEY"}}"#,
        );

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(Some(temp_dir.path().to_path_buf()));

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().project_name, "Demo");
        assert_eq!(manager.get_settings().output_dir, PathBuf::from("generated"));
        assert_eq!(manager.get_settings().columns.key, "KEY");
        assert_eq!(manager.get_settings().columns.marker, "VARIABLE");
        assert!(manager.project_root().is_some());
    }

    #[rstest]
    fn test_load_settings_without_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(Some(temp_dir.path().to_path_buf()));

        assert!(matches!(result, Err(ConfigError::ValidationErrors(_))));
        assert!(manager.project_root().is_none());
    }

    #[rstest]
    #[case::invalid_json("invalid json")]
    #[case::wrong_type(r#"{"projectName": "Demo", "columns": {"ignored": "EXAMPLE"}}"#)]
    fn test_load_settings_parse_error(#[case] content: &str) {
        let temp_dir = project_with_config(content);

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(Some(temp_dir.path().to_path_buf()));

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
        assert!(manager.get_settings().project_name.is_empty());
    }

    #[rstest]
    fn test_load_settings_invalid_keeps_previous() {
        let valid = project_with_config(r#"{"projectName": "Demo"}"#);
        let invalid = project_with_config(r#"{"projectName": "Other", "importModule": ""}"#);
        let mut manager = ConfigManager::new();
        manager.load_settings(Some(valid.path().to_path_buf())).unwrap();

        let result = manager.load_settings(Some(invalid.path().to_path_buf()));

        assert!(matches!(result, Err(ConfigError::ValidationErrors(_))));
        assert_eq!(manager.get_settings().project_name, "Demo");
        assert_eq!(manager.project_root(), Some(&valid.path().to_path_buf()));
    }

    #[rstest]
    fn test_resolve_relative_to_project_root() {
        let temp_dir = project_with_config(r#"{"projectName": "Demo"}"#);
        let mut manager = ConfigManager::new();
        manager.load_settings(Some(temp_dir.path().to_path_buf())).unwrap();

        let resolved = manager.resolve(Path::new("output"));

        assert_eq!(resolved, temp_dir.path().join("output"));
        assert_eq!(manager.resolve(Path::new("/abs")), PathBuf::from("/abs"));
    }
}
