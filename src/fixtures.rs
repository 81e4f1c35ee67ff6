//! Fixtures
//!
//! Menu payloads stored as YAML under `<base>/menus/<name>.yml`, in the same shape the server
//! returns (`Filters`, `Menu`, `Nutrition`).

use std::{fs, io, path::PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::payload::MenuPayload;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// No fixture with that name
    #[error("Menu fixture not found: {0}")]
    MenuNotFound(String),
}

/// Fixture loader rooted at a base directory.
#[derive(Debug, Clone)]
pub struct Fixture {
    base_path: PathBuf,
}

impl Fixture {
    /// Create a loader with the default base path, `./fixtures`.
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a loader with a custom base path.
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Load the menu payload called `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture does not exist, cannot be read, or is not valid YAML.
    pub fn load_menu(&self, name: &str) -> Result<MenuPayload, FixtureError> {
        let file_path = self.menus_dir().join(format!("{name}.yml"));

        if !file_path.is_file() {
            return Err(FixtureError::MenuNotFound(name.to_string()));
        }

        debug!(path = %file_path.display(), "loading menu fixture");

        let contents = fs::read_to_string(&file_path)?;

        Ok(serde_norway::from_str(&contents)?)
    }

    /// Names of the available menu fixtures, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the menus directory cannot be read.
    pub fn menu_names(&self) -> Result<Vec<String>, FixtureError> {
        let mut names = Vec::new();

        for entry in fs::read_dir(self.menus_dir())? {
            let path = entry?.path();

            if path.extension().is_some_and(|ext| ext == "yml")
                && let Some(stem) = path.file_stem().and_then(|stem| stem.to_str())
            {
                names.push(stem.to_string());
            }
        }

        names.sort();

        Ok(names)
    }

    fn menus_dir(&self) -> PathBuf {
        self.base_path.join("menus")
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use testresult::TestResult;

    use super::*;

    fn write_menu(base: &Path, name: &str, contents: &str) -> TestResult {
        let dir = base.join("menus");

        fs::create_dir_all(&dir)?;
        fs::write(dir.join(format!("{name}.yml")), contents)?;

        Ok(())
    }

    #[test]
    fn loads_bundled_lunch_fixture() -> TestResult {
        let payload = Fixture::new().load_menu("lunch")?;

        assert!(!payload.menu.is_empty());
        assert!(payload.filters.icon("Veggie").is_some());

        Ok(())
    }

    #[test]
    fn loads_menu_from_custom_base_path() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_menu(
            dir.path(),
            "tiny",
            "Filters:\n  Nuts: icons/nuts.png\nMenu:\n  Snacks:\n    Trail Mix: [icons/nuts.png]\n    Pretzels: []\n",
        )?;

        let payload = Fixture::with_base_path(dir.path()).load_menu("tiny")?;

        assert_eq!(payload.filters.icon("Nuts"), Some("icons/nuts.png"));
        assert_eq!(payload.menu.item_count(), 2);
        assert!(payload.nutrition.is_empty());

        Ok(())
    }

    #[test]
    fn missing_fixture_is_reported_by_name() -> TestResult {
        let dir = tempfile::tempdir()?;

        let result = Fixture::with_base_path(dir.path()).load_menu("brunch");

        assert!(matches!(result, Err(FixtureError::MenuNotFound(name)) if name == "brunch"));

        Ok(())
    }

    #[test]
    fn invalid_yaml_is_an_error() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_menu(dir.path(), "broken", "Menu: [unclosed")?;

        let result = Fixture::with_base_path(dir.path()).load_menu("broken");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));

        Ok(())
    }

    #[test]
    fn lists_menu_names() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_menu(dir.path(), "dinner", "Menu: {}\n")?;
        write_menu(dir.path(), "breakfast", "Menu: {}\n")?;
        fs::write(dir.path().join("menus").join("notes.txt"), "ignored")?;

        let names = Fixture::with_base_path(dir.path()).menu_names()?;

        assert_eq!(names, ["breakfast", "dinner"]);

        Ok(())
    }
}
