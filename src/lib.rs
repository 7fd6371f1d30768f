// src/lib.rs
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

// --- Declare modules ---
mod config;
pub mod import;
pub mod loads;
pub mod registry;
pub mod sheet;

// --- Expose public types ---
pub use config::{
    get_config_path as get_config_path_util,
    load as load_config_util,
    parse_color,
    save as save_config_util,
    Config,
    Error as ConfigError,
    StandardColor,
    Theme,
};
pub use import::{ImportError, ImportFormat};
pub use loads::{compute_loads, LoadUpdate, SeriesLoad};
pub use registry::NameRegistry;
pub use sheet::{Exercise, ExerciseRow, WorkoutSheet, WorkoutTab};

/// Outcome of one bulk import: how many names were new, and the registry
/// size afterwards (size before the import plus `added`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    pub added: usize,
    pub total: usize,
}

/// Owns the whole in-process state: the sheet, the name registry and the
/// configuration. Consumers receive a reference to this instead of
/// looking state up ambiently.
pub struct AppService {
    pub config: Config,
    pub config_path: PathBuf,
    pub sheet: WorkoutSheet,
    pub registry: NameRegistry,
}

impl AppService {
    /// Initializes the application service.
    /// # Errors
    /// Returns `anyhow::Error` if config path determination or loading fails.
    pub fn initialize() -> Result<Self> {
        let config_path =
            config::get_config_path().context("Failed to determine configuration file path")?;
        let config = config::load(&config_path)
            .context(format!("Failed to load config from {config_path:?}"))?;

        Ok(Self {
            config,
            config_path,
            sheet: WorkoutSheet::new(),
            registry: NameRegistry::new(),
        })
    }

    pub fn get_config_path(&self) -> &Path {
        &self.config_path
    }

    /// Saves the current configuration state.
    /// # Errors
    /// Returns `ConfigError` if saving fails.
    pub fn save_config(&self) -> Result<(), ConfigError> {
        config::save(&self.config_path, &self.config)
    }

    /// Commits an exercise's current name to the registry. This is the
    /// "name field loses focus" step: typed names only reach
    /// autocomplete through it, and they never gain import provenance.
    pub fn commit_exercise_name(&mut self, exercise_id: i64) {
        let name = self.sheet.exercise_name(exercise_id).map(ToString::to_string);
        if let Some(name) = name {
            self.registry.add_name(&name);
        }
    }

    /// Imports candidate names from a file, dispatching the parser on
    /// the file extension.
    /// # Errors
    /// - `ImportError::UnsupportedFormat` for unknown extensions, before
    ///   any read attempt.
    /// - `ImportError::Read`/`Workbook`/`Delimited` if decoding fails;
    ///   the registry is left untouched in every error case.
    pub fn import_file(&mut self, path: &Path) -> Result<ImportReport, ImportError> {
        let candidates = import::candidates_from_file(path)?;
        Ok(self.apply_import(&candidates))
    }

    /// Imports candidate names from pasted free text.
    /// # Errors
    /// Returns `ImportError::EmptyInput` when tokenization yields nothing.
    pub fn import_pasted(&mut self, text: &str) -> Result<ImportReport, ImportError> {
        let candidates = import::parse_pasted_list(text);
        if candidates.is_empty() {
            return Err(ImportError::EmptyInput);
        }
        Ok(self.apply_import(&candidates))
    }

    fn apply_import(&mut self, candidates: &[String]) -> ImportReport {
        let before = self.registry.len();
        let added = self.registry.add_names_bulk(candidates);
        ImportReport {
            added,
            total: before + added,
        }
    }

    /// Autocomplete suggestions for a partially typed exercise name.
    pub fn autocomplete<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a str> {
        self.registry.similarity_search(query)
    }

    /// Deletes one imported name (from the imported set and the
    /// autocomplete pool alike).
    pub fn remove_imported_name(&mut self, name: &str) {
        self.registry.remove_imported_name(name);
    }

    /// Batch form of [`Self::remove_imported_name`].
    pub fn remove_imported_names<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.registry.remove_imported_names(names);
    }

    /// Deletes the whole current imported set in one call.
    pub fn remove_all_imported(&mut self) {
        self.registry.remove_all_imported();
    }
}
