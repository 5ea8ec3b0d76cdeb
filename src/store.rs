//! JSON-file persistence for simulations, settings, and raw form input
//!
//! The store keeps everything under one directory with fixed file names,
//! the desktop counterpart of the web app's fixed localStorage keys. The
//! simulation file is a versioned envelope so a future format change can
//! migrate instead of silently dropping data.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::{CalculationParams, FormInput};
use crate::projection::CalculationResult;

/// File name for the simulation envelope
pub const SIMULATIONS_FILE: &str = "investment_simulations.json";

/// File name for the last raw form input
pub const FORM_FILE: &str = "investment_form.json";

/// Current envelope version
pub const STORAGE_VERSION: u32 = 1;

/// Errors from the persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage format error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("stored data has version {0}, this build supports up to {STORAGE_VERSION}")]
    UnsupportedVersion(u32),
}

/// Color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// Display locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "ja")]
    Ja,
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-TW")]
    ZhTw,
}

/// Application settings persisted alongside simulations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    pub theme: Theme,
    pub locale: Locale,
    pub currency: crate::format::Currency,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            locale: Locale::Ja,
            currency: crate::format::Currency::Jpy,
        }
    }
}

/// A saved projection: inputs, outputs, and bookkeeping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub parameters: CalculationParams,
    pub results: CalculationResult,
}

impl Simulation {
    /// Create a named simulation, running the projection for `parameters`
    pub fn new(name: impl Into<String>, parameters: CalculationParams) -> Self {
        let results = crate::projection::calculate(&parameters);
        let now = Utc::now();

        Self {
            id: format!("sim-{}", now.timestamp_millis()),
            name: name.into(),
            created_at: now,
            updated_at: now,
            parameters,
            results,
        }
    }

    /// Re-run the projection after a parameter change
    pub fn recalculate(&mut self) {
        self.results = crate::projection::calculate(&self.parameters);
        self.updated_at = Utc::now();
    }
}

/// Versioned on-disk envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageData {
    pub version: u32,
    pub simulations: Vec<Simulation>,
    #[serde(default)]
    pub settings: Option<AppSettings>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: STORAGE_VERSION,
            simulations: Vec::new(),
            settings: None,
        }
    }
}

/// File-backed store rooted at a directory
#[derive(Debug, Clone)]
pub struct SimulationStore {
    root: PathBuf,
}

impl SimulationStore {
    /// Open a store at `root`, creating the directory if needed
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn simulations_path(&self) -> PathBuf {
        self.root.join(SIMULATIONS_FILE)
    }

    fn form_path(&self) -> PathBuf {
        self.root.join(FORM_FILE)
    }

    /// Load the envelope; a missing file is an empty store
    pub fn load(&self) -> Result<StorageData, StoreError> {
        let path = self.simulations_path();
        if !path.exists() {
            log::debug!("no simulation file at {}, starting empty", path.display());
            return Ok(StorageData::default());
        }

        let contents = fs::read_to_string(&path)?;
        let data: StorageData = serde_json::from_str(&contents)?;

        if data.version > STORAGE_VERSION {
            return Err(StoreError::UnsupportedVersion(data.version));
        }

        log::info!(
            "loaded {} simulation(s) from {}",
            data.simulations.len(),
            path.display()
        );
        Ok(data)
    }

    /// Write the envelope back to disk
    pub fn save(&self, data: &StorageData) -> Result<(), StoreError> {
        let path = self.simulations_path();
        let contents = serde_json::to_string_pretty(data)?;
        fs::write(&path, contents)?;

        log::info!(
            "saved {} simulation(s) to {}",
            data.simulations.len(),
            path.display()
        );
        Ok(())
    }

    /// Insert or replace a simulation by id
    pub fn upsert(&self, simulation: Simulation) -> Result<(), StoreError> {
        let mut data = self.load()?;

        match data.simulations.iter_mut().find(|s| s.id == simulation.id) {
            Some(existing) => *existing = simulation,
            None => data.simulations.push(simulation),
        }

        self.save(&data)
    }

    /// Remove a simulation by id; returns whether anything was removed
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut data = self.load()?;
        let before = data.simulations.len();
        data.simulations.retain(|s| s.id != id);

        let removed = data.simulations.len() < before;
        if removed {
            self.save(&data)?;
        }
        Ok(removed)
    }

    /// Persist the current settings
    pub fn save_settings(&self, settings: AppSettings) -> Result<(), StoreError> {
        let mut data = self.load()?;
        data.settings = Some(settings);
        self.save(&data)
    }

    /// Persist the last raw form input
    pub fn save_form(&self, form: &FormInput) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(form)?;
        fs::write(self.form_path(), contents)?;
        Ok(())
    }

    /// Load the last raw form input, if any was saved
    pub fn load_form(&self) -> Result<Option<FormInput>, StoreError> {
        let path = self.form_path();
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }
}
