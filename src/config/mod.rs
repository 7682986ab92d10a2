#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::ports::{ConfigProvider, ConfigSource, Reporter};
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use chrono::{DateTime, Datelike, Local, Timelike};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const PATRON_FILE_NAME: &str = "patronFileName";
pub const DESTINATION_FOLDER: &str = "destinationFolder";
pub const LOG_FILE_DIRECTORY: &str = "logFileDirectory";

/// Settings read from the process environment, optionally seeded from a
/// dotenv file.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    env_file: Option<PathBuf>,
}

impl EnvConfig {
    /// A missing dotenv file is fine, the variables may already be exported.
    pub fn load<P: AsRef<Path>>(env_file: P) -> Result<Self> {
        let env_file = env_file.as_ref();
        match dotenvy::from_path(env_file) {
            Ok(()) => Ok(Self {
                env_file: Some(env_file.to_path_buf()),
            }),
            Err(e) if e.not_found() => Ok(Self { env_file: None }),
            Err(e) => Err(EtlError::InvalidConfigValue {
                field: "env_file".to_string(),
                value: env_file.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// The dotenv file that was loaded, if any.
    pub fn env_file(&self) -> Option<&Path> {
        self.env_file.as_deref()
    }
}

impl ConfigSource for EnvConfig {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// Loads the run settings from `env_file` and the environment. Failures are
/// reported as critical before being returned.
pub fn load_settings(env_file: &Path, reporter: &dyn Reporter) -> Result<Settings> {
    let result = EnvConfig::load(env_file).and_then(|env| {
        if let Some(path) = env.env_file() {
            reporter.info(&format!("Loaded settings from {}", path.display()));
        }
        Settings::from_source(&env)
    });

    if let Err(e) = &result {
        reporter.critical(&e.user_friendly_message());
    }
    result
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub patron_file_name: PathBuf,
    pub destination_folder: PathBuf,
    pub log_file_directory: PathBuf,
    output_path: PathBuf,
}

impl Settings {
    /// Reads the three required settings, failing on the first one missing.
    pub fn from_source<S: ConfigSource + ?Sized>(source: &S) -> Result<Self> {
        let patron_file_name =
            validation::validate_required_setting(PATRON_FILE_NAME, source.get(PATRON_FILE_NAME))?;
        let destination_folder = validation::validate_required_setting(
            DESTINATION_FOLDER,
            source.get(DESTINATION_FOLDER),
        )?;
        let log_file_directory = validation::validate_required_setting(
            LOG_FILE_DIRECTORY,
            source.get(LOG_FILE_DIRECTORY),
        )?;

        let settings = Self::new(patron_file_name, destination_folder, log_file_directory)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn new(
        patron_file_name: impl Into<PathBuf>,
        destination_folder: impl Into<PathBuf>,
        log_file_directory: impl Into<PathBuf>,
    ) -> Result<Self> {
        let patron_file_name = patron_file_name.into();
        let destination_folder = destination_folder.into();
        let stem = validation::validate_file_stem(PATRON_FILE_NAME, &patron_file_name)?;
        let output_path = destination_folder.join(format!("{}.json", stem));

        Ok(Self {
            patron_file_name,
            destination_folder,
            log_file_directory: log_file_directory.into(),
            output_path,
        })
    }

    /// `<logFileDirectory>/<Y>-<M>-<D>--<h>-<m>-<s>.log` for a run started at `started`.
    pub fn log_file_path(&self, started: &DateTime<Local>) -> PathBuf {
        self.log_file_directory.join(format!(
            "{}-{}-{}--{}-{}-{}.log",
            started.year(),
            started.month(),
            started.day(),
            started.hour(),
            started.minute(),
            started.second()
        ))
    }

    /// Setting names paired with their values, in lookup order.
    pub fn entries(&self) -> [(&'static str, String); 3] {
        [
            (PATRON_FILE_NAME, self.patron_file_name.display().to_string()),
            (DESTINATION_FOLDER, self.destination_folder.display().to_string()),
            (LOG_FILE_DIRECTORY, self.log_file_directory.display().to_string()),
        ]
    }
}

impl ConfigProvider for Settings {
    fn patron_file(&self) -> &Path {
        &self.patron_file_name
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        for (field, value) in self.entries() {
            validation::validate_path(field, &value)?;
        }
        Ok(())
    }
}
