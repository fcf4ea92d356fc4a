// sendersweep: Sender-Count Sweeps of ns-2 Congestion-Control Experiments
// Copyright (C) 2024-2025 Roland Schmid <roschmi@ethz.ch> and Tibor Schneider <sctibor@ethz.ch>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//! Constants of a sweep, with optional overrides loaded from a JSON file.

use std::{
    env, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::experiments::TrafficWorkload;

/// Everything that parametrizes a sweep. The default values reproduce the sender sweep of the
/// decomposability experiments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Number of runs per scenario and sender count
    pub iteration_count: usize,
    /// Sweep the number of senders from 1 up to (and including) this value
    pub max_senders: usize,
    /// Folder receiving the stdout and stderr of every simulation run
    pub result_folder: PathBuf,
    /// Folder receiving the topology and sd files
    pub topo_folder: PathBuf,
    /// Simulator driver invoked by each recipe
    pub driver: String,
    /// Directory containing the whisker trees. If `None`, the current working directory is used.
    pub whisker_dir: Option<PathBuf>,
    /// Traffic pattern of all senders
    pub workload: TrafficWorkload,
    /// Average off time of the senders in seconds
    pub off_time: f64,
    /// Simulated duration in seconds
    pub sim_time: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            iteration_count: 10,
            max_senders: 100,
            result_folder: PathBuf::from("ns2resultssendersweep"),
            topo_folder: PathBuf::from("ns2toposenders"),
            driver: "./decompose.tcl".to_string(),
            whisker_dir: None,
            workload: TrafficWorkload::default(),
            off_time: 1.0,
            sim_time: 100,
        }
    }
}

impl SweepConfig {
    /// Read a (possibly partial) configuration from a JSON file. Missing fields keep their
    /// default values.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content)?;
        log::debug!("Loaded configuration from {path:?}: {config:?}");
        Ok(config)
    }

    /// Apply the overrides given on the command line. They take precedence over both the
    /// configuration file and the defaults.
    pub fn apply_overrides(&mut self, whisker_dir: Option<PathBuf>) {
        if let Some(dir) = whisker_dir {
            log::debug!("Overriding the whisker directory with {dir:?}");
            self.whisker_dir = Some(dir);
        }
    }

    /// The directory containing the whisker trees, falling back to the current working
    /// directory.
    pub fn whisker_dir(&self) -> io::Result<PathBuf> {
        match &self.whisker_dir {
            Some(dir) => Ok(dir.clone()),
            None => env::current_dir(),
        }
    }

    /// Total number of simulation runs, given the number of scenarios per sender count and run.
    pub fn num_runs(&self, num_scenarios: usize) -> usize {
        self.max_senders * self.iteration_count * num_scenarios
    }
}

/// Error type thrown while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Cannot read the configuration {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file content is not a valid configuration.
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default() {
        let config = SweepConfig::default();
        assert_eq!(config.iteration_count, 10);
        assert_eq!(config.max_senders, 100);
        assert_eq!(config.result_folder, PathBuf::from("ns2resultssendersweep"));
        assert_eq!(config.topo_folder, PathBuf::from("ns2toposenders"));
        assert_eq!(config.num_runs(7), 7000);
    }

    #[test]
    fn test_partial_json() {
        let config: SweepConfig =
            serde_json::from_str(r#"{"max_senders": 4, "whisker_dir": "/opt/remy"}"#).unwrap();
        assert_eq!(config.max_senders, 4);
        assert_eq!(config.whisker_dir().unwrap(), PathBuf::from("/opt/remy"));
        // all other values remain at their default
        assert_eq!(
            config,
            SweepConfig {
                max_senders: 4,
                whisker_dir: Some(PathBuf::from("/opt/remy")),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_apply_overrides() {
        let mut config: SweepConfig =
            serde_json::from_str(r#"{"whisker_dir": "/from-config"}"#).unwrap();

        // nothing given on the command line, keep the value of the file
        config.apply_overrides(None);
        assert_eq!(config.whisker_dir, Some(PathBuf::from("/from-config")));

        // the command line wins over the file
        config.apply_overrides(Some(PathBuf::from("/from-cli")));
        assert_eq!(config.whisker_dir().unwrap(), PathBuf::from("/from-cli"));

        // and over the default
        let mut config = SweepConfig::default();
        config.apply_overrides(Some(PathBuf::from("/x")));
        assert_eq!(config.whisker_dir, Some(PathBuf::from("/x")));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.json");
        std::fs::write(&path, r#"{"iteration_count": 2, "sim_time": 10}"#).unwrap();
        let config = SweepConfig::from_file(&path).unwrap();
        assert_eq!(config.iteration_count, 2);
        assert_eq!(config.sim_time, 10);
        assert_eq!(config.driver, "./decompose.tcl");

        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            SweepConfig::from_file(&path),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            SweepConfig::from_file(dir.path().join("missing.json")),
            Err(ConfigError::Io { .. })
        ));
    }
}
