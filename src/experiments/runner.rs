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
//! Module that prepares the filesystem for a sweep and synthesizes the build file for all runs.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, info};
use thiserror::Error;

use super::{iterate_runs, list_scenarios, Scenario};
use crate::{
    build_file::BuildFile,
    config::SweepConfig,
    topology::{Topology, TopologyError},
};

/// Run the whole sweep: recreate the result and topology folders, write all topologies, and
/// return the build file executing every simulation run.
pub fn run(config: &SweepConfig) -> Result<BuildFile, SweepError> {
    let scenarios = scenarios(config)?;
    prepare_directories(config)?;
    write_topologies(config)?;
    Ok(synthesize_runs(config, &scenarios))
}

/// Synthesize the build file without touching the filesystem.
pub fn dry_run(config: &SweepConfig) -> Result<BuildFile, SweepError> {
    let scenarios = scenarios(config)?;
    Ok(synthesize_runs(config, &scenarios))
}

fn scenarios(config: &SweepConfig) -> Result<[Scenario; 7], SweepError> {
    let whisker_dir = config.whisker_dir().map_err(SweepError::CurrentDir)?;
    debug!("Using whisker trees from {whisker_dir:?}");
    Ok(list_scenarios(&whisker_dir))
}

/// Delete the result and topology folders (if they exist) and create them anew.
pub fn prepare_directories(config: &SweepConfig) -> Result<(), SweepError> {
    for dir in [&config.result_folder, &config.topo_folder] {
        reset_dir(dir)?;
    }
    Ok(())
}

fn reset_dir(dir: &Path) -> Result<(), SweepError> {
    let wrap = |source| SweepError::Io {
        path: dir.to_path_buf(),
        source,
    };
    // like `rm -rf`: also remove files and (dangling) symlinks in place of the folder
    match fs::symlink_metadata(dir) {
        Ok(meta) if meta.is_dir() => {
            debug!("Removing {dir:?}");
            fs::remove_dir_all(dir).map_err(wrap)?;
        }
        Ok(_) => {
            debug!("Removing non-directory {dir:?}");
            fs::remove_file(dir).map_err(wrap)?;
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(wrap(e)),
    }
    fs::create_dir(dir).map_err(wrap)
}

/// Write the topology and the sd file for every number of senders.
pub fn write_topologies(config: &SweepConfig) -> Result<(), SweepError> {
    for num_senders in 1..=config.max_senders {
        Topology::new(num_senders).write_to(&config.topo_folder)?;
    }
    info!(
        "Written {} topologies to {:?}",
        config.max_senders, config.topo_folder
    );
    Ok(())
}

/// Add a rule for every run of every scenario to a new build file.
pub fn synthesize_runs(config: &SweepConfig, scenarios: &[Scenario]) -> BuildFile {
    let mut build = BuildFile::new();
    build.extend(iterate_runs(config, scenarios));
    info!(
        "Synthesized {} runs ({} scenarios, {} sender counts, {} runs each)",
        build.len(),
        scenarios.len(),
        config.max_senders,
        config.iteration_count
    );
    build
}

/// Error type thrown while preparing a sweep.
#[derive(Debug, Error)]
pub enum SweepError {
    /// A folder could not be removed or created.
    #[error("Cannot prepare the folder {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A topology could not be written.
    #[error(transparent)]
    Topology(#[from] TopologyError),
    /// The whisker directory defaults to the current directory, which is inaccessible.
    #[error("Cannot determine the current directory: {0}")]
    CurrentDir(#[source] io::Error),
}

#[cfg(test)]
mod test {
    use super::*;

    fn config(root: &Path) -> SweepConfig {
        SweepConfig {
            iteration_count: 2,
            max_senders: 4,
            result_folder: root.join("results"),
            topo_folder: root.join("topos"),
            whisker_dir: Some(root.to_path_buf()),
            ..Default::default()
        }
    }

    #[test]
    fn test_prepare_directories() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());

        // stale files from an earlier sweep
        fs::create_dir(&config.result_folder).unwrap();
        fs::write(config.result_folder.join("stale.out"), "old").unwrap();

        prepare_directories(&config).unwrap();
        assert!(config.topo_folder.is_dir());
        assert!(config.result_folder.is_dir());
        assert_eq!(fs::read_dir(&config.result_folder).unwrap().count(), 0);
    }

    #[test]
    fn test_prepare_fails_on_missing_parent() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(dir.path());
        config.result_folder = dir.path().join("a").join("b");
        match prepare_directories(&config) {
            Err(SweepError::Io { path, .. }) => assert_eq!(path, config.result_folder),
            r => panic!("unexpected result: {r:?}"),
        }
    }

    #[test]
    fn test_prepare_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());
        fs::write(&config.topo_folder, "not a folder").unwrap();

        prepare_directories(&config).unwrap();
        assert!(config.topo_folder.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_prepare_replaces_dangling_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());
        std::os::unix::fs::symlink(dir.path().join("gone"), &config.result_folder).unwrap();
        assert!(!config.result_folder.exists());

        prepare_directories(&config).unwrap();
        assert!(config.result_folder.is_dir());
        assert!(!fs::symlink_metadata(&config.result_folder)
            .unwrap()
            .file_type()
            .is_symlink());
    }

    #[test]
    fn test_run() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());
        let build = run(&config).unwrap();

        assert_eq!(build.len(), 4 * 2 * 7);
        for n in 1..=4 {
            let topo = fs::read_to_string(config.topo_folder.join(format!("senders{n}.txt")));
            assert_eq!(topo.unwrap(), "0 1 15 75\n");
            let sd = fs::read_to_string(config.topo_folder.join(format!("sd{n}.txt"))).unwrap();
            assert_eq!(sd.lines().count(), n);
        }
        assert_eq!(fs::read_dir(&config.topo_folder).unwrap().count(), 8);
        // the results are produced by the simulator, not by the sweep
        assert_eq!(fs::read_dir(&config.result_folder).unwrap().count(), 0);
    }

    #[test]
    fn test_dry_run() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());
        let build = dry_run(&config).unwrap();
        assert_eq!(build, run(&config).unwrap());
    }

    #[test]
    fn test_dry_run_leaves_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());
        dry_run(&config).unwrap();
        assert!(!config.result_folder.exists());
        assert!(!config.topo_folder.exists());
    }
}
