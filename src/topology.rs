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
//! Topology and source-destination files consumed by the simulator driver.
use std::{
    fmt, fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::util::PathBufExt;

/// A single bottleneck link: `<src> <dst> <bandwidth> <delay>`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bottleneck {
    pub src: usize,
    pub dst: usize,
    /// Link rate in Mbps
    pub bandwidth: u64,
    /// One-way delay in ms
    pub delay: u64,
}

impl Default for Bottleneck {
    fn default() -> Self {
        Self {
            src: 0,
            dst: 1,
            bandwidth: 15,
            delay: 75,
        }
    }
}

impl fmt::Display for Bottleneck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.src, self.dst, self.bandwidth, self.delay
        )
    }
}

/// Topology of one point in the sweep: `num_senders` flows share the bottleneck.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Topology {
    pub bottleneck: Bottleneck,
    pub num_senders: usize,
}

impl Topology {
    pub fn new(num_senders: usize) -> Self {
        Self {
            bottleneck: Bottleneck::default(),
            num_senders,
        }
    }

    /// Path of the topology file within `folder`.
    pub fn topology_path(&self, folder: &Path) -> PathBuf {
        folder.then_txt("senders", self.num_senders)
    }

    /// Path of the sd file within `folder`.
    pub fn sd_path(&self, folder: &Path) -> PathBuf {
        folder.then_txt("sd", self.num_senders)
    }

    /// Content of the topology file.
    pub fn topology_file(&self) -> String {
        format!("{}\n", self.bottleneck)
    }

    /// Content of the sd file, one line per flow. All flows traverse the bottleneck in the same
    /// direction. The trailing space on each line is expected by downstream tooling.
    pub fn sd_file(&self) -> String {
        format!("{} {} \n", self.bottleneck.src, self.bottleneck.dst).repeat(self.num_senders)
    }

    /// Write both the topology and the sd file into `folder`, and return their paths.
    pub fn write_to(&self, folder: &Path) -> Result<(PathBuf, PathBuf), TopologyError> {
        let topology_path = self.topology_path(folder);
        write_to_file(&topology_path, &self.topology_file())?;
        let sd_path = self.sd_path(folder);
        write_to_file(&sd_path, &self.sd_file())?;
        log::trace!("Written {topology_path:?} and {sd_path:?}");
        Ok((topology_path, sd_path))
    }
}

/// Write `content` to `path`, ensuring that an existing file is overwritten.
fn write_to_file(path: &Path, content: &str) -> Result<(), TopologyError> {
    let wrap = |source| TopologyError {
        path: path.to_path_buf(),
        source,
    };

    let mut file = fs::OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)
        .map_err(wrap)?;

    file.write_all(content.as_bytes()).map_err(wrap)
}

/// Error thrown when a topology file cannot be written.
#[derive(Debug, thiserror::Error)]
#[error("Cannot write {path:?}: {source}")]
pub struct TopologyError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}
