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
//! Module describing the individual simulation runs of a sweep.

pub mod list_scenarios;
pub mod runner;
pub mod scenarios;

pub use list_scenarios::*;
pub use runner::*;
pub use scenarios::*;

use std::path::PathBuf;

use itertools::iproduct;

use crate::{config::SweepConfig, topology::Topology, util::fmt_float};

/// Describes one invocation of the simulator driver.
#[derive(Debug, Clone, PartialEq)]
pub struct RunDescription {
    pub num_senders: usize,
    pub scenario: Scenario,
    pub workload: TrafficWorkload,
    pub topology: PathBuf,
    pub sd_pairs: PathBuf,
    pub off_time: f64,
    pub sim_time: u64,
    /// Run index, starting at 1
    pub run: usize,
    pub tag: String,
    pub driver: String,
    pub result_folder: PathBuf,
}

impl RunDescription {
    /// Describe run `run` of `scenario` with `num_senders` senders.
    pub fn new(config: &SweepConfig, scenario: &Scenario, num_senders: usize, run: usize) -> Self {
        let topo = Topology::new(num_senders);
        Self {
            num_senders,
            scenario: scenario.clone(),
            workload: config.workload,
            topology: topo.topology_path(&config.topo_folder),
            sd_pairs: topo.sd_path(&config.topo_folder),
            off_time: config.off_time,
            sim_time: config.sim_time,
            run,
            tag: scenario.tag(num_senders),
            driver: config.driver.clone(),
            result_folder: config.result_folder.clone(),
        }
    }

    fn result_file(&self, extension: &str) -> PathBuf {
        self.result_folder
            .join(format!("{}run{}.{extension}", self.tag, self.run))
    }

    /// File receiving the stdout of the simulator. Also the name of the build target.
    pub fn output_path(&self) -> PathBuf {
        self.result_file("out")
    }

    /// File receiving the stderr of the simulator.
    pub fn error_path(&self) -> PathBuf {
        self.result_file("err")
    }

    /// Name of the build target.
    pub fn target(&self) -> String {
        self.output_path().display().to_string()
    }

    /// The shell command executing this run, including the output redirection.
    pub fn command_line(&self) -> String {
        format!(
            "WHISKERS={} {} {} {} {} {} -offavg {} -simtime {} -run {} >{} 2>{}",
            self.scenario.whiskers,
            self.driver,
            self.topology.display(),
            self.sd_pairs.display(),
            self.scenario.agent,
            self.workload,
            fmt_float(self.off_time),
            self.sim_time,
            self.run,
            self.output_path().display(),
            self.error_path().display(),
        )
    }
}

/// Iterate over all runs of the sweep in generation order: the number of senders varies slowest,
/// then the run index, then the scenario.
pub fn iterate_runs<'a>(
    config: &'a SweepConfig,
    scenarios: &'a [Scenario],
) -> impl Iterator<Item = RunDescription> + 'a {
    iproduct!(
        1..=config.max_senders,
        1..=config.iteration_count,
        scenarios.iter()
    )
    .map(move |(num_senders, run, scenario)| {
        RunDescription::new(config, scenario, num_senders, run)
    })
}
