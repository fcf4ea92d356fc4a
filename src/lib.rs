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
//! Library for generating sender-count sweeps of ns-2 congestion-control experiments.
//!
//! A sweep writes one topology and one sd file for every number of senders, and synthesizes a
//! Makefile with one target for every combination of the number of senders, the run index, and
//! the scenario (whisker tree and TCP agent). Executing the Makefile runs the simulator driver.

pub mod build_file;
pub mod config;
pub mod experiments;
pub mod topology;
pub mod util;

pub mod prelude {
    pub use super::{
        build_file::BuildFile,
        config::SweepConfig,
        experiments::{iterate_runs, list_scenarios, RunDescription, Scenario, TcpAgent},
        topology::Topology,
    };
}
