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
//! Module containing the building blocks of a sweep scenario: the transport protocol, the queue at
//! the bottleneck, the traffic pattern and the whisker tree.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::util::fmt_float;

/// Simple interface to describe a scenario. A scenario is instantiated once for every sender
/// count and run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scenario {
    /// Prefix of the tag, the number of senders is appended to it.
    pub name: String,
    /// Policy table for the Rational transport
    pub whiskers: WhiskerTree,
    /// Transport, sink and queue configuration
    pub agent: TcpAgent,
}

impl Scenario {
    /// Return the tag of this scenario for a given number of senders. It names the output files
    /// and build targets.
    pub fn tag(&self, num_senders: usize) -> String {
        format!("{}{num_senders}", self.name)
    }
}

/// Whisker tree passed to the simulator in the `WHISKERS` variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WhiskerTree {
    /// No policy table, the agent is a standard TCP variant.
    Null,
    /// Path to a policy table.
    File(PathBuf),
}

impl WhiskerTree {
    /// Whisker tree `name` located in directory `dir`.
    pub fn in_dir(dir: &Path, name: &str) -> Self {
        Self::File(dir.join(name))
    }
}

impl fmt::Display for WhiskerTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum_macros::EnumString,
)]
/// Sending agents known to the simulator.
pub enum Transport {
    #[strum(serialize = "TCP/Rational")]
    Rational,
    #[strum(serialize = "TCP/Linux/cubic")]
    Cubic,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum_macros::EnumString,
)]
/// Receiving agents known to the simulator.
pub enum Sink {
    #[strum(serialize = "TCPSink/Sack1")]
    Sack1,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum_macros::EnumString,
)]
/// Queueing discipline at the bottleneck gateway.
pub enum Queue {
    DropTail,
    /// Stochastic fair queueing with CoDel in each bin.
    #[strum(serialize = "sfqCoDel")]
    SfqCoDel,
}

/// Protocol flags of one simulation: `-tcp <transport> -sink <sink> -gw <queue>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TcpAgent {
    pub tcp: Transport,
    pub sink: Sink,
    pub gw: Queue,
}

impl TcpAgent {
    pub const RATIONAL: Self = Self {
        tcp: Transport::Rational,
        sink: Sink::Sack1,
        gw: Queue::DropTail,
    };
    pub const CUBIC: Self = Self {
        tcp: Transport::Cubic,
        sink: Sink::Sack1,
        gw: Queue::DropTail,
    };
    pub const CUBIC_SFQ_CODEL: Self = Self {
        tcp: Transport::Cubic,
        sink: Sink::Sack1,
        gw: Queue::SfqCoDel,
    };
}

impl fmt::Display for TcpAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-tcp {} -sink {} -gw {}", self.tcp, self.sink, self.gw)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum_macros::EnumString,
)]
/// How the length of an on period is measured.
pub enum OnType {
    #[strum(serialize = "time")]
    Time,
    #[strum(serialize = "bytes")]
    Bytes,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum_macros::EnumString,
)]
/// Distribution of on and off periods.
pub enum Distribution {
    Exponential,
    Pareto,
    Uniform,
}

/// On/off traffic pattern of every sender.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrafficWorkload {
    pub on_type: OnType,
    pub on_rand: Distribution,
    /// Average on period (seconds or bytes, depending on `on_type`)
    pub on_avg: f64,
    pub off_rand: Distribution,
}

impl Default for TrafficWorkload {
    fn default() -> Self {
        Self {
            on_type: OnType::Time,
            on_rand: Distribution::Exponential,
            on_avg: 1.0,
            off_rand: Distribution::Exponential,
        }
    }
}

impl fmt::Display for TrafficWorkload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "-ontype {} -onrand {} -onavg {} -offrand {}",
            self.on_type,
            self.on_rand,
            fmt_float(self.on_avg),
            self.off_rand
        )
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_agent_flags() {
        assert_eq!(
            TcpAgent::RATIONAL.to_string(),
            "-tcp TCP/Rational -sink TCPSink/Sack1 -gw DropTail"
        );
        assert_eq!(
            TcpAgent::CUBIC.to_string(),
            "-tcp TCP/Linux/cubic -sink TCPSink/Sack1 -gw DropTail"
        );
        assert_eq!(
            TcpAgent::CUBIC_SFQ_CODEL.to_string(),
            "-tcp TCP/Linux/cubic -sink TCPSink/Sack1 -gw sfqCoDel"
        );
    }

    #[test]
    fn test_workload_flags() {
        assert_eq!(
            TrafficWorkload::default().to_string(),
            "-ontype time -onrand Exponential -onavg 1.0 -offrand Exponential"
        );
        let workload = TrafficWorkload {
            on_type: OnType::Bytes,
            on_rand: Distribution::Pareto,
            on_avg: 100000.0,
            off_rand: Distribution::Uniform,
        };
        assert_eq!(
            workload.to_string(),
            "-ontype bytes -onrand Pareto -onavg 100000.0 -offrand Uniform"
        );
    }

    #[test]
    fn test_names_roundtrip() {
        assert_eq!(Transport::from_str("TCP/Linux/cubic").unwrap(), Transport::Cubic);
        assert_eq!(Queue::from_str("sfqCoDel").unwrap(), Queue::SfqCoDel);
        assert_eq!(OnType::from_str("time").unwrap(), OnType::Time);
        assert!(Queue::from_str("RED").is_err());
        for queue in Queue::iter() {
            assert_eq!(Queue::from_str(&queue.to_string()).unwrap(), queue);
        }
        for dist in Distribution::iter() {
            assert_eq!(Distribution::from_str(&dist.to_string()).unwrap(), dist);
        }
    }

    #[test]
    fn test_whiskers() {
        assert_eq!(WhiskerTree::Null.to_string(), "NULL");
        assert_eq!(
            WhiskerTree::in_dir(Path::new("/home/remy"), "muxing2.dna.2").to_string(),
            "/home/remy/muxing2.dna.2"
        );
    }

    #[test]
    fn test_tag() {
        let scenario = Scenario {
            name: "cubic-num_senders".to_string(),
            whiskers: WhiskerTree::Null,
            agent: TcpAgent::CUBIC,
        };
        assert_eq!(scenario.tag(42), "cubic-num_senders42");
    }
}
