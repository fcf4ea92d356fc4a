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
use std::path::Path;

use super::scenarios::*;

/// Compare Rational senders optimized for different degrees of multiplexing against Cubic, with
/// and without sfqCoDel at the bottleneck. The whisker trees are looked up in `whisker_dir`.
pub fn list_scenarios(whisker_dir: &Path) -> [Scenario; 7] {
    let rational = |name: &str, whiskers: &str| Scenario {
        name: name.to_string(),
        whiskers: WhiskerTree::in_dir(whisker_dir, whiskers),
        agent: TcpAgent::RATIONAL,
    };
    [
        // trained for up to 2 senders
        rational("1--2senders", "muxing2.dna.2"),
        // trained for up to 10 senders
        rational("1--10senders", "muxing10-resume.dna.3"),
        // trained for up to 20 senders
        rational("1--20senders", "muxing20-resume.dna.5"),
        // trained for up to 50 senders
        rational("1--50senders", "muxing50-resume.dna.1"),
        // trained for up to 100 senders
        rational("1--100senders", "muxing100-resume.dna.0"),
        Scenario {
            name: "cubicsfqCoDel-num_senders".to_string(),
            whiskers: WhiskerTree::Null,
            agent: TcpAgent::CUBIC_SFQ_CODEL,
        },
        Scenario {
            name: "cubic-num_senders".to_string(),
            whiskers: WhiskerTree::Null,
            agent: TcpAgent::CUBIC,
        },
    ]
}
