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
//! Module accumulating the Makefile that executes all simulation runs.

use std::{
    fmt,
    io::{self, Write},
};

use crate::experiments::RunDescription;

/// Append-only collection of build targets, each with a single-line recipe. Targets are kept in
/// the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildFile {
    rules: Vec<(String, String)>,
}

impl BuildFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `target`, built by executing `recipe`.
    pub fn add_rule(&mut self, target: impl Into<String>, recipe: impl Into<String>) {
        self.rules.push((target.into(), recipe.into()));
    }

    /// Register the target of a simulation run. The target is the file receiving the stdout of
    /// the simulator, and the recipe is the command line.
    pub fn synthesize(&mut self, run: &RunDescription) {
        self.add_rule(run.target(), run.command_line());
    }

    /// Iterate over all target names.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(t, _)| t.as_str())
    }

    /// Iterate over all `(target, recipe)` pairs.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|(t, r)| (t.as_str(), r.as_str()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Write the build file to `w`.
    pub fn write_to(&self, mut w: impl Write) -> io::Result<()> {
        write!(w, "{}", self)?;
        w.flush()
    }
}

impl Extend<RunDescription> for BuildFile {
    fn extend<I: IntoIterator<Item = RunDescription>>(&mut self, iter: I) {
        iter.into_iter().for_each(|run| self.synthesize(&run));
    }
}

/// The first line is the `all` target depending on every other target, followed by one rule per
/// target. Every target on the `all` line is prefixed with a space, and the line ends in a space.
impl fmt::Display for BuildFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("all: ")?;
        for target in self.targets() {
            write!(f, " {target}")?;
        }
        f.write_str(" ")?;
        for (target, recipe) in self.rules() {
            write!(f, "\n{target}:\n\t{recipe}")?;
        }
        writeln!(f)
    }
}
