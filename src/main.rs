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
use std::{fs, io, path::PathBuf};

use clap::Parser;

use sendersweep::{config::SweepConfig, experiments, util};

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Read the sweep configuration from a JSON file. Missing fields keep their default values.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Write the Makefile to this path instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Overwrite the directory containing the whisker trees (default: current directory).
    #[arg(short, long)]
    whisker_dir: Option<PathBuf>,
    /// Only synthesize the Makefile, without touching the result and topology folders.
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    util::init_logging();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SweepConfig::from_file(path)?,
        None => SweepConfig::default(),
    };
    config.apply_overrides(args.whisker_dir);

    let build = if args.dry_run {
        log::info!("Dry run, the filesystem remains untouched");
        experiments::dry_run(&config)?
    } else {
        experiments::run(&config)?
    };

    match args.output {
        Some(path) => {
            build.write_to(io::BufWriter::new(fs::File::create(&path)?))?;
            log::info!("Written {} targets to {path:?}", build.len());
        }
        None => build.write_to(io::stdout().lock())?,
    }

    Ok(())
}
