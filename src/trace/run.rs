// Copyright (c) 2026 Grim Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Entry point for the annotate-trace subcommand.

use anyhow::{Context, Result};
use clap::Args;
use log::info;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use super::demangle::demangle_symbol;
use super::{DisassemblyTable, TraceAnnotator};

#[derive(Args, Debug)]
pub struct TraceArgs {
    /// Disassembly dump (objdump -d output) used as the lookup table
    pub dump_file: PathBuf,

    /// Trace to annotate; read from stdin when omitted
    pub trace_file: Option<PathBuf>,

    /// Demangle C++ and Rust function names from the dump
    #[arg(long = "demangle", default_value_t = false)]
    pub demangle: bool,
}

pub fn run(args: TraceArgs) -> Result<()> {
    let now = Instant::now();
    let mut table = DisassemblyTable::load(&args.dump_file)?;
    if args.demangle {
        table.map_function_names(demangle_symbol);
    }
    info!(
        "Dump loaded: {} functions, {} instructions in {:.2?}",
        table.function_count(),
        table.instruction_count(),
        now.elapsed()
    );

    let input: Box<dyn BufRead> = match &args.trace_file {
        Some(path) => Box::new(BufReader::new(
            File::open(path)
                .with_context(|| format!("Failed to open trace file {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut annotator = TraceAnnotator::new(&table)?;
    let count = annotator
        .annotate(input, &mut out)
        .context("Failed to annotate trace")?;
    info!("Annotated {} trace lines", count);
    Ok(())
}
