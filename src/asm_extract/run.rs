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

//! Entry point for the extract-asm subcommand.

use anyhow::Result;
use clap::Args;
use std::io;
use std::path::PathBuf;

use super::outputs::{write_listing, write_outputs, OutputMode};

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Input files to extract the @EncodeAsm blocks from
    #[arg(required = true)]
    pub input_files: Vec<PathBuf>,

    /// Path to the output directory (also accepted as -od)
    #[arg(long = "output_dir", visible_alias = "output-dir", default_value = ".")]
    pub output_dir: PathBuf,

    /// Print the names of the files that would be extracted instead of writing them
    #[arg(short = 'n', long = "filenames", default_value_t = false)]
    pub filenames: bool,
}

impl ExtractArgs {
    pub fn mode(&self) -> OutputMode {
        if self.filenames {
            OutputMode::ListNames
        } else {
            OutputMode::Write
        }
    }
}

pub fn run(args: ExtractArgs) -> Result<()> {
    match args.mode() {
        OutputMode::Write => {
            write_outputs(&args.input_files, &args.output_dir)?;
        }
        OutputMode::ListNames => {
            let stdout = io::stdout();
            write_listing(&args.input_files, &args.output_dir, &mut stdout.lock())?;
        }
    }
    Ok(())
}
