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

//! Entry point for the blob subcommand.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::generate_header;

#[derive(Args, Debug)]
pub struct BlobArgs {
    /// Input binary file path
    pub input_file: PathBuf,

    /// Input disassembly file path, embedded as a comment if it exists
    pub disasm_file: Option<PathBuf>,

    /// Output header file path (default: <input stem>.h)
    #[arg(short = 'o', long = "output-path")]
    pub output_path: Option<PathBuf>,
}

pub fn run(args: BlobArgs) -> Result<()> {
    generate_header(
        &args.input_file,
        args.disasm_file.as_deref(),
        args.output_path.as_deref(),
    )?;
    Ok(())
}
