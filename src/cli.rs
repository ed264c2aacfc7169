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

//! Command line surface of `grim-tools`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsString;

use crate::asm_extract::run::ExtractArgs;
use crate::blob::run::BlobArgs;
use crate::common::utils::rewrite_legacy_args;
use crate::trace::run::TraceArgs;
use crate::{asm_extract, blob, trace};

/// Offline helpers for building and debugging the simulator and its test programs
#[derive(Parser, Debug)]
#[command(name = "grim-tools", version, about)]
pub struct Cli {
    /// Enable debug output
    #[arg(short = 'd', long = "debug", global = true, default_value_t = false)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a C++ header holding a binary file as a byte array
    Blob(BlobArgs),
    /// Extract @EncodeAsm blocks from source files into .S files
    ExtractAsm(ExtractArgs),
    /// Annotate an address trace with function names and disassembly
    AnnotateTrace(TraceArgs),
}

impl Cli {
    /// Parse a full argv, including the legacy `-od` spelling.
    pub fn try_parse_args<I>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = OsString>,
    {
        Self::try_parse_from(rewrite_legacy_args(args))
    }

    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Blob(args) => blob::run::run(args),
            Command::ExtractAsm(args) => asm_extract::run::run(args),
            Command::AnnotateTrace(args) => trace::run::run(args),
        }
    }
}
