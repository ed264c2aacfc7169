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

//! Lookup tables built from an objdump style listing.
//!
//! A listing interleaves two kinds of lines we care about:
//!
//! ```text
//! 0000000080000000 <_start>:
//!     80000000:	00000513          	li	a0,0
//! ```
//!
//! The first is a label (function entry), the second an instruction with its
//! encoding and disassembled text. Everything else (section headers, blank
//! lines, "..." elisions) is ignored.
//!
//! The table is built once, before any trace line is looked at, and is only
//! read afterwards.

use crate::common::utils::trim_line_ending;
use anyhow::{Context, Result};
use log::debug;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Encoding and disassembly recorded for one address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpInstruction {
    pub address: u64,
    pub bytes: String,
    pub source: String,
}

impl DumpInstruction {
    pub fn new(address: u64, bytes: String, source: String) -> Self {
        Self {
            address,
            bytes,
            source,
        }
    }
}

pub struct DisassemblyTable {
    // Function entry address -> symbol name. Ordered so the enclosing
    // function is a predecessor query.
    functions: BTreeMap<u64, String>,
    instructions: BTreeMap<u64, DumpInstruction>,
}

impl Default for DisassemblyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl DisassemblyTable {
    pub fn new() -> Self {
        Self {
            functions: BTreeMap::new(),
            instructions: BTreeMap::new(),
        }
    }

    /// Read and parse a dump file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open dump file {}", path.display()))?;
        Self::from_reader(BufReader::with_capacity(64 * 1024, file))
            .with_context(|| format!("Failed to read dump file {}", path.display()))
    }

    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self> {
        let re_label = Regex::new(r"^([0-9A-Fa-f]+)\s+<(.*)>")?;
        let re_instr = Regex::new(r"^\s*([0-9A-Fa-f]+):\s+([0-9A-Fa-f]+)(.*)")?;

        let mut table = Self::new();
        let mut buf: Vec<u8> = Vec::with_capacity(8 * 1024);
        loop {
            buf.clear();
            let n = reader.read_until(b'\n', &mut buf)?;
            if n == 0 {
                break; // EOF
            }
            trim_line_ending(&mut buf);

            let line = String::from_utf8_lossy(&buf);
            let s: &str = line.as_ref();

            // A line is checked against both patterns, same as a listing
            // reader would; in practice at most one of them matches.
            if let Some(caps) = re_label.captures(s) {
                if let Ok(addr) = u64::from_str_radix(&caps[1], 16) {
                    table.insert_function(addr, caps[2].to_string());
                }
            }
            if let Some(caps) = re_instr.captures(s) {
                if let Ok(addr) = u64::from_str_radix(&caps[1], 16) {
                    table.insert_instruction(DumpInstruction::new(
                        addr,
                        caps[2].trim().to_string(),
                        caps[3].trim().to_string(),
                    ));
                }
            }
        }

        debug!(
            "Dump parsed: {} functions, {} instructions",
            table.function_count(),
            table.instruction_count()
        );
        Ok(table)
    }

    /// A later label at the same address replaces the earlier one.
    pub fn insert_function(&mut self, address: u64, name: String) {
        self.functions.insert(address, name);
    }

    pub fn insert_instruction(&mut self, instr: DumpInstruction) {
        self.instructions.insert(instr.address, instr);
    }

    /// Function whose entry is exactly `address`.
    pub fn function_at(&self, address: u64) -> Option<&str> {
        self.functions.get(&address).map(String::as_str)
    }

    /// Function with the greatest entry address that is <= `address`.
    pub fn enclosing_function(&self, address: u64) -> Option<&str> {
        self.functions
            .range(..=address)
            .next_back()
            .map(|(_, name)| name.as_str())
    }

    pub fn instruction_at(&self, address: u64) -> Option<&DumpInstruction> {
        self.instructions.get(&address)
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    pub fn instruction_count(&self) -> usize {
        self.instructions.len()
    }

    /// Apply `f` to every function name, e.g. to demangle them once up front.
    pub fn map_function_names<F>(&mut self, mut f: F)
    where
        F: FnMut(&str) -> String,
    {
        for name in self.functions.values_mut() {
            *name = f(name);
        }
    }
}
