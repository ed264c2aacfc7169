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

/// Line-by-line annotation of an execution trace against a disassembly table.
///
/// Lines are handled as raw bytes so that whatever else the simulator printed
/// into the trace (UART output and the like) passes through unchanged.
use crate::common::utils::trim_line_ending;
use crate::trace::dump::DisassemblyTable;
use anyhow::Result;
use regex::bytes::Regex;
use std::io::{self, BufRead, Write};

/// Printed in place of a function name when an address has no preceding label.
pub const UNKNOWN_FUNCTION: &str = "<unknown>";

pub struct TraceAnnotator<'a> {
    table: &'a DisassemblyTable,
    // Function the previous trace record was attributed to. None until the
    // first record resolves, and again after falling outside every function.
    current: Option<String>,
    re_trace: Regex,
}

impl<'a> TraceAnnotator<'a> {
    pub fn new(table: &'a DisassemblyTable) -> Result<Self> {
        Ok(Self {
            table,
            current: None,
            re_trace: Regex::new(r"^\s*([0-9A-Fa-f]+):")?,
        })
    }

    pub fn current_function(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Leading address of a trace record, if `line` is one.
    pub fn trace_address(&self, line: &[u8]) -> Option<u64> {
        let caps = self.re_trace.captures(line)?;
        let hex = std::str::from_utf8(&caps[1]).ok()?;
        u64::from_str_radix(hex, 16).ok()
    }

    /// Annotate a single line (without its terminator) and write the result,
    /// newline terminated, to `out`.
    pub fn annotate_line<W: Write>(&mut self, line: &[u8], out: &mut W) -> io::Result<()> {
        let Some(addr) = self.trace_address(line) else {
            out.write_all(line)?;
            return out.write_all(b"\n");
        };

        let table = self.table;
        if let Some(name) = table.function_at(addr) {
            writeln!(out, "Calling function {}", name)?;
            self.current = Some(name.to_string());
        } else {
            let resolved = table.enclosing_function(addr);
            if resolved != self.current.as_deref() {
                writeln!(
                    out,
                    "Returning to function {}",
                    resolved.unwrap_or(UNKNOWN_FUNCTION)
                )?;
                self.current = resolved.map(str::to_string);
            }
        }

        out.write_all(line)?;
        match table.instruction_at(addr) {
            Some(instr) => write!(out, "\t\tfrom source: {}\t{}", instr.bytes, instr.source)?,
            None => write!(out, "\t\t from unknown source disasm")?,
        }
        writeln!(out)
    }

    /// Annotate every line of `input`. One line terminator (LF or CRLF) is
    /// taken off each line and every output record ends in a single LF.
    pub fn annotate<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<u64> {
        let mut buf: Vec<u8> = Vec::with_capacity(1024);
        let mut count = 0;
        loop {
            buf.clear();
            let n = input.read_until(b'\n', &mut buf)?;
            if n == 0 {
                break;
            }
            trim_line_ending(&mut buf);
            self.annotate_line(&buf, out)?;
            count += 1;
        }
        out.flush()?;
        Ok(count)
    }
}
