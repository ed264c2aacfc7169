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

//! Trace annotator: attributes each traced address to its enclosing function
//! and the instruction recorded for it in a disassembly dump.
//! Runs behind the `annotate-trace` subcommand.

pub mod annotate;
pub mod demangle;
pub mod dump;
pub mod run;

pub use annotate::{TraceAnnotator, UNKNOWN_FUNCTION};
pub use dump::{DisassemblyTable, DumpInstruction};
