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

//! Asm extractor: pulls `@EncodeAsm` blocks out of annotated sources into
//! standalone `.S` files.

pub mod blocks;
pub mod outputs;
pub mod run;

pub use blocks::{extract_blocks, AsmBlock, ExtractError};
pub use outputs::{
    extract, list_outputs, output_path, render_listing, write_listing, write_outputs, OutputMode,
};
