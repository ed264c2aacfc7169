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

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use super::blocks::extract_blocks;
use crate::common::utils::posix_path;

pub const ASM_EXTENSION: &str = "S";

/// How a run treats the blocks it finds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Write each block to `<output_dir>/<name>.S`.
    Write,
    /// Only report the paths that `Write` would produce. Build systems use
    /// this to learn the generated file names before they exist.
    ListNames,
}

/// `<output_dir>/<name>.S`. A leading `.` in `output_dir` is dropped, so the
/// default directory yields bare `name.S`.
pub fn output_path(output_dir: &Path, name: &str) -> PathBuf {
    let dir: PathBuf = output_dir
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    dir.join(format!("{}.{}", name, ASM_EXTENSION))
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Paths of every block in `inputs`, in order. Fails on the first malformed
/// block without touching the filesystem.
pub fn list_outputs(inputs: &[PathBuf], output_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for input in inputs {
        let code = read_source(input)?;
        for block in extract_blocks(&code) {
            let block = block.with_context(|| format!("Malformed block in {}", input.display()))?;
            paths.push(output_path(output_dir, block.name));
        }
    }
    Ok(paths)
}

/// Write every block in `inputs` to its own file. Blocks ahead of a malformed
/// one have already been written when the error is returned.
pub fn write_outputs(inputs: &[PathBuf], output_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for input in inputs {
        let code = read_source(input)?;
        for block in extract_blocks(&code) {
            let block = block.with_context(|| format!("Malformed block in {}", input.display()))?;
            let path = output_path(output_dir, block.name);
            fs::write(&path, block.body)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Writing {}.{} into {}", block.name, ASM_EXTENSION, path.display());
            paths.push(path);
        }
    }
    Ok(paths)
}

/// Space separated, newline terminated list of output paths.
pub fn render_listing(paths: &[PathBuf]) -> String {
    let names: Vec<String> = paths.iter().map(|p| posix_path(p)).collect();
    format!("{}\n", names.join(" "))
}

/// Listing mode as seen by a build system: every path on one line, or
/// nothing at all if any input has a malformed block.
pub fn write_listing<W: Write>(inputs: &[PathBuf], output_dir: &Path, out: &mut W) -> Result<()> {
    let paths = list_outputs(inputs, output_dir)?;
    out.write_all(render_listing(&paths).as_bytes())?;
    out.flush()?;
    Ok(())
}

pub fn extract(inputs: &[PathBuf], output_dir: &Path, mode: OutputMode) -> Result<Vec<PathBuf>> {
    match mode {
        OutputMode::Write => write_outputs(inputs, output_dir),
        OutputMode::ListNames => list_outputs(inputs, output_dir),
    }
}
