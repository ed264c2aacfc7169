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
use log::{debug, info};
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of headers written when no output path is given.
pub const HEADER_EXTENSION: &str = "h";

/// Array identifier for a binary: file stem + `_bytes`, dots turned into
/// underscores so `boot.rv64.bin` becomes `boot_rv64_bytes`.
pub fn variable_name(bin_path: &Path) -> String {
    let stem = bin_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}_bytes", stem).replace('.', "_")
}

/// `<stem>.h` in the current directory.
pub fn default_header_path(bin_path: &Path) -> PathBuf {
    // Not with_extension: that would eat the inner ".rv64" of "boot.rv64".
    let mut name = bin_path.file_stem().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(HEADER_EXTENSION);
    PathBuf::from(name)
}

/// Render the header text.
///
/// ```text
/// #pragma once
/// /*
///  * <disassembly line>
///  */
/// const unsigned char name_bytes[] = {0x13, 0x05, 0x00, 0x00};
/// ```
///
/// The comment block is only present when a listing is given.
pub fn render_header(variable: &str, bytes: &[u8], disasm: Option<&str>) -> String {
    // "0xAB, " per byte
    let mut out = String::with_capacity(bytes.len() * 6 + 64);
    out.push_str("#pragma once\n");

    if let Some(listing) = disasm {
        out.push_str("/*\n");
        for line in listing.lines() {
            let _ = writeln!(out, " * {}", line);
        }
        out.push_str(" */\n");
    }

    let _ = write!(out, "const unsigned char {}[] = {{", variable);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "0x{:02X}", byte);
    }
    out.push_str("};\n");
    out
}

/// Read `bin_path` (and `disasm_path` when it exists), write the header and
/// return the path written.
pub fn generate_header(
    bin_path: &Path,
    disasm_path: Option<&Path>,
    header_path: Option<&Path>,
) -> Result<PathBuf> {
    let bytes = fs::read(bin_path)
        .with_context(|| format!("Failed to read binary file {}", bin_path.display()))?;

    let disasm = match disasm_path {
        Some(path) if path.exists() => Some(
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read disassembly file {}", path.display()))?,
        ),
        Some(path) => {
            debug!("Disassembly file {} not found, omitting listing", path.display());
            None
        }
        None => None,
    };

    let header_path = header_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_header_path(bin_path));
    let variable = variable_name(bin_path);
    let text = render_header(&variable, &bytes, disasm.as_deref());

    fs::write(&header_path, text)
        .with_context(|| format!("Failed to write header {}", header_path.display()))?;
    info!(
        "Wrote {} ({} bytes) to {}",
        variable,
        bytes.len(),
        header_path.display()
    );
    Ok(header_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_name_replaces_dots() {
        assert_eq!(variable_name(Path::new("out/boot.rv64.bin")), "boot_rv64_bytes");
        assert_eq!(variable_name(Path::new("firmware")), "firmware_bytes");
    }

    #[test]
    fn default_path_uses_stem() {
        assert_eq!(
            default_header_path(Path::new("build/boot.rv64.bin")),
            PathBuf::from("boot.rv64.h")
        );
    }

    #[test]
    fn renders_without_listing() {
        let text = render_header("x_bytes", &[0x00, 0xab, 0x7f], None);
        assert_eq!(
            text,
            "#pragma once\nconst unsigned char x_bytes[] = {0x00, 0xAB, 0x7F};\n"
        );
    }

    #[test]
    fn renders_listing_as_comment() {
        let text = render_header("x_bytes", &[0x13], Some("a:\n  li a0,0"));
        assert_eq!(
            text,
            "#pragma once\n/*\n * a:\n *   li a0,0\n */\nconst unsigned char x_bytes[] = {0x13};\n"
        );
    }

    #[test]
    fn empty_binary_has_empty_initializer() {
        let text = render_header("e_bytes", &[], None);
        assert!(text.ends_with("const unsigned char e_bytes[] = {};\n"));
    }
}
