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

//! Scanner for `@EncodeAsm` blocks embedded in source comments:
//!
//! ```text
//! /* @EncodeAsm: InstructionLUI.rv32gc
//!     lui a0, 0x12345
//!     ret
//! */
//! ```
//!
//! The name is the rest of the start marker's line, the body everything from
//! the next line up to (not including) the first `*/`. Blocks do not nest.

use thiserror::Error;

pub const START_MARKER: &str = "/* @EncodeAsm: ";
pub const END_MARKER: &str = "*/";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Empty name in @EncodeAsm block at line {line}")]
    EmptyName { line: usize },

    #[error("Unterminated @EncodeAsm block `{name}` starting at line {line}")]
    Unterminated { name: String, line: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsmBlock<'a> {
    pub name: &'a str,
    pub body: &'a str,
    /// 1-based line of the start marker
    pub line: usize,
}

/// Lazily yields the blocks of a source text in order. The first malformed
/// block is reported as an error and ends the iteration.
pub struct AsmBlocks<'a> {
    code: &'a str,
    pos: usize,
    done: bool,
}

pub fn extract_blocks(code: &str) -> AsmBlocks<'_> {
    AsmBlocks {
        code,
        pos: 0,
        done: false,
    }
}

fn line_number(code: &str, offset: usize) -> usize {
    code[..offset].matches('\n').count() + 1
}

impl<'a> AsmBlocks<'a> {
    fn fail(&mut self, err: ExtractError) -> Option<Result<AsmBlock<'a>, ExtractError>> {
        self.done = true;
        Some(Err(err))
    }
}

impl<'a> Iterator for AsmBlocks<'a> {
    type Item = Result<AsmBlock<'a>, ExtractError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let code = self.code;

        let Some(rel) = code[self.pos..].find(START_MARKER) else {
            self.done = true;
            return None;
        };
        let marker_at = self.pos + rel;
        let line = line_number(code, marker_at);

        let name_start = marker_at + START_MARKER.len();
        let (raw_name, body_start) = match code[name_start..].find('\n') {
            Some(nl) => (&code[name_start..name_start + nl], name_start + nl + 1),
            None => (&code[name_start..], code.len()),
        };
        let name = raw_name.trim();
        if name.is_empty() {
            return self.fail(ExtractError::EmptyName { line });
        }

        let Some(end_rel) = code[body_start..].find(END_MARKER) else {
            return self.fail(ExtractError::Unterminated {
                name: name.to_string(),
                line,
            });
        };
        let body_end = body_start + end_rel;
        self.pos = body_end + END_MARKER.len();

        Some(Ok(AsmBlock {
            name,
            body: &code[body_start..body_end],
            line,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_blocks_in_order() {
        let code = "#include <x>\n\
                    /* @EncodeAsm: first\n    li a0, 1\n*/\n\
                    int x;\n\
                    /* @EncodeAsm: second.rv64gc\r\n    ret\n    */ tail\n";
        let blocks: Vec<_> = extract_blocks(code).collect::<Result<_, _>>().unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].name, "first");
        assert_eq!(blocks[0].body, "    li a0, 1\n");
        assert_eq!(blocks[0].line, 2);
        assert_eq!(blocks[1].name, "second.rv64gc");
        assert_eq!(blocks[1].body, "    ret\n    ");
        assert_eq!(blocks[1].line, 6);
    }

    #[test]
    fn names_keep_inner_spaces() {
        let code = "/* @EncodeAsm: a.rv32gc a.rv64gc\nnop\n*/";
        let block = extract_blocks(code).next().unwrap().unwrap();
        assert_eq!(block.name, "a.rv32gc a.rv64gc");
    }

    #[test]
    fn start_marker_inside_block_is_body_text() {
        let code = "/* @EncodeAsm: outer\n/* @EncodeAsm: inner\nnop\n*/\n*/\n";
        let blocks: Vec<_> = extract_blocks(code).collect::<Result<_, _>>().unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name, "outer");
        assert_eq!(blocks[0].body, "/* @EncodeAsm: inner\nnop\n");
    }

    #[test]
    fn empty_name_is_an_error() {
        let code = "/* @EncodeAsm: ok\nnop\n*/\n\n/* @EncodeAsm:    \nnop\n*/\n";
        let mut it = extract_blocks(code);
        assert!(it.next().unwrap().is_ok());
        assert_eq!(it.next(), Some(Err(ExtractError::EmptyName { line: 5 })));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn unterminated_block_is_an_error() {
        let code = "/* @EncodeAsm: open\nnop\n";
        let mut it = extract_blocks(code);
        assert_eq!(
            it.next(),
            Some(Err(ExtractError::Unterminated {
                name: "open".to_string(),
                line: 1
            }))
        );
        assert_eq!(it.next(), None);
    }

    #[test]
    fn plain_comments_are_ignored() {
        let code = "/* regular comment */\n// @EncodeAsm: not a block\n";
        assert_eq!(extract_blocks(code).count(), 0);
    }
}
