// Crate root: declare modules and control visibility
pub mod asm_extract;
pub mod blob;
pub mod cli;
pub mod common;
pub mod trace;

// Re-export commonly used API from the library for binaries/tests
pub use asm_extract::{extract_blocks, ExtractError, OutputMode};
pub use blob::generate_header;
pub use trace::{DisassemblyTable, TraceAnnotator};
