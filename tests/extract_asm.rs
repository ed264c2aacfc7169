use grim_devtools::asm_extract::{
    extract, list_outputs, write_listing, write_outputs, ExtractError, OutputMode,
};
use std::fs;
use std::path::{Path, PathBuf};

const SOURCE: &str = r#"#include <gtest/gtest.h>
#include <HartFixture.hpp>

/* @EncodeAsm: InstructionLUI.rv32gc
    lui a0, 0x12345
    ret
*/
TEST_F(HartFixture, Lui) {}

/* @EncodeAsm: InstructionLUI.rv64gc
    lui a0, 0x80000
*/
"#;

fn write_source(dir: &tempfile::TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn writes_one_file_per_block() {
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let input = write_source(&src, "lui.cpp", SOURCE);

    let paths = write_outputs(&[input], out.path()).unwrap();
    assert_eq!(
        paths,
        vec![
            out.path().join("InstructionLUI.rv32gc.S"),
            out.path().join("InstructionLUI.rv64gc.S"),
        ]
    );
    assert_eq!(
        fs::read_to_string(&paths[0]).unwrap(),
        "    lui a0, 0x12345\n    ret\n"
    );
    assert_eq!(fs::read_to_string(&paths[1]).unwrap(), "    lui a0, 0x80000\n");
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 2);
}

#[test]
fn listing_mode_writes_nothing() {
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let a = write_source(&src, "a.cpp", SOURCE);
    let b = write_source(&src, "b.cpp", "/* @EncodeAsm: j0.rv32gc\nj 0\n*/\n");

    let paths = extract(&[a, b], out.path(), OutputMode::ListNames).unwrap();
    assert_eq!(paths.len(), 3);
    assert_eq!(paths[2], out.path().join("j0.rv32gc.S"));
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn unterminated_block_aborts_after_earlier_blocks() {
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let text = "/* @EncodeAsm: good\nnop\n*/\n/* @EncodeAsm: bad\nnop\n";
    let input = write_source(&src, "broken.cpp", text);

    let err = write_outputs(&[input.clone()], out.path()).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ExtractError>(),
        Some(&ExtractError::Unterminated {
            name: "bad".to_string(),
            line: 4
        })
    );
    assert!(out.path().join("good.S").exists());
    assert!(!out.path().join("bad.S").exists());

    assert!(list_outputs(&[input], out.path()).is_err());
}

#[test]
fn empty_name_aborts_the_run() {
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let first = write_source(&src, "first.cpp", "/* @EncodeAsm: \nnop\n*/\n");
    let second = write_source(&src, "second.cpp", SOURCE);

    let err = write_outputs(&[first, second], out.path()).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ExtractError>(),
        Some(&ExtractError::EmptyName { line: 1 })
    );
    assert!(format!("{:#}", err).contains("first.cpp"));
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn missing_input_is_an_error() {
    let out = tempfile::tempdir().unwrap();
    let missing = out.path().join("nope.cpp");
    assert!(write_outputs(&[missing], out.path()).is_err());
}

#[test]
fn listing_prints_space_separated_names() {
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let a = write_source(&src, "a.cpp", SOURCE);
    let gen_dir = out.path().join("gen");

    let mut printed = Vec::new();
    write_listing(&[a], &gen_dir, &mut printed).unwrap();
    let dir = gen_dir.to_string_lossy().replace('\\', "/");
    assert_eq!(
        String::from_utf8(printed).unwrap(),
        format!("{dir}/InstructionLUI.rv32gc.S {dir}/InstructionLUI.rv64gc.S\n")
    );
    assert!(!out.path().join("gen").exists());
}

#[test]
fn listing_in_current_dir_has_bare_names() {
    let src = tempfile::tempdir().unwrap();
    let b = write_source(&src, "b.cpp", "/* @EncodeAsm: j0.rv32gc\nj 0\n*/\n");

    let mut printed = Vec::new();
    write_listing(&[b], Path::new("."), &mut printed).unwrap();
    assert_eq!(String::from_utf8(printed).unwrap(), "j0.rv32gc.S\n");
}

#[test]
fn listing_prints_nothing_on_malformed_input() {
    let src = tempfile::tempdir().unwrap();
    let good = write_source(&src, "good.cpp", SOURCE);
    let bad = write_source(&src, "bad.cpp", "/* @EncodeAsm: open\nnop\n");

    let mut printed = Vec::new();
    assert!(write_listing(&[good, bad], Path::new("."), &mut printed).is_err());
    assert!(printed.is_empty());
}
