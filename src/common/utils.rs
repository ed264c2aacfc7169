use std::ffi::OsString;
use std::path::Path;

/// Render a path with forward slashes regardless of platform, the way build
/// scripts expect to see it.
pub fn posix_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Drop one line terminator (`\n` or `\r\n`) from a line read with
/// `read_until(b'\n', ..)`. Any other trailing `\r` belongs to the line.
pub fn trim_line_ending(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
}

/// Rewrite the two-letter `-od` flag of `extract-asm` into `--output_dir`.
/// Clap short flags are a single character, so `-od DIR` would otherwise be
/// read as `-o d DIR`. Arguments before the subcommand are left alone.
pub fn rewrite_legacy_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut in_extract = false;
    args.into_iter()
        .map(|arg| {
            let rewritten = match arg.to_str() {
                Some("-od") if in_extract => OsString::from("--output_dir"),
                Some(s) if in_extract && s.starts_with("-od=") => {
                    OsString::from(format!("--output_dir={}", &s[4..]))
                }
                _ => arg,
            };
            if rewritten == "extract-asm" {
                in_extract = true;
            }
            rewritten
        })
        .collect()
}
