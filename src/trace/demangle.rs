/// Demangle a symbol name taken from a dump.
///
/// Rust symbols (legacy and v0) are tried first, then Itanium C++. Anything
/// that is not a recognizable mangled name comes back unchanged.
pub fn demangle_symbol(name: &str) -> String {
    if let Ok(sym) = rustc_demangle::try_demangle(name) {
        // {:#} drops the trailing hash of legacy symbols
        return format!("{:#}", sym);
    }

    // cpp_demangle also accepts bare type encodings ("i", "f", ...), which
    // would turn short C symbols into type names.
    if name.starts_with("_Z") {
        if let Ok(sym) = cpp_demangle::Symbol::new(name) {
            if let Ok(out) = sym.demangle() {
                if !out.is_empty() {
                    return out;
                }
            }
        }
    }

    name.to_string()
}
