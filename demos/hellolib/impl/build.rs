fn main() {
    // Writes guard_symbols.rs into OUT_DIR,with the version token
    // taken from this crate's Cargo.toml.
    version_guard::codegen::emit_guard_symbols("hellolib")
        .unwrap_or_else(|e| panic!("could not generate the guard symbols: {}", e));
}
