fn main() {
    version_guard::codegen::emit_guard_symbols("guard_testlib")
        .unwrap_or_else(|e| panic!("could not generate the guard symbols: {}", e));
}
