#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Inventário Pro UI binary: mounts the app in the browser.

#[cfg(target_arch = "wasm32")]
fn main() {
    inventario_ui::run_app();
}

/// Hint printed when the binary is started outside a browser.
#[cfg(not(target_arch = "wasm32"))]
const NATIVE_HINT: &str = "inventario-ui only runs in the browser; serve it with `trunk serve` from crates/inventario-ui.";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    use std::io::Write;

    writeln!(std::io::stderr().lock(), "{NATIVE_HINT}")
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_hint_points_at_trunk() -> std::io::Result<()> {
        assert!(NATIVE_HINT.contains("trunk serve"));
        main()
    }
}
