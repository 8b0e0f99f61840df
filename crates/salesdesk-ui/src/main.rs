//! Browser entry point of the Salesdesk console.
#![forbid(unsafe_code)]
#![deny(
    warnings,
    unused,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs
)]

#[cfg(target_arch = "wasm32")]
fn main() {
    salesdesk_ui::run_app();
}

/// Printed when the binary is started outside a browser.
#[cfg(not(target_arch = "wasm32"))]
const NATIVE_HINT: &str = "salesdesk-ui only runs in the browser: serve it with `trunk serve` or build for wasm32-unknown-unknown";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    use std::io::Write;

    writeln!(std::io::stderr().lock(), "{NATIVE_HINT}")
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_run_points_at_wasm_build() -> std::io::Result<()> {
        assert!(NATIVE_HINT.contains("wasm32-unknown-unknown"));
        main()
    }
}
