//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `bookstock_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("bookstock_core ping={}", bookstock_core::ping());
    println!("bookstock_core version={}", bookstock_core::core_version());
}
