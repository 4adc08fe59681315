//! Browser-facing helpers shared by pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each helper owns one piece of `web-sys` glue behind the `csr` feature and
//! degrades to a no-op on native builds, which keeps the rest of the crate
//! testable with plain `cargo test`.

pub mod notify;
pub mod storage;
pub mod theme;
