// src/lib.rs

//! Workspace facade over [`countrypicker_core`], used by the demos.

pub use countrypicker_core::*;
