//! WebAssembly bindings for the nmos6502 core.
//!
//! This module provides JavaScript-callable interfaces for running a ROM
//! with a character console in the browser.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::Emulator6502;
