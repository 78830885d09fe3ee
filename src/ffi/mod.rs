// src/ffi/mod.rs

// Conditionally compile wasm_ffi module only for wasm32 target
#[cfg(target_arch = "wasm32")]
pub mod wasm_ffi;
