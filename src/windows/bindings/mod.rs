//! Windows API bindings
//!
//! Low-level FFI binding to the display configuration functions of user32.

pub mod user32;

pub use user32::Win32DisplayConfig;
