//! Chip-specific register field tables
//!
//! Each supported transceiver has its own register map and field layouts.
//! Definitions are organized per chip and selected via feature flags.
//!
//! ## Supported Chips
//!
//! - **DW1000** (`dw1000` feature) - DecaWave DW1000 UWB transceiver

#[cfg(feature = "dw1000")]
pub mod dw1000;
