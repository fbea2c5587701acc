//! DecaWave DW1000 UWB transceiver register definitions
//!
//! Field tables for the DW1000 register map. Only single-bit status fields
//! are covered; configuration registers carry multi-bit fields that do not
//! fit the one-bit field model.
//!
//! ## Registers
//!
//! - **SYS_STATUS** (file 0x0F) - System Event Status Register
//!
//! ## References
//!
//! - DW1000 User Manual, chapter 7 (The DW1000 Register Set)

pub mod sys_status;
