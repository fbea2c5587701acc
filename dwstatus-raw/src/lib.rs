//! # dwstatus-raw
//!
//! Hardware register field definitions for DecaWave UWB transceivers.
//!
//! This crate provides the pure decoding core: declarative field tables that
//! map register bit positions to named fields, and a decoder that walks the
//! asserted bits of a raw register value in ascending position order. There
//! is no device I/O here; raw values come from logs, a debugger, or a driver.
//!
//! ## Features
//!
//! Select the target chip via feature flags:
//! - `dw1000` (default) - DW1000 register definitions
//!
//! ## Usage
//!
//! ```ignore
//! use dwstatus_raw::current_chip::sys_status::SYS_STATUS;
//!
//! for bit in SYS_STATUS.decode(0x400000001) {
//!     println!("{:<3} {}", bit.position, bit.short_name);
//! }
//! ```

pub mod chip;
pub mod decode;
pub mod field;

// Re-export for convenience
pub use decode::{AssertedBits, DecodedBit, RESERVED_DESCRIPTION, RESERVED_MARKER};
pub use field::{FieldDefinition, FieldTable, TableError};

// Export current chip based on feature flag
#[cfg(feature = "dw1000")]
pub use chip::dw1000 as current_chip;
