//! SYS_STATUS (System Event Status Register) field table
//!
//! SYS_STATUS is register file 0x0F of the DW1000, 5 bytes on the wire with
//! 35 meaningful bits, so a full value does not fit a 32-bit word. Bit 19 is
//! reserved.
//!
//! ## References
//!
//! - DW1000 User Manual, section 7.2.17 (System Event Status Register)

use once_cell::sync::Lazy;

use crate::field::FieldTable;

/// Register file ID of SYS_STATUS in the DW1000 register map
pub const SYS_STATUS_ID: u8 = 0x0F;

/// Length of the SYS_STATUS register file in bytes
pub const SYS_STATUS_LEN: usize = 5;

/// Highest meaningful bit of SYS_STATUS, inclusive
pub const SYS_STATUS_MAX_BIT: u32 = 34;

/// Declared SYS_STATUS fields as `(bit, short name, description)`
const SYS_STATUS_FIELDS: &[(u32, &str, &str)] = &[
    (0, "IRQS", "Interrupt Request Status"),
    (1, "CPLOCK", "Clock PLL Lock"),
    (2, "ESYNCR", "External Sync Clock Reset"),
    (3, "AAT", "Automatic Acknowledge Trigger"),
    (4, "TXFRB", "Transmit Frame Begins"),
    (5, "TXPRS", "Transmit Preamble Sent"),
    (6, "TXPHS", "Transmit PHY Header Sent"),
    (7, "TXFRS", "Transmit Frame Sent"),
    (8, "RXPRD", "Receiver Preamble Detected"),
    (9, "RXSFDD", "Receiver Start Frame Delimiter Detected"),
    (10, "LDEDONE", "LDE processing done"),
    (11, "RXPHD", "Receiver PHY Header Detect"),
    (12, "RXPHE", "Receiver PHY Header Error"),
    (13, "RXDFR", "Receiver Data Frame Ready"),
    (14, "RXFCG", "Receiver FCS Good"),
    (15, "RXFCE", "Receiver FCS Error"),
    (16, "RXRFSL", "Receiver Reed Solomon Frame Sync Loss"),
    (17, "RXRFTO", "Receiver Frame Wait Timeout"),
    (18, "LDEERR", "Leading edge detection processing error"),
    (20, "RXOVRR", "Receiver Overrun"),
    (21, "RXPTO", "Preamble detection timeout"),
    (22, "GPIOIRQ", "GPIO interrupt"),
    (23, "SLP2INIT", "Sleep to Init"),
    (24, "RFPLL_LL", "RF PLL Losing Lock"),
    (25, "CLKPLL_LL", "Clock PLL Losing Lock"),
    (26, "RXSFDTO", "Receive SFD timeout"),
    (27, "HPDWARN", "Half Period Delay Warning"),
    (28, "TXBERR", "Transmit Buffer Error"),
    (29, "AFFREJ", "Automatic Frame Filter rejection"),
    (30, "HSRBP", "Host Side Receive Buffer Pointer"),
    (31, "ICRBP", "IC side Receive Buffer Pointer"),
    (32, "RXRSCS", "Receiver Reed-Solomon Correction Status"),
    (33, "RXPREJ", "Receiver Preamble Rejection"),
    (34, "TXPUTE", "Transmit Power Up Time Error"),
];

/// Shared field table for SYS_STATUS
///
/// Built on first use and immutable afterwards; concurrent decode calls may
/// share it freely.
pub static SYS_STATUS: Lazy<FieldTable> = Lazy::new(|| {
    FieldTable::new(
        "System Event Status Register",
        SYS_STATUS_MAX_BIT,
        SYS_STATUS_FIELDS,
    )
    .expect("SYS_STATUS field table is valid")
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{RESERVED_DESCRIPTION, RESERVED_MARKER};

    #[test]
    fn test_table_shape() {
        assert_eq!(SYS_STATUS.name(), "System Event Status Register");
        assert_eq!(SYS_STATUS.max_bit(), 34);
        assert_eq!(SYS_STATUS.field_count(), 34);
    }

    #[test]
    fn test_known_fields() {
        assert_eq!(SYS_STATUS.lookup(0).map(|f| f.short_name), Some("IRQS"));
        assert_eq!(SYS_STATUS.lookup(7).map(|f| f.short_name), Some("TXFRS"));
        assert_eq!(SYS_STATUS.lookup(14).map(|f| f.short_name), Some("RXFCG"));
        assert_eq!(SYS_STATUS.lookup(34).map(|f| f.short_name), Some("TXPUTE"));
        assert_eq!(
            SYS_STATUS.lookup(34).map(|f| f.description),
            Some("Transmit Power Up Time Error")
        );
    }

    #[test]
    fn test_bit_19_is_reserved() {
        assert!(SYS_STATUS.lookup(19).is_none());
        let rows: Vec<_> = SYS_STATUS.decode(1 << 19).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].short_name, RESERVED_MARKER);
        assert_eq!(rows[0].description, RESERVED_DESCRIPTION);
    }

    #[test]
    fn test_wide_value_decodes_bit_34() {
        let rows: Vec<_> = SYS_STATUS.decode(0x4_0000_0001).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].position, rows[0].short_name), (0, "IRQS"));
        assert_eq!((rows[1].position, rows[1].short_name), (34, "TXPUTE"));
    }
}
