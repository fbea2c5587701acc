//! Report rendering for decoded register values
//!
//! The report mirrors the register diagram: a title line with the raw value,
//! a column header, and one row per asserted bit in ascending position
//! order. Rendering trusts the decoder and performs no validation.

use dwstatus_raw::field::FieldTable;

/// Width of the bit-position column
const BIT_COLUMN_WIDTH: usize = 6;

/// Width of the field-name column
const NAME_COLUMN_WIDTH: usize = 10;

/// Width of the horizontal rules
const RULE_WIDTH: usize = 80;

/// Hex digits shown for registers up to 32 bits wide
const MIN_HEX_DIGITS: usize = 8;

/// Number of hex digits needed to show a full value of `table`'s width
///
/// Never below 8, so narrow registers keep the familiar 32-bit padding;
/// wider registers widen the header instead of truncating the value.
pub fn hex_digits(table: &FieldTable) -> usize {
    MIN_HEX_DIGITS.max((table.width() as usize).div_ceil(4))
}

/// Render the full report for `raw` against `table`
pub fn render(table: &FieldTable, raw: u64) -> String {
    let mut out = String::new();
    let digits = hex_digits(table);

    out.push_str(&format!(
        "{}: 0x{:0width$X}\n",
        table.name(),
        raw,
        width = digits
    ));
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');
    out.push_str(&format!(
        "{:<bit$}{:<name$}{}\n",
        "Bit",
        "Field",
        "Description",
        bit = BIT_COLUMN_WIDTH,
        name = NAME_COLUMN_WIDTH
    ));
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');

    for row in table.decode(raw) {
        out.push_str(&format!(
            "{:<bit$}{:<name$}{}\n",
            row.position,
            row.short_name,
            row.description,
            bit = BIT_COLUMN_WIDTH,
            name = NAME_COLUMN_WIDTH
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dwstatus_raw::current_chip::sys_status::SYS_STATUS;

    #[test]
    fn test_zero_value_renders_header_only() {
        let report = render(&SYS_STATUS, 0);
        assert!(report.starts_with("System Event Status Register: 0x000000000\n"));
        assert_eq!(report.lines().count(), 4);
    }

    #[test]
    fn test_narrow_table_keeps_32_bit_padding() {
        let table = FieldTable::new("Demo Status", 7, &[(0, "A", "Field A")]).unwrap();
        let report = render(&table, 0x1);
        assert!(report.starts_with("Demo Status: 0x00000001\n"));
    }

    #[test]
    fn test_hex_digit_widths() {
        let narrow = FieldTable::new("Narrow", 31, &[]).unwrap();
        let wide = FieldTable::new("Wide", 34, &[]).unwrap();
        assert_eq!(hex_digits(&narrow), 8);
        assert_eq!(hex_digits(&wide), 9);
    }

    #[test]
    fn test_rows_are_column_aligned() {
        let report = render(&SYS_STATUS, 0x4_0000_0001);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "System Event Status Register: 0x400000001");
        assert_eq!(lines[4], "0     IRQS      Interrupt Request Status");
        assert_eq!(lines[5], "34    TXPUTE    Transmit Power Up Time Error");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_reserved_bit_rendered_with_marker() {
        let report = render(&SYS_STATUS, 1 << 19);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[4], "19    -         Reserved");
    }

    #[test]
    fn test_render_is_deterministic() {
        let first = render(&SYS_STATUS, 0x2001F);
        let second = render(&SYS_STATUS, 0x2001F);
        assert_eq!(first, second);
    }
}
