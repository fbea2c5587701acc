//! Generic register field table abstractions
//!
//! A [`FieldTable`] maps bit positions of a hardware status register to named
//! fields. Tables are built once at startup and shared read-only afterwards;
//! every declaration is validated at construction time so that decoding
//! itself can never fail.

use std::collections::BTreeMap;

pub type Result<T> = std::result::Result<T, TableError>;

/// Errors raised while building a field table
///
/// These are programmer errors in a table declaration. They surface when the
/// table is constructed, never during decoding.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("register {register} declares {width} bits, more than the 64-bit storage word")]
    WidthTooLarge { register: &'static str, width: u64 },

    #[error("register {register} declares field {name} at bit {bit}, above the highest bit {max_bit}")]
    BitOutOfRange {
        register: &'static str,
        name: &'static str,
        bit: u32,
        max_bit: u32,
    },

    #[error("register {register} declares bit {bit} twice: {existing} and {duplicate}")]
    DuplicateBit {
        register: &'static str,
        bit: u32,
        existing: &'static str,
        duplicate: &'static str,
    },

    #[error("register {register} declares an unnamed field at bit {bit}")]
    EmptyName { register: &'static str, bit: u32 },
}

/// Name and description attached to one bit position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefinition {
    /// Short mnemonic, e.g. "TXFRS"
    pub short_name: &'static str,

    /// Human-readable meaning of the bit
    pub description: &'static str,
}

/// Sparse bit-position to field mapping for one hardware register
///
/// Bit positions not present in the map are reserved. The table is immutable
/// after construction and safe to share across threads; concurrent decode
/// calls need no synchronization.
///
/// ## Example
///
/// ```ignore
/// use dwstatus_raw::field::FieldTable;
///
/// let table = FieldTable::new(
///     "Demo Status",
///     7,
///     &[(0, "RDY", "Device ready"), (7, "ERR", "Device error")],
/// )?;
///
/// assert_eq!(table.lookup(7).map(|f| f.short_name), Some("ERR"));
/// assert!(table.lookup(3).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct FieldTable {
    name: &'static str,
    max_bit: u32,
    fields: BTreeMap<u32, FieldDefinition>,
}

impl FieldTable {
    /// Build a table from `(bit, short name, description)` entries
    ///
    /// `max_bit` is the highest bit position the decoder will scan,
    /// inclusive. Duplicate bits, bits above `max_bit`, unnamed fields, and
    /// widths beyond the 64-bit storage word are rejected.
    pub fn new(
        name: &'static str,
        max_bit: u32,
        entries: &[(u32, &'static str, &'static str)],
    ) -> Result<Self> {
        if max_bit >= u64::BITS {
            return Err(TableError::WidthTooLarge {
                register: name,
                width: u64::from(max_bit) + 1,
            });
        }

        let mut fields = BTreeMap::new();
        for &(bit, short_name, description) in entries {
            if bit > max_bit {
                return Err(TableError::BitOutOfRange {
                    register: name,
                    name: short_name,
                    bit,
                    max_bit,
                });
            }
            if short_name.is_empty() {
                return Err(TableError::EmptyName {
                    register: name,
                    bit,
                });
            }
            if let Some(existing) = fields.insert(
                bit,
                FieldDefinition {
                    short_name,
                    description,
                },
            ) {
                return Err(TableError::DuplicateBit {
                    register: name,
                    bit,
                    existing: existing.short_name,
                    duplicate: short_name,
                });
            }
        }

        Ok(Self {
            name,
            max_bit,
            fields,
        })
    }

    /// Display name of the register this table describes
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Highest bit position scanned by the decoder, inclusive
    pub fn max_bit(&self) -> u32 {
        self.max_bit
    }

    /// Register width in bits
    pub fn width(&self) -> u32 {
        self.max_bit + 1
    }

    /// Look up the field declared at `bit`
    ///
    /// Returns `None` for reserved bits; callers render those with the
    /// reserved marker.
    pub fn lookup(&self, bit: u32) -> Option<&FieldDefinition> {
        self.fields.get(&bit)
    }

    /// Number of declared fields
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}
