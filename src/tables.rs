use rhythm_core::pattern::Result;
use rhythm_core::{arpeggiator_table, euclidean_table};
use serde::Serialize;

/// Storage width of a table's entries in the target firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BitWidth {
    U16,
    U32,
}

impl BitWidth {
    pub fn c_type(&self) -> &'static str {
        match self {
            BitWidth::U16 => "uint16_t",
            BitWidth::U32 => "uint32_t",
        }
    }

    pub fn rust_type(&self) -> &'static str {
        match self {
            BitWidth::U16 => "u16",
            BitWidth::U32 => "u32",
        }
    }
}

/// A named constant table ready for emission.
///
/// Values are widened to u32 for uniform handling; `width` records the
/// storage type the consumer should declare.
#[derive(Debug, Clone, Serialize)]
pub struct LookupTable {
    pub name: String,
    pub width: BitWidth,
    pub values: Vec<u32>,
}

/// Build the two lookup tables in emission order: the 22 arpeggiator
/// pattern masks, then the 1024-entry Euclidean rhythm table.
pub fn build_lookup_tables() -> Result<Vec<LookupTable>> {
    let arpeggiator = arpeggiator_table()?;

    Ok(vec![
        LookupTable {
            name: "arpeggiator_patterns".to_string(),
            width: BitWidth::U16,
            values: arpeggiator.into_iter().map(u32::from).collect(),
        },
        LookupTable {
            name: "euclidean".to_string(),
            width: BitWidth::U32,
            values: euclidean_table(),
        },
    ])
}
