use crate::tables::{BitWidth, LookupTable};

const VALUES_PER_LINE: usize = 8;

/// Render the tables as a C header: one `const` array per table plus a
/// `_SIZE` define, guarded, values in hex.
pub fn render_c_header(tables: &[LookupTable]) -> String {
    let mut out = String::new();
    out.push_str("// Generated by lut-gen. Do not edit.\n\n");
    out.push_str("#ifndef LOOKUP_TABLES_H_\n");
    out.push_str("#define LOOKUP_TABLES_H_\n\n");
    out.push_str("#include <stdint.h>\n\n");

    for table in tables {
        out.push_str(&format!(
            "#define LUT_{}_SIZE {}\n",
            table.name.to_uppercase(),
            table.values.len()
        ));
        out.push_str(&format!(
            "const {} lut_{}[{}] = {{\n",
            table.width.c_type(),
            table.name,
            table.values.len()
        ));
        push_values(&mut out, table, "  ");
        out.push_str("};\n\n");
    }

    out.push_str("#endif  // LOOKUP_TABLES_H_\n");
    out
}

/// Render the tables as Rust source, for firmware crates that embed the
/// tables directly.
pub fn render_rust(tables: &[LookupTable]) -> String {
    let mut out = String::new();
    out.push_str("// Generated by lut-gen. Do not edit.\n\n");

    for table in tables {
        out.push_str(&format!(
            "pub const LUT_{}: [{}; {}] = [\n",
            table.name.to_uppercase(),
            table.width.rust_type(),
            table.values.len()
        ));
        push_values(&mut out, table, "    ");
        out.push_str("];\n\n");
    }

    out
}

/// Render the tables as pretty JSON.
pub fn render_json(tables: &[LookupTable]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tables)
}

fn push_values(out: &mut String, table: &LookupTable, indent: &str) {
    for chunk in table.values.chunks(VALUES_PER_LINE) {
        let cells: Vec<String> = chunk
            .iter()
            .map(|value| match table.width {
                BitWidth::U16 => format!("0x{:04x}", value),
                BitWidth::U32 => format!("0x{:08x}", value),
            })
            .collect();
        out.push_str(indent);
        out.push_str(&cells.join(", "));
        out.push_str(",\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tables() -> Vec<LookupTable> {
        vec![
            LookupTable {
                name: "arpeggiator_patterns".to_string(),
                width: BitWidth::U16,
                values: vec![0x5555, 0xf5f5],
            },
            LookupTable {
                name: "euclidean".to_string(),
                width: BitWidth::U32,
                values: vec![0, 0b0010_1001],
            },
        ]
    }

    #[test]
    fn test_c_header_declarations() {
        let header = render_c_header(&sample_tables());
        assert!(header.starts_with("// Generated by lut-gen."));
        assert!(header.contains("#ifndef LOOKUP_TABLES_H_"));
        assert!(header.contains("#define LUT_ARPEGGIATOR_PATTERNS_SIZE 2"));
        assert!(header.contains("const uint16_t lut_arpeggiator_patterns[2] = {"));
        assert!(header.contains("0x5555, 0xf5f5,"));
        assert!(header.contains("const uint32_t lut_euclidean[2] = {"));
        assert!(header.contains("0x00000000, 0x00000029,"));
        assert!(header.ends_with("#endif  // LOOKUP_TABLES_H_\n"));
    }

    #[test]
    fn test_rust_declarations() {
        let source = render_rust(&sample_tables());
        assert!(source.contains("pub const LUT_ARPEGGIATOR_PATTERNS: [u16; 2] = ["));
        assert!(source.contains("pub const LUT_EUCLIDEAN: [u32; 2] = ["));
        assert!(source.contains("0x5555, 0xf5f5,"));
    }

    #[test]
    fn test_c_header_wraps_long_tables() {
        let table = LookupTable {
            name: "euclidean".to_string(),
            width: BitWidth::U32,
            values: (0..20).collect(),
        };
        let header = render_c_header(&[table]);
        // 20 values at 8 per line
        let value_lines = header.lines().filter(|l| l.starts_with("  0x")).count();
        assert_eq!(value_lines, 3);
    }

    #[test]
    fn test_json_round_trips() {
        let json = render_json(&sample_tables()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed[0]["name"], "arpeggiator_patterns");
        assert_eq!(parsed[0]["width"], "u16");
        assert_eq!(parsed[1]["values"][1], 0x29);
    }
}
