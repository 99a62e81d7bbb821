//! JSON renderer implementation.

use crate::error::Result;
use crate::model::Catalog;

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed with 2-space indentation
    #[default]
    Pretty,
}

/// Render a catalog as a JSON document.
///
/// Keys are the declared package names in declaration order; each value
/// is the package's item array in accumulation order.
pub fn to_json(catalog: &Catalog, format: JsonFormat) -> Result<String> {
    let rendered = match format {
        JsonFormat::Compact => serde_json::to_string(catalog)?,
        JsonFormat::Pretty => serde_json::to_string_pretty(catalog)?,
    };
    Ok(rendered)
}

/// Render a catalog as JSON with default (pretty) formatting.
pub fn to_json_default(catalog: &Catalog) -> Result<String> {
    to_json(catalog, JsonFormat::Pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Catalog;
    use crate::scan::RowScanner;
    use crate::xlsx::{CellValue, SheetRow};

    fn sample_catalog() -> Catalog {
        let mut scanner = RowScanner::new(Catalog::with_packages(&[
            "Tank Equipment",
            "Forecourt Island Equipment",
        ]));
        scanner.feed(&SheetRow {
            index: 2,
            cells: vec![CellValue::Text("Tank Equipment".to_string())],
        });
        scanner.feed(&SheetRow {
            index: 3,
            cells: vec![
                CellValue::Text("P1".to_string()),
                CellValue::Text("Pump".to_string()),
                CellValue::Number(100.5),
                CellValue::Number(2.0),
            ],
        });
        scanner.finish()
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample_catalog(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"partNum\": \"P1\""));
        assert!(json.contains("\"cost\": 100.5"));
        assert!(json.contains("\"qty\": 2.0"));
        // Empty package still serializes as a key with an empty array.
        assert!(json.contains("\"Forecourt Island Equipment\": []"));
        // Pretty output uses 2-space indentation.
        assert!(json.contains("\n  \"Tank Equipment\""));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample_catalog(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"partNum\":\"P1\""));
    }

    #[test]
    fn test_to_json_default_is_pretty() {
        let json = to_json_default(&sample_catalog()).unwrap();
        assert!(json.contains('\n'));
    }
}
