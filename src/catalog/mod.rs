//! Content Catalog
//!
//! Immutable mapping from each encoding technique to the literal content shown
//! in its tab: description, sample tables, code snippet and pros/cons.
//!
//! Nothing here is computed at runtime. The transformed tables are hand-authored
//! to match what pandas / scikit-learn would print for the sample data.

mod records;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Encoding technique described by one tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub enum EncoderVariant {
    #[default]
    LabelEncoder,
    GetDummies,
    OneHotEncoder,
    ColumnTransformer,
}

impl EncoderVariant {
    /// All variants in tab order
    pub const ALL: [EncoderVariant; 4] = [
        EncoderVariant::LabelEncoder,
        EncoderVariant::GetDummies,
        EncoderVariant::OneHotEncoder,
        EncoderVariant::ColumnTransformer,
    ];

    /// Stable identifier used in URLs and JSON
    pub fn id(&self) -> &'static str {
        match self {
            EncoderVariant::LabelEncoder => "LabelEncoder",
            EncoderVariant::GetDummies => "GetDummies",
            EncoderVariant::OneHotEncoder => "OneHotEncoder",
            EncoderVariant::ColumnTransformer => "ColumnTransformer",
        }
    }

    /// Catalog entry for this variant
    pub fn content(&self) -> &'static ContentRecord {
        content(*self)
    }
}

impl fmt::Display for EncoderVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown encoder '{0}'")]
pub struct UnknownVariant(pub String);

impl FromStr for EncoderVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EncoderVariant::ALL
            .into_iter()
            .find(|v| v.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

// ============================================================================
// Sample Tables
// ============================================================================

/// A single display value in a sample table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    Text(&'static str),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Int(v) => write!(f, "{}", v),
            // Shortest form: 15.5, 20, -0.32
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Text(v) => f.write_str(v),
        }
    }
}

/// One table row: column name -> value, in authoring order
pub type Row = &'static [(&'static str, CellValue)];

/// Look up a column in a row. `None` when the row does not carry the column.
pub fn cell(row: Row, column: &str) -> Option<CellValue> {
    row.iter()
        .find(|(name, _)| *name == column)
        .map(|(_, value)| *value)
}

/// Column names of a table, taken from the keys of its first row
pub fn row_headers(rows: &[Row]) -> Vec<&'static str> {
    rows.first()
        .map(|row| row.iter().map(|(name, _)| *name).collect())
        .unwrap_or_default()
}

// ============================================================================
// Content Record
// ============================================================================

/// Static content behind one tab
#[derive(Debug)]
pub struct ContentRecord {
    pub variant: EncoderVariant,
    /// Short label shown on the tab
    pub nav_title: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Python snippet, display only
    pub code: &'static str,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
    pub original_rows: &'static [Row],
    pub transformed_rows: &'static [Row],
    pub transformed_headers: &'static [&'static str],
    pub note: Option<&'static str>,
    /// Columns highlighted in the transformed table even though they are not
    /// new. Only LabelEncoder uses this: its columns keep their names but
    /// their values change.
    pub forced_highlights: &'static [&'static str],
}

impl ContentRecord {
    /// Headers of the original table (keys of the first original row)
    pub fn original_headers(&self) -> Vec<&'static str> {
        row_headers(self.original_rows)
    }
}

/// Catalog lookup. Total over `EncoderVariant`.
pub fn content(variant: EncoderVariant) -> &'static ContentRecord {
    match variant {
        EncoderVariant::LabelEncoder => &records::LABEL_ENCODER,
        EncoderVariant::GetDummies => &records::GET_DUMMIES,
        EncoderVariant::OneHotEncoder => &records::ONE_HOT_ENCODER,
        EncoderVariant::ColumnTransformer => &records::COLUMN_TRANSFORMER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_total_and_keyed_correctly() {
        for variant in EncoderVariant::ALL {
            assert_eq!(content(variant).variant, variant);
        }
    }

    #[test]
    fn test_parse_variant_ids() {
        assert_eq!("GetDummies".parse::<EncoderVariant>(), Ok(EncoderVariant::GetDummies));
        assert_eq!("onehotencoder".parse::<EncoderVariant>(), Ok(EncoderVariant::OneHotEncoder));
        assert_eq!(
            "TargetEncoder".parse::<EncoderVariant>(),
            Err(UnknownVariant("TargetEncoder".to_string()))
        );
    }

    #[test]
    fn test_default_variant_is_label_encoder() {
        assert_eq!(EncoderVariant::default(), EncoderVariant::LabelEncoder);
    }

    #[test]
    fn test_original_headers_follow_first_row() {
        let record = content(EncoderVariant::GetDummies);
        assert_eq!(record.original_headers(), vec!["id", "color", "talla", "precio"]);
    }

    #[test]
    fn test_transformed_rows_only_use_declared_headers() {
        for variant in EncoderVariant::ALL {
            let record = content(variant);
            for row in record.transformed_rows {
                for (name, _) in row.iter() {
                    assert!(
                        record.transformed_headers.contains(name),
                        "{}: column {} not declared",
                        variant,
                        name
                    );
                }
            }
        }
    }

    #[test]
    fn test_cell_display_matches_site() {
        assert_eq!(CellValue::Float(15.5).to_string(), "15.5");
        assert_eq!(CellValue::Float(20.0).to_string(), "20");
        assert_eq!(CellValue::Float(-0.32).to_string(), "-0.32");
        assert_eq!(CellValue::Int(3).to_string(), "3");
        assert_eq!(CellValue::Text("Verde").to_string(), "Verde");
    }

    #[test]
    fn test_cell_lookup_missing_column() {
        let row: Row = &[("id", CellValue::Int(1))];
        assert_eq!(cell(row, "id"), Some(CellValue::Int(1)));
        assert_eq!(cell(row, "color"), None);
    }
}
