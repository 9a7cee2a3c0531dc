//! Table Renderer
//!
//! Turns a sample table (headers + rows) into a display-ready grid. Headers
//! drive both column order and which keys are read from each row.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::catalog::{cell, ContentRecord, Row};

pub const ORIGINAL_TABLE_TITLE: &str = "Datos Originales";
pub const TRANSFORMED_TABLE_TITLE: &str = "Datos Transformados";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderCell {
    pub name: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellView {
    /// Display text, empty when the row has no value for the column
    pub text: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub cells: Vec<CellView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub title: String,
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<RowView>,
}

impl TableView {
    pub fn build<'a>(
        title: &str,
        headers: &[&'a str],
        rows: &[Row],
        highlight: &BTreeSet<&'a str>,
    ) -> Self {
        let headers_view = headers
            .iter()
            .map(|name| HeaderCell {
                name: name.to_string(),
                highlighted: highlight.contains(name),
            })
            .collect();

        let rows_view = rows
            .iter()
            .map(|row| RowView {
                cells: headers
                    .iter()
                    .map(|name| CellView {
                        text: cell(*row, name).map(|v| v.to_string()).unwrap_or_default(),
                        highlighted: highlight.contains(name),
                    })
                    .collect(),
            })
            .collect();

        Self {
            title: title.to_string(),
            headers: headers_view,
            rows: rows_view,
        }
    }

    /// Names of the highlighted columns, in column order
    pub fn highlighted_columns(&self) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|h| h.highlighted)
            .map(|h| h.name.as_str())
            .collect()
    }
}

/// Columns to highlight in the transformed table of `record`.
///
/// Transformed headers that do not appear in the original table, plus the
/// record's forced highlights.
pub fn highlighted_columns(record: &ContentRecord) -> BTreeSet<&'static str> {
    let original: BTreeSet<&'static str> = record.original_headers().into_iter().collect();

    let mut highlighted: BTreeSet<&'static str> = record
        .transformed_headers
        .iter()
        .copied()
        .filter(|h| !original.contains(h))
        .collect();

    highlighted.extend(record.forced_highlights.iter().copied());
    highlighted
}

/// The "Datos Originales" table (never highlighted)
pub fn original_table(record: &ContentRecord) -> TableView {
    TableView::build(
        ORIGINAL_TABLE_TITLE,
        &record.original_headers(),
        record.original_rows,
        &BTreeSet::new(),
    )
}

/// The "Datos Transformados" table with new columns highlighted
pub fn transformed_table(record: &ContentRecord) -> TableView {
    TableView::build(
        TRANSFORMED_TABLE_TITLE,
        record.transformed_headers,
        record.transformed_rows,
        &highlighted_columns(record),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{content, CellValue, EncoderVariant};

    #[test]
    fn test_get_dummies_highlights_new_columns_only() {
        let highlighted = highlighted_columns(content(EncoderVariant::GetDummies));
        let expected: BTreeSet<&str> = [
            "color_Azul", "color_Rojo", "color_Verde", "talla_L", "talla_M", "talla_S",
        ]
        .into_iter()
        .collect();

        assert_eq!(highlighted, expected);
        assert!(!highlighted.contains("id"));
        assert!(!highlighted.contains("precio"));
    }

    #[test]
    fn test_label_encoder_forces_changed_columns() {
        let highlighted = highlighted_columns(content(EncoderVariant::LabelEncoder));
        let expected: BTreeSet<&str> = ["color", "talla"].into_iter().collect();
        assert_eq!(highlighted, expected);
    }

    #[test]
    fn test_column_transformer_highlights_scaled_price() {
        let highlighted = highlighted_columns(content(EncoderVariant::ColumnTransformer));
        assert!(highlighted.contains("precio_scaled"));
        assert!(highlighted.contains("talla_S"));
        assert_eq!(highlighted.len(), 7);
    }

    #[test]
    fn test_missing_key_renders_empty_cell() {
        static ROWS: &[Row] = &[
            &[("id", CellValue::Int(1)), ("color", CellValue::Text("Rojo"))],
            &[("id", CellValue::Int(2))],
        ];

        let table = TableView::build("t", &["id", "color"], ROWS, &BTreeSet::new());

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].cells[1].text, "Rojo");
        assert_eq!(table.rows[1].cells[0].text, "2");
        assert_eq!(table.rows[1].cells[1].text, "");
    }

    #[test]
    fn test_headers_drive_column_order() {
        static ROWS: &[Row] = &[&[("a", CellValue::Int(1)), ("b", CellValue::Int(2))]];

        let table = TableView::build("t", &["b", "a"], ROWS, &BTreeSet::new());
        let texts: Vec<&str> = table.rows[0].cells.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["2", "1"]);
    }

    #[test]
    fn test_transformed_table_flags_cells() {
        let table = transformed_table(content(EncoderVariant::GetDummies));

        assert_eq!(table.title, TRANSFORMED_TABLE_TITLE);
        assert_eq!(
            table.highlighted_columns(),
            vec!["color_Azul", "color_Rojo", "color_Verde", "talla_L", "talla_M", "talla_S"]
        );
        // id, precio, then the one-hot columns
        assert!(!table.rows[0].cells[0].highlighted);
        assert!(!table.rows[0].cells[1].highlighted);
        assert!(table.rows[0].cells[2].highlighted);
        assert_eq!(table.rows[0].cells[1].text, "15.5");
    }

    #[test]
    fn test_original_table_has_no_highlights() {
        let table = original_table(content(EncoderVariant::LabelEncoder));
        assert_eq!(table.title, ORIGINAL_TABLE_TITLE);
        assert!(table.highlighted_columns().is_empty());
        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.rows[2].cells[1].text, "Azul");
    }
}
