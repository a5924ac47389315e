//! Table rendering for `prism categories` using comfy-table.

use comfy_table::presets::NOTHING;
use comfy_table::{Cell, ColumnConstraint, Table, Width};
use prism_core::StatusEntry;

/// Render the status table.
///
/// # Example Output
///
/// ```text
/// CATEGORY   KEY        COLOR    LABEL
/// info       info       blue     [INFO]
/// ...
/// other      *          white    [OTHER]
/// ```
pub fn render_categories_table(entries: &[StatusEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec![
        Cell::new("CATEGORY"),
        Cell::new("KEY"),
        Cell::new("COLOR"),
        Cell::new("LABEL"),
    ]);
    table.set_constraints(vec![
        ColumnConstraint::LowerBoundary(Width::Fixed(10)), // CATEGORY
        ColumnConstraint::LowerBoundary(Width::Fixed(10)), // KEY
        ColumnConstraint::LowerBoundary(Width::Fixed(8)),  // COLOR
        ColumnConstraint::LowerBoundary(Width::Fixed(11)), // LABEL
    ]);

    for entry in entries {
        table.add_row(vec![
            Cell::new(entry.category),
            Cell::new(entry.key.unwrap_or("*")),
            Cell::new(entry.color),
            // Quote the label so its padding stays visible.
            Cell::new(format!("\"{}\"", entry.label)),
        ]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::status_table;

    #[test]
    fn test_render_categories_table() {
        let rendered = render_categories_table(status_table());
        assert!(rendered.contains("CATEGORY"));
        assert!(rendered.contains("\"[INFO]   \""));
        assert!(rendered.contains("\"[SUCCESS]\""));
        assert!(rendered.contains("yellow"));
        // header + 5 rows
        assert_eq!(rendered.lines().count(), 6);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_categories_table(&[]), "");
    }
}
