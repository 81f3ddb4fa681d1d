use crate::application::read_models::{LicenseReportReadModel, ViolationView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Message printed when no component violates the allow-list
pub const ALL_CLEAR_MESSAGE: &str = "No components with unapproved licenses found.";

/// Column headings, in display order
const HEADERS: [&str; 5] = ["(index)", "Component Name", "pURL", "License", "Location"];

/// TableFormatter adapter rendering the report as a box-drawn console table
///
/// Cells are left-aligned and padded to the widest value in their column.
pub struct TableFormatter;

impl TableFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Keeps a cell on a single line
    fn escape_table_cell(text: &str) -> String {
        text.replace(['\r', '\n'], " ")
    }

    fn cells(index: usize, view: &ViolationView) -> [String; 5] {
        [
            index.to_string(),
            Self::escape_table_cell(&view.name),
            Self::escape_table_cell(&view.purl),
            Self::escape_table_cell(&view.licenses),
            Self::escape_table_cell(&view.location),
        ]
    }

    fn column_widths(rows: &[[String; 5]]) -> [usize; 5] {
        let mut widths = HEADERS.map(|header| header.chars().count());
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering table parts
impl TableFormatter {
    fn render_border(output: &mut String, widths: &[usize; 5], left: &str, mid: &str, right: &str) {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        output.push_str(left);
        output.push_str(&segments.join(mid));
        output.push_str(right);
        output.push('\n');
    }

    fn render_row<S: AsRef<str>>(output: &mut String, widths: &[usize; 5], cells: &[S]) {
        output.push('│');
        for (cell, width) in cells.iter().zip(widths) {
            output.push_str(&format!(" {:<width$} │", cell.as_ref(), width = *width));
        }
        output.push('\n');
    }
}

impl ReportFormatter for TableFormatter {
    fn format(&self, model: &LicenseReportReadModel) -> Result<String> {
        if model.is_clean() {
            return Ok(format!("{}\n", ALL_CLEAR_MESSAGE));
        }

        let rows: Vec<[String; 5]> = model
            .violations
            .iter()
            .enumerate()
            .map(|(index, view)| Self::cells(index, view))
            .collect();
        let widths = Self::column_widths(&rows);

        let mut output = String::new();
        Self::render_border(&mut output, &widths, "┌", "┬", "┐");
        Self::render_row(&mut output, &widths, &HEADERS);
        Self::render_border(&mut output, &widths, "├", "┼", "┤");
        for row in &rows {
            Self::render_row(&mut output, &widths, row);
        }
        Self::render_border(&mut output, &widths, "└", "┴", "┘");

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(name: &str, purl: &str, licenses: &str, location: &str) -> ViolationView {
        ViolationView {
            name: name.to_string(),
            purl: purl.to_string(),
            licenses: licenses.to_string(),
            location: location.to_string(),
        }
    }

    #[test]
    fn test_format_clean_report() {
        let output = TableFormatter::new()
            .format(&LicenseReportReadModel::default())
            .unwrap();
        assert_eq!(output, "No components with unapproved licenses found.\n");
    }

    #[test]
    fn test_format_single_row() {
        let model = LicenseReportReadModel {
            violations: vec![view("gpl-lib", "N/A", "GPL-3.0-only", "N/A")],
        };

        let output = TableFormatter::new().format(&model).unwrap();

        let expected = "\
┌─────────┬────────────────┬──────┬──────────────┬──────────┐
│ (index) │ Component Name │ pURL │ License      │ Location │
├─────────┼────────────────┼──────┼──────────────┼──────────┤
│ 0       │ gpl-lib        │ N/A  │ GPL-3.0-only │ N/A      │
└─────────┴────────────────┴──────┴──────────────┴──────────┘
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_format_widens_columns_and_keeps_order() {
        let model = LicenseReportReadModel {
            violations: vec![
                view(
                    "first",
                    "pkg:npm/first@1.0.0",
                    "GPL-2.0-only, MIT",
                    "/app/package-lock.json",
                ),
                view("second", "N/A", "", "N/A"),
            ],
        };

        let output = TableFormatter::new().format(&model).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[3].starts_with("│ 0       │ first "));
        assert!(lines[3].contains("│ pkg:npm/first@1.0.0 │"));
        assert!(lines[3].contains("│ GPL-2.0-only, MIT │"));
        assert!(lines[4].starts_with("│ 1       │ second "));
        // every line has the same display width
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|line| line.chars().count() == width));
    }

    #[test]
    fn test_escape_table_cell() {
        assert_eq!(TableFormatter::escape_table_cell("a\nb\r\nc"), "a b  c");
        assert_eq!(TableFormatter::escape_table_cell("plain"), "plain");
    }

    #[test]
    fn test_multibyte_names_are_padded_by_character() {
        let model = LicenseReportReadModel {
            violations: vec![view("ライブラリ", "N/A", "GPL-3.0-only", "N/A")],
        };

        let output = TableFormatter::new().format(&model).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|line| line.chars().count() == width));
    }
}
