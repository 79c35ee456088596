//! Terminal preview of a pivot table.

use crate::pivot::PivotTable;
use crate::utils::format_hours;
use crate::utils::formatting::{pad_left, pad_right};
use unicode_width::UnicodeWidthStr;

/// Render `table` as aligned text columns (dot decimals, for humans).
pub fn render_table(table: &PivotTable) -> String {
    let headers = table.headers();

    let mut cells: Vec<Vec<String>> = Vec::with_capacity(table.rows.len() + 1);
    cells.push(headers.iter().map(|h| h.to_string()).collect());
    for row in &table.rows {
        let mut line = vec![row.key.label().to_string()];
        line.extend(row.hours.iter().map(|h| format_hours(*h, '.')));
        cells.push(line);
    }

    let mut widths = vec![0usize; headers.len()];
    for line in &cells {
        for (i, c) in line.iter().enumerate() {
            widths[i] = widths[i].max(UnicodeWidthStr::width(c.as_str()));
        }
    }

    let mut out = String::new();
    for line in &cells {
        let rendered: Vec<String> = line
            .iter()
            .enumerate()
            .map(|(i, c)| {
                if i == 0 {
                    pad_right(c, widths[i])
                } else {
                    pad_left(c, widths[i])
                }
            })
            .collect();
        out.push_str(rendered.join("  ").trim_end());
        out.push('\n');
    }
    out
}
