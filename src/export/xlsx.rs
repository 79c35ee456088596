// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::EncoderOptions;
use crate::pivot::PivotTable;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use unicode_width::UnicodeWidthStr;

/// Export XLSX con styling e auto-larghezza colonne, in memoria.
pub(crate) fn encode_xlsx(table: &PivotTable, opts: &EncoderOptions) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("pivot")?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let headers = opts.headers(table);
    let first_data_row: u32 = if headers.is_some() { 1 } else { 0 };

    let mut col_widths: Vec<usize> = vec![0; table.axis.len() + 1];

    if let Some(headers) = &headers {
        for (col, header) in headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, header, &header_format)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(header.as_str()));
        }
        worksheet.set_freeze_panes(1, 1)?;
    }

    // ---------------------------
    // Scrittura righe
    // ---------------------------
    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, row) in table.rows.iter().enumerate() {
        let xl_row = first_data_row + row_index as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };
        let bold = row.key.is_total();

        let label = row.key.label();
        let label_fmt = cell_format(band_color, bold);
        worksheet.write_string_with_format(xl_row, 0, &*label, &label_fmt)?;
        col_widths[0] = col_widths[0].max(UnicodeWidthStr::width(&*label));

        for (col, hours) in row.hours.iter().enumerate() {
            let num_fmt = cell_format(band_color, bold)
                .set_align(FormatAlign::Right)
                .set_num_format(hours_num_format(*hours));
            write_hours(worksheet, xl_row, (col + 1) as u16, *hours, &num_fmt)?;
            let shown = crate::utils::format_hours(*hours, opts.decimal_separator);
            col_widths[col + 1] = col_widths[col + 1].max(UnicodeWidthStr::width(shown.as_str()));
        }
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    Ok(workbook.save_to_buffer()?)
}

fn cell_format(bg: Color, bold: bool) -> Format {
    let fmt = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);
    if bold { fmt.set_bold() } else { fmt }
}

/// Ore intere senza decimali: "0.##" mostrerebbe "3." in Excel.
fn hours_num_format(hours: f64) -> &'static str {
    if hours.fract() == 0.0 { "0" } else { "0.##" }
}

/// Excel has no NaN: non-finite sums become empty formatted cells.
fn write_hours(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    hours: f64,
    fmt: &Format,
) -> AppResult<()> {
    if hours.is_finite() {
        worksheet.write_number_with_format(row, col, hours, fmt)?;
    } else {
        worksheet.write_blank(row, col, fmt)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::hours_num_format;

    #[test]
    fn whole_hours_have_no_trailing_separator() {
        assert_eq!(hours_num_format(3.0), "0");
        assert_eq!(hours_num_format(0.0), "0");
        assert_eq!(hours_num_format(7.5), "0.##");
        assert_eq!(hours_num_format(0.25), "0.##");
    }
}
