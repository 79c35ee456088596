use crate::errors::{AppError, AppResult};
use crate::export::EncoderOptions;
use crate::pivot::PivotTable;
use crate::utils::format_hours;
use ::csv::WriterBuilder;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Scrive la tabella pivot come testo delimitato (tab di default).
pub(crate) fn encode_csv(table: &PivotTable, opts: &EncoderOptions) -> AppResult<Vec<u8>> {
    let mut out: Vec<u8> = Vec::new();
    if opts.use_bom {
        out.extend_from_slice(UTF8_BOM);
    }

    let mut wtr = WriterBuilder::new()
        .delimiter(opts.field_separator)
        .quote(opts.quote)
        .from_writer(out);

    if let Some(headers) = opts.headers(table) {
        wtr.write_record(&headers)?;
    }

    for row in &table.rows {
        let mut record: Vec<String> = Vec::with_capacity(row.hours.len() + 1);
        record.push(row.key.label().to_string());
        record.extend(
            row.hours
                .iter()
                .map(|h| format_hours(*h, opts.decimal_separator)),
        );
        wtr.write_record(&record)?;
    }

    wtr.into_inner()
        .map_err(|e| AppError::Encoding(format!("CSV flush error: {e}")))
}
