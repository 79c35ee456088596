use crate::pivot::PivotTable;

/// Options handed to the spreadsheet encoders.
///
/// The values are fixed for this tool; `Default` is the only configuration
/// in use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderOptions {
    pub field_separator: u8,
    pub quote: u8,
    pub decimal_separator: char,
    pub show_labels: bool,
    pub use_bom: bool,
    pub use_keys_as_headers: bool,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            field_separator: b'\t',
            quote: b'"',
            decimal_separator: ',',
            show_labels: true,
            use_bom: true,
            use_keys_as_headers: true,
        }
    }
}

impl EncoderOptions {
    /// Header labels for `table`, or `None` when the header row is off.
    ///
    /// With `use_keys_as_headers` off the columns are just numbered.
    pub(crate) fn headers(&self, table: &PivotTable) -> Option<Vec<String>> {
        if !self.show_labels {
            return None;
        }

        let keys = table.headers();
        if self.use_keys_as_headers {
            Some(keys.into_iter().map(str::to_string).collect())
        } else {
            Some((1..=keys.len()).map(|i| i.to_string()).collect())
        }
    }
}
