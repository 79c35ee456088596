use crate::cli::commands::delivery_for;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{EntrySource, ExportLogic};
use crate::errors::{AppError, AppResult};
use crate::fetch::ApiClient;
use crate::ui::messages::{info, success, warning};
use crate::ui::preview::render_table;
use crate::utils::path::expand_tilde;

/// Handle the `pivot` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pivot {
        input,
        url,
        request,
        output,
        format,
        preview,
    } = cmd
    {
        let (source, client) = match (input, url) {
            (Some(path), _) => (EntrySource::File(expand_tilde(path)), None),
            (None, Some(target)) => (
                EntrySource::Api {
                    target: target.clone(),
                    request: request.to_request()?,
                },
                Some(ApiClient::new(cfg)?),
            ),
            (None, None) => {
                return Err(AppError::InvalidArgs(
                    "either --input or --url is required".to_string(),
                ));
            }
        };

        let entries = ExportLogic::load_entries(&source, client.as_ref())?;
        if entries.is_empty() {
            warning("No time entries found: exporting an empty table.");
        } else {
            info(format!("Loaded {} time entries", entries.len()));
        }

        let format = format.unwrap_or(cfg.default_format);
        let delivery = delivery_for(output, cfg);

        let (table, delivered) =
            ExportLogic::pivot_and_export(&entries, format, &output.file, delivery.as_ref())?;

        if *preview {
            eprint!("{}", render_table(&table));
        }

        success(format!(
            "{} export completed: {delivered}",
            format.as_str().to_uppercase()
        ));
    }
    Ok(())
}
