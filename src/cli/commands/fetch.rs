use crate::cli::commands::delivery_for;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::DownloadLogic;
use crate::errors::AppResult;
use crate::fetch::ApiClient;
use crate::ui::messages::{info, success};

/// Handle the `fetch` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Fetch {
        url,
        request,
        output,
    } = cmd
    {
        let request = request.to_request()?;
        let client = ApiClient::new(cfg)?;
        let delivery = delivery_for(output, cfg);

        info(format!("Downloading {url}"));
        let delivered = DownloadLogic::fetch_and_deliver(
            &client,
            delivery.as_ref(),
            url,
            request.as_ref(),
            &output.file,
        )?;
        success(format!("Download completed: {delivered}"));
    }
    Ok(())
}
