use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::formatting::mask_secret;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, init } = &cli.command {
        let path = Config::path_for(cli);

        // ---- INIT CONFIG ----
        if *init {
            if Config::init_file(&path)? {
                success(format!("Config file created: {}", path.display()));
            } else {
                info(format!("Config file already present: {}", path.display()));
            }
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            let mut shown = cfg.clone();
            shown.token = shown.token.as_deref().map(mask_secret);
            let yaml = serde_yaml::to_string(&shown)
                .map_err(|e| AppError::Config(format!("cannot render configuration: {e}")))?;
            println!("# {}", path.display());
            print!("{yaml}");
        }
    }

    Ok(())
}
