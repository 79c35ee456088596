pub mod config;
pub mod fetch;
pub mod pivot;

use crate::cli::parser::OutputArgs;
use crate::config::Config;
use crate::delivery::{DirectoryDelivery, FileDelivery, StdoutDelivery};
use crate::utils::path::expand_tilde;

/// Pick the delivery target from the output flags.
pub(crate) fn delivery_for(output: &OutputArgs, cfg: &Config) -> Box<dyn FileDelivery> {
    if output.stdout {
        return Box::new(StdoutDelivery);
    }
    let dir = output
        .out_dir
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(|| cfg.output_dir());
    Box::new(DirectoryDelivery::new(dir, output.force))
}
