use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::models::ReportRequest;
use clap::{ArgAction, Args, Parser, Subcommand};

/// Command-line interface definition for rTimesheet
/// CLI application to download timesheet reports and pivot time entries
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Download timesheet reports and pivot time entries into spreadsheet exports",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// API base URI used to resolve relative URLs
    #[arg(global = true, long = "api-uri", env = "RTIMESHEET_API_URI")]
    pub api_uri: Option<String>,

    /// Bearer token sent with every API request
    #[arg(
        global = true,
        long = "token",
        env = "RTIMESHEET_TOKEN",
        hide_env_values = true
    )]
    pub token: Option<String>,

    /// Increase diagnostic output (-v info, -vv debug)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Report request selection shared by `fetch` and `pivot`.
#[derive(Args, Debug, Clone, Default)]
pub struct RequestArgs {
    /// Employee id (POST request, needs --from and --to)
    #[arg(long = "employee", conflicts_with = "payload")]
    pub employee: Option<i64>,

    /// First day of the report
    #[arg(long = "from", requires = "employee")]
    pub from: Option<String>,

    /// Last day of the report
    #[arg(long = "to", requires = "employee")]
    pub to: Option<String>,

    /// Legacy request payload "<employeeId>,<fromDate>,<toDate>"
    #[arg(long = "payload", value_name = "ID,FROM,TO")]
    pub payload: Option<String>,
}

impl RequestArgs {
    /// `None` means a plain GET, `Some` a POST with the report request body.
    pub fn to_request(&self) -> AppResult<Option<ReportRequest>> {
        if let Some(raw) = &self.payload {
            return Ok(Some(raw.parse()?));
        }
        ReportRequest::from_parts(self.employee, self.from.as_deref(), self.to.as_deref())
    }
}

/// Where the produced file goes.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output file name
    #[arg(long = "file", value_name = "NAME")]
    pub file: String,

    /// Output directory (default: `output_dir` from the config file)
    #[arg(long = "out-dir", value_name = "DIR", conflicts_with = "stdout")]
    pub out_dir: Option<String>,

    /// Write the file content to stdout instead of a directory
    #[arg(long = "stdout")]
    pub stdout: bool,

    /// Overwrite an existing file without asking
    #[arg(long, short = 'f')]
    pub force: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download a file from the API and save it as is
    Fetch {
        /// Absolute URL or path relative to the API base URI
        url: String,

        #[command(flatten)]
        request: RequestArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Pivot time entries by project and date and export the table
    Pivot {
        /// Local JSON file with the time entries
        #[arg(
            long,
            value_name = "FILE",
            required_unless_present = "url",
            conflicts_with_all = ["url", "employee", "from", "to", "payload"]
        )]
        input: Option<String>,

        /// API URL returning the time entries as JSON
        #[arg(long, value_name = "URL")]
        url: Option<String>,

        #[command(flatten)]
        request: RequestArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Export format (default: `default_format` from the config file)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Also print the table on the terminal
        #[arg(long)]
        preview: bool,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration (token masked)")]
        print_config: bool,

        #[arg(long = "init", help = "Create a default configuration file if missing")]
        init: bool,
    },
}
