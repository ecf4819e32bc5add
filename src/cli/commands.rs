use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(
    name = "s2p",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_TIMESTAMP"), ")"),
    about = "Parse Scout2's JSON results into CSV files for reporting"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// YAML file with per-report defaults
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report network security group findings
    Nsg(NsgArgs),
    /// Report S3 buckets without logging enabled
    BucketsWithoutLogging(ReportArgs),
    /// Report VPC subnets without flow logs enabled
    VpcsWithoutFlowlogs(ReportArgs),
    /// List finding names and item counts for a service
    Findings(FindingsArgs),
    /// Validate a configuration file
    ValidateConfig(ValidateArgs),
}

#[derive(Args, Clone, Debug)]
pub struct NsgArgs {
    /// Scout2 aws_config.js file
    pub filepath: String,

    /// Omit findings with fewer than this many items [default: 0]
    #[arg(short, long)]
    pub min_count: Option<usize>,

    /// Finding name to include; repeat for more. Defaults to all EC2 findings
    #[arg(short, long = "wanted-findings", value_parser = finding_name)]
    pub wanted_findings: Vec<String>,

    /// Output file [default: network_security_groups.csv]
    #[arg(short, long, alias = "output_name")]
    pub output_name: Option<String>,
}

#[derive(Args, Clone, Debug)]
pub struct ReportArgs {
    /// Scout2 aws_config.js file
    pub filepath: String,

    /// Output file (each report has its own default name)
    #[arg(short, long, alias = "output_name")]
    pub output_name: Option<String>,
}

#[derive(Args, Clone, Debug)]
pub struct FindingsArgs {
    /// Scout2 aws_config.js file
    pub filepath: String,

    /// Service whose findings to list
    #[arg(long, default_value = "ec2")]
    pub service: String,
}

#[derive(Args, Clone, Debug)]
pub struct ValidateArgs {
    /// Config file to validate
    pub path: String,
}

fn finding_name(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        Err("finding name must not be empty".to_string())
    } else {
        Ok(value.to_string())
    }
}
