use clap::Parser;
use s2p::cli;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.with_ansi(!cli.no_color).init();
    }

    let result = cli::load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        cli::Commands::Nsg(args) => cli::nsg::handle_nsg(args, &config),
        cli::Commands::BucketsWithoutLogging(args) => cli::buckets::handle_buckets(args, &config),
        cli::Commands::VpcsWithoutFlowlogs(args) => cli::flowlogs::handle_flowlogs(args, &config),
        cli::Commands::Findings(args) => cli::findings::handle_findings(args),
        cli::Commands::ValidateConfig(args) => cli::validate::handle_validate(args),
    });

    if let Err(e) = result {
        let classification = e.classify();
        tracing::debug!(error_type = classification.error_type, "Command failed");
        eprintln!("Error: {}", e);
        std::process::exit(classification.exit_code);
    }
}
