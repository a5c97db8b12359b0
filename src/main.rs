use clap::Parser;
use ship_rates::utils::{logger, report, validation::Validate};
use ship_rates::{CliConfig, ErrorKind, OutputFormat, RatesClient, RatesError, RatesProvider, ShippingOptions};

async fn lookup(provider: &impl RatesProvider, options: &ShippingOptions, format: OutputFormat) -> Result<String, RatesError> {
    let rates = provider.fetch_rates(options).await?;
    tracing::info!("Received {} rate(s)", rates.len());

    match format {
        OutputFormat::Table => Ok(report::render_table(&rates)),
        OutputFormat::Json => report::render_json(&rates),
    }
}

fn exit_code(error: &RatesError) -> i32 {
    match error.kind() {
        ErrorKind::Validation | ErrorKind::Config => 1,
        ErrorKind::Transport => 2,
        ErrorKind::Application => 3,
    }
}

fn fail(error: RatesError) -> ! {
    tracing::error!("❌ Rate lookup failed: {} (Kind: {:?})", error, error.kind());
    eprintln!("❌ {}", error.user_friendly_message());
    std::process::exit(exit_code(&error));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose, cli.json_log);

    tracing::info!("Starting ship-rates");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    if let Err(e) = config.validate() {
        fail(e);
    }

    let client = match RatesClient::with_endpoint(config.endpoint()) {
        Ok(client) => client,
        Err(e) => fail(e),
    };

    match lookup(&client, &config.options, cli.format).await {
        Ok(output) => println!("{}", output),
        Err(e) => fail(e),
    }

    Ok(())
}
