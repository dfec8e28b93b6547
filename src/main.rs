use cashflows::application::gateway::CashFlowsGateway;
use cashflows::config::{GatewayConfig, GatewayCredentials, LIVE_URL, TEST_URL};
use cashflows::domain::ports::TransportBox;
use cashflows::infrastructure::http::HttpTransport;
use cashflows::interfaces::csv::operation_reader::OperationReader;
use cashflows::interfaces::csv::result_writer::{OutputFormat, ResultRow, ResultWriter};
use cashflows::logging::init_logging;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input operations CSV file
    input: PathBuf,

    /// Merchant authentication id
    #[arg(long, env = "CASHFLOWS_AUTH_ID", hide_env_values = true)]
    auth_id: Option<String>,

    /// Merchant authentication password
    #[arg(long, env = "CASHFLOWS_AUTH_PASS", hide_env_values = true)]
    auth_pass: Option<String>,

    /// Send live transactions. Test mode is the default.
    #[arg(long)]
    live: bool,

    #[arg(long, env = "CASHFLOWS_TEST_URL", default_value = TEST_URL)]
    test_url: String,

    #[arg(long, env = "CASHFLOWS_LIVE_URL", default_value = LIVE_URL)]
    live_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging("warn");

    let credentials = GatewayCredentials::new(
        cli.auth_id.unwrap_or_default(),
        cli.auth_pass.unwrap_or_default(),
    )
    .into_diagnostic()?;
    let config = GatewayConfig::new(credentials)
        .with_test_mode(!cli.live)
        .with_test_url(cli.test_url)
        .with_live_url(cli.live_url);
    let transport: TransportBox = Box::new(
        HttpTransport::with_timeout(Duration::from_secs(cli.timeout)).into_diagnostic()?,
    );
    let gateway = CashFlowsGateway::new(config, transport);

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = OperationReader::new(file);
    let stdout = io::stdout();
    let mut writer = ResultWriter::new(stdout.lock(), cli.format);

    for command_result in reader.commands() {
        match command_result {
            Ok(command) => match gateway.execute(&command).await {
                Ok(result) => writer
                    .write(&ResultRow::new(&command, &result))
                    .into_diagnostic()?,
                Err(e) => eprintln!("Error processing operation: {}", e),
            },
            Err(e) => {
                eprintln!("Error reading operation: {}", e);
            }
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}
