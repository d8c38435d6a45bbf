use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payproc::application::batch::run_command;
use payproc::application::processor::PaymentProcessor;
use payproc::domain::ports::{LoggerBox, PaymentGatewayBox};
use payproc::infrastructure::in_memory::InMemoryGateway;
use payproc::infrastructure::logging::LogLogger;
use payproc::interfaces::csv::command_reader::CommandReader;
use payproc::interfaces::csv::outcome_writer::{OutcomeWriter, OutputFormat};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input commands CSV file (`op, user, tx, amount`)
    input: PathBuf,

    /// Decline simulated charges above this amount
    #[arg(long)]
    charge_limit: Option<Decimal>,

    /// Make the simulated gateway fail every call with a network error
    #[arg(long)]
    offline: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env).init();
    let cli = Cli::parse();

    let mut gateway = InMemoryGateway::new();
    if let Some(limit) = cli.charge_limit {
        gateway = gateway.with_charge_limit(limit);
    }
    if cli.offline {
        gateway = gateway.offline();
    }

    let gateway: PaymentGatewayBox = Box::new(gateway);
    let logger: LoggerBox = Box::new(LogLogger::new());
    let processor = PaymentProcessor::new(gateway, logger);

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = CommandReader::new(file);
    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock(), cli.format);

    for command_result in reader.commands() {
        match command_result {
            Ok(command) => match run_command(&processor, command).await {
                Ok(outcome) => writer.write_outcome(&outcome).into_diagnostic()?,
                Err(e) => eprintln!("Error processing command: {}", e),
            },
            Err(e) => {
                eprintln!("Error reading command: {}", e);
            }
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}
