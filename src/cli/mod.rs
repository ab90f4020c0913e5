mod args;
mod config;
mod global;
mod handlers;

use clap::{Parser, Subcommand};

use args::{ConfigAction, DecodeArgs, EncodeArgs};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "radix64")]
#[command(version)]
#[command(about = "Base64 encoder and decoder with strict validation and custom alphabets", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode binary data to text
    Encode(EncodeArgs),

    /// Decode text back to binary data
    Decode(DecodeArgs),

    /// Inspect the alphabet registry
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // A logger set up earlier in the process wins; nothing to do then
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.global.log_level()),
    )
    .format_timestamp(None)
    .try_init();

    // Load alphabets configuration with user overrides
    let registry = config::load_registry(&cli.global)?;

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &registry),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &registry),
        Commands::Config { action } => handlers::config::handle(action, &registry),
    }
}
