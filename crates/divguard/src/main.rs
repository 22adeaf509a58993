use clap::{Parser, Subcommand, ValueEnum};
use divguard::{Config, Result, logging, run_case, run_demo};
use divguard_core::{Case, Operation, Path, Source};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "divguard",
    version,
    about = "Run guarded and unguarded divide-by-zero (CWE-369) cases",
    long_about = "Runs a division through a zero-checking guard or straight through an unguarded sink. \
                  Without a subcommand, runs the demo: a hard-coded zero through both paths."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to configuration file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Print default configuration
    #[arg(long, value_name = "OPTION")]
    print_config: Option<PrintConfig>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Divide by a hard-coded zero, guarded then unguarded
    Demo,

    /// Run a single case
    Run {
        /// Where the denominator comes from
        #[arg(long, value_enum, default_value_t = SourceKind::Zero)]
        source: SourceKind,

        /// Denominator for the `fixed` source (default: from configuration)
        #[arg(long, value_name = "N", allow_hyphen_values = true)]
        value: Option<i32>,

        /// Arithmetic applied to the denominator
        #[arg(long, value_enum, default_value_t = OperationKind::Divide)]
        operation: OperationKind,

        /// Check the denominator first, or divide unconditionally
        #[arg(long, value_enum, default_value_t = PathKind::Guarded)]
        path: PathKind,

        /// Numerator (default: from configuration)
        #[arg(long, value_name = "N", allow_hyphen_values = true)]
        numerator: Option<i32>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PrintConfig {
    Default,
    Current,
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceKind {
    Zero,
    Fixed,
    Random,
    Console,
}

#[derive(Clone, Copy, ValueEnum)]
enum OperationKind {
    Divide,
    Modulo,
    Float,
}

#[derive(Clone, Copy, ValueEnum)]
enum PathKind {
    Guarded,
    Unguarded,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    // Handle print-config
    if let Some(print_config_option) = cli.print_config {
        match print_config_option {
            PrintConfig::Default => {
                println!("{}", Config::default_toml());
                return Ok(());
            }
            PrintConfig::Current => {
                let config = load_config(&cli)?;
                println!("{}", toml::to_string_pretty(&config)?);
                return Ok(());
            }
        }
    }

    let config = load_config(&cli)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let faulted = match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => {
            run_demo(&config, &mut input, &mut out)?;
            false
        }
        Command::Run {
            source,
            value,
            operation,
            path,
            numerator,
        } => {
            let case = Case {
                numerator: numerator.unwrap_or(config.numerator),
                source: match source {
                    SourceKind::Zero => Source::Zero,
                    SourceKind::Fixed => {
                        Source::Fixed(value.unwrap_or(config.fixed_denominator))
                    }
                    SourceKind::Random => Source::Random,
                    SourceKind::Console => Source::Console,
                },
                operation: match operation {
                    OperationKind::Divide => Operation::Divide,
                    OperationKind::Modulo => Operation::Modulo,
                    OperationKind::Float => Operation::FloatDivide,
                },
                path: match path {
                    PathKind::Guarded => Path::Guarded,
                    PathKind::Unguarded => Path::Unguarded,
                },
            };
            run_case(&config, &case, &mut input, &mut out)?.is_fault()
        }
    };

    if faulted {
        std::process::exit(1);
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    if let Some(config_path) = &cli.config {
        tracing::info!("Loading config from: {}", config_path.display());
        return Ok(Config::from_file(config_path)?);
    }
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            tracing::warn!("Using default configuration: {e}");
            Ok(Config::default())
        }
    }
}
