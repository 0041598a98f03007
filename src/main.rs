use anyhow::{Context, Result};
use caseshift::cli::logger::{self, LogLevelArg};
use caseshift::cli::output::{self, OutputFormat};
use caseshift::{batch, cli, CasingStyle, Config};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use log::info;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "caseshift")]
#[command(version, about = "Detect and convert string casing conventions", long_about = None)]
struct Cli {
    /// Output format (text, json)
    #[arg(short = 'o', long, global = true)]
    format: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log verbosity (overrides CASESHIFT_LOG)
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    log_level: Option<LogLevelArg>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report the casing style of each input
    Detect {
        /// Strings to classify (read from --file or stdin when omitted)
        #[arg(value_name = "INPUTS")]
        inputs: Vec<String>,

        /// Read inputs from a file, one per line
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Exit with code 1 if any input has unrecognized casing
        #[arg(long)]
        fail_on_unrecognized: bool,
    },
    /// Rewrite each input into another casing style
    Convert {
        /// Strings to convert (read from --file or stdin when omitted)
        #[arg(value_name = "INPUTS")]
        inputs: Vec<String>,

        /// Read inputs from a file, one per line
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Target style (upper, lower, title, pascal, camel, snake, inverse,
        /// alternating-normal, alternating-reverse)
        #[arg(short, long)]
        to: Option<CasingStyle>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logger::init(logger::resolve_level(cli.log_level));

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "caseshift", &mut io::stdout());
        return Ok(());
    }

    let Some(command) = cli.command else {
        anyhow::bail!("No command specified. Use --help for usage information.");
    };

    let config = Config::load(cli.format, cli.no_color)?;
    let format: OutputFormat = config
        .format
        .parse()
        .map_err(anyhow::Error::msg)
        .context("Invalid output format")?;

    match command {
        Commands::Detect {
            inputs,
            file,
            fail_on_unrecognized,
        } => {
            let inputs = cli::read_inputs(inputs, file.as_deref(), config.skip_blank_lines)?;
            let detections = batch::detect_all(&inputs);
            info!("classified {} input(s)", detections.len());

            print_rendered(output::render_detections(&detections, format, config.color)?);

            if fail_on_unrecognized {
                output::print_detect_summary(&detections, config.color);
                if detections
                    .iter()
                    .any(|d| d.style == CasingStyle::Unrecognized)
                {
                    std::process::exit(1);
                }
            }
        }
        Commands::Convert { inputs, file, to } => {
            let Some(target) = to.or(config.default_target) else {
                anyhow::bail!(
                    "No target style given. Pass --to or set default_target in {}",
                    caseshift::config::LOCAL_CONFIG_FILE
                );
            };

            let inputs = cli::read_inputs(inputs, file.as_deref(), config.skip_blank_lines)?;
            let conversions = batch::convert_all(&inputs, target)?;
            info!("converted {} input(s) to {}", conversions.len(), target);

            print_rendered(output::render_conversions(&conversions, format, config.color)?);
        }
    }

    Ok(())
}

fn print_rendered(rendered: String) {
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
}
