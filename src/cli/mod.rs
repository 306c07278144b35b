mod bar;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bar::BarArgs;

/// Terminal bar charts
#[derive(Parser)]
#[command(name = "termplot")]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Log render decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a horizontal bar chart
    Bar(BarArgs),
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        init_logging(self.verbose);
        match self.command {
            Commands::Bar(args) => args.run(),
        }
    }
}

/// Install a stderr subscriber; `RUST_LOG` refines the default level
fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
