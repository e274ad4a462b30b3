mod config_cmd;
mod context;
mod distance;
mod load;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use context::AppContext;
pub use distance::DistanceCommand;
pub use load::LoadCommand;
pub use summary::SummaryCommand;

#[derive(Parser)]
#[command(name = "trainlog")]
#[command(about = "Weekly training load and cumulative distance summaries", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "TRAINLOG_CONFIG")]
    config: Option<PathBuf>,

    /// Path to the exported sessions file (JSON)
    #[arg(long, global = true, env = "TRAINLOG_SESSIONS")]
    sessions: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show cumulative running distance per period
    Distance(DistanceCommand),

    /// Show this week's training load and the change from last week
    Load(LoadCommand),

    /// Show weekly load and the distance chart together
    Summary(SummaryCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigSubcommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show current configuration
    Show,

    /// Initialize configuration with defaults
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn execute(self) -> Result<()> {
        if self.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        let config_path = self.config.as_deref();

        match self.command {
            Commands::Distance(cmd) => {
                cmd.execute(&AppContext::load(config_path, self.sessions.as_deref())?)
            }
            Commands::Load(cmd) => {
                cmd.execute(&AppContext::load(config_path, self.sessions.as_deref())?)
            }
            Commands::Summary(cmd) => {
                cmd.execute(&AppContext::load(config_path, self.sessions.as_deref())?)
            }
            Commands::Config(subcmd) => match subcmd {
                ConfigSubcommands::Show => config_cmd::show_config(config_path),
                ConfigSubcommands::Init { force } => config_cmd::init_config(config_path, force),
            },
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
