use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "classdeck")]
#[command(author, version, about)]
#[command(long_about = "An animated slide presenter for a masterclass deck.\n\n\
    Presents the built-in deck, or a YAML/JSON deck of typed slides, with\n\
    keyboard, touch and overview navigation.\n\n\
    Examples:\n  \
    classdeck                        Present the built-in deck (fullscreen)\n  \
    classdeck talk.yaml --windowed   Present a deck file in a window\n  \
    classdeck outline --json         Print the slide list as JSON\n  \
    classdeck check talk.yaml        Validate a deck file")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Deck file to present (.yaml, .yml or .json); the built-in deck if omitted
    pub deck: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch in a window instead of fullscreen
    #[arg(long, global = false)]
    pub windowed: bool,

    /// Animation speed multiplier (2.0 plays twice as fast)
    #[arg(long, global = false)]
    pub speed: Option<f32>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the slides of a deck
    Outline {
        /// Deck file; the built-in deck if omitted
        deck: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Load and validate a deck file
    Check {
        /// Deck file to validate
        deck: PathBuf,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (defaults.deck, defaults.windowed, defaults.speed)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    /// Level for the log subscriber: warn by default, then debug and trace
    /// with `-v` and `-vv`, error only with `-q`.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }

    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Outline { deck, json }) => {
                crate::commands::outline::run(deck.as_deref(), json)
            }
            Some(Commands::Check { deck }) => crate::commands::check::run(&deck),
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                crate::commands::version::run();
                Ok(())
            }
            None => {
                let config = Config::load_or_default();
                let speed = self.speed.unwrap_or_else(|| config.speed());
                if !(speed.is_finite() && speed > 0.0) {
                    anyhow::bail!("Invalid speed: {speed}. Must be a positive number.");
                }
                let windowed = self.windowed || config.windowed();
                let path = self.deck.or_else(|| config.deck().map(PathBuf::from));
                let (deck, base_dir) = crate::commands::load_deck(path.as_deref())?;
                crate::app::run(deck, base_dir, windowed, speed)
            }
        }
    }
}
