//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::domain::{Overrides, Task};

/// Run, build, test and update a sagui project
#[derive(Parser, Debug)]
#[command(name = "sagui")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Project directory (default: the project sagui is installed in)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub project_dir: Option<PathBuf>,

    /// Use the current directory as the project (linked development)
    ///
    /// Empty, `0`, `false`, `no` and `off` leave it unset.
    #[arg(
        long,
        global = true,
        env = "SAGUI_LINK",
        hide_env_values = true,
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub link: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run development environment
    Develop {
        /// Port the server will listen (default: 3000)
        #[arg(short, long, value_name = "n")]
        port: Option<u16>,
    },

    /// Build based on the DEVELOPMENT environment
    Build {
        /// Optimize the build (minify, dedup...)
        #[arg(short = 'p', long)]
        optimize: bool,
    },

    /// Build and optimize a ready for PRODUCTION distribution
    Dist,

    /// Run unit tests
    #[command(name = "test:unit")]
    TestUnit {
        /// Run tests on any file change
        #[arg(short, long)]
        watch: bool,
        /// Generate a coverage report
        #[arg(short, long)]
        coverage: bool,
    },

    /// Lint the code
    #[command(name = "test:lint")]
    TestLint,

    /// Typecheck the code
    #[command(name = "test:typecheck")]
    TestTypecheck,

    /// Update sagui in the current project
    Update,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,

    /// Show config path
    Path,

    /// Create config template
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

/// Set flags only; an absent flag never overrides a task default.
fn flag(set: bool) -> Option<bool> {
    set.then_some(true)
}

impl Commands {
    /// Task and flag overrides for dispatchable commands, `None` otherwise.
    pub fn task(&self) -> Option<(Task, Overrides)> {
        let none = Overrides::default();
        let resolved = match self {
            Commands::Develop { port } => (
                Task::Develop,
                Overrides {
                    port: *port,
                    ..none
                },
            ),
            Commands::Build { optimize } => (
                Task::Build,
                Overrides {
                    optimize: flag(*optimize),
                    ..none
                },
            ),
            Commands::Dist => (Task::Dist, none),
            Commands::TestUnit { watch, coverage } => (
                Task::TestUnit,
                Overrides {
                    watch: flag(*watch),
                    coverage: flag(*coverage),
                    ..none
                },
            ),
            Commands::TestLint => (Task::TestLint, none),
            Commands::TestTypecheck => (Task::TestTypecheck, none),
            Commands::Update => (Task::Update, none),
            Commands::Config { .. } | Commands::Completion { .. } => return None,
        };
        Some(resolved)
    }
}
