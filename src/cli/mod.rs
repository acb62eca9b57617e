//! Command-line interface for `issuedeck`.
//!
//! This module provides the CLI parsing and command routing using clap.
//! Every invocation seeds a fresh in-memory store, runs one operation
//! against the async service layer, prints, and exits — state resets
//! per run the same way the dashboard resets per page load.

pub mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::api::Dashboard;
use crate::config::LatencyProfile;
use crate::{logging, seed};

/// `issuedeck` (deck) - Issue-tracking dashboard over a mock store.
#[derive(Parser, Debug)]
#[command(name = "deck")]
#[command(
    author,
    version,
    about = "Issue-tracking dashboard over an in-memory mock store",
    long_about = None,
    after_help = "In-memory only: every run starts from the same seeded data."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip the simulated network latency
    #[arg(long, global = true)]
    pub fast: bool,

    /// Override all simulated delays with a uniform value
    #[arg(long, global = true, value_name = "MS")]
    pub latency_ms: Option<u64>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List issues
    List(ListArgs),

    /// Show issue details with its comment thread
    Show(ShowArgs),

    /// Create a new issue
    Create(CreateArgs),

    /// Dashboard stat summary (alias: status)
    #[command(alias = "status")]
    Stats,

    /// Manage comments (alias: comments)
    #[command(alias = "comments")]
    Comment(CommentCommand),

    /// List team members
    Members,

    /// Show the activity feed for an issue
    Activity(ActivityArgs),

    /// Show version information
    Version,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by status (new, in-progress, testing, resolved, closed)
    #[arg(short, long)]
    pub status: Option<String>,

    /// Filter by severity (critical, high, medium, low)
    #[arg(long)]
    pub severity: Option<String>,

    /// Case-insensitive search over title and description
    #[arg(long)]
    pub search: Option<String>,

    /// Maximum number of rows
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Issue ID
    pub id: i64,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Issue title
    pub title: String,

    /// Detailed description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Severity (critical, high, medium, low)
    #[arg(long, default_value = "medium")]
    pub severity: String,

    /// Category (Bug, Feature, UI, ...)
    #[arg(long, default_value = "Bug")]
    pub category: String,

    /// Assignee name
    #[arg(long)]
    pub assignee: Option<String>,
}

#[derive(Args, Debug)]
pub struct CommentCommand {
    /// Act as this team member (id from `deck members`)
    #[arg(long = "as", value_name = "MEMBER_ID", default_value_t = 1)]
    pub member_id: i64,

    /// Comment subcommand
    #[command(subcommand)]
    pub command: CommentSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CommentSubcommand {
    /// Add a root comment to an issue
    Add {
        /// Issue ID
        issue_id: i64,
        /// Comment body
        content: String,
    },

    /// Reply to an existing comment at any depth
    Reply {
        /// Parent comment ID
        parent_id: i64,
        /// Reply body
        content: String,
    },

    /// Edit a comment's content
    Edit {
        /// Comment ID
        id: i64,
        /// New body
        content: String,
    },

    /// Delete a comment and its replies
    Delete {
        /// Comment ID
        id: i64,
    },

    /// Show the threaded comments for an issue
    List {
        /// Issue ID
        issue_id: i64,
    },
}

#[derive(Args, Debug)]
pub struct ActivityArgs {
    /// Issue ID
    pub id: i64,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet, None)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let latency = if cli.fast {
        LatencyProfile::zero()
    } else if let Some(ms) = cli.latency_ms {
        LatencyProfile::uniform(std::time::Duration::from_millis(ms))
    } else {
        LatencyProfile::default()
    };

    let dashboard = Dashboard::with_store(seed::sample_store(), latency);
    tracing::debug!(fast = cli.fast, json = cli.json, "dashboard seeded");

    match cli.command {
        Some(Commands::List(args)) => commands::list::execute(&dashboard, &args, cli.json).await,
        Some(Commands::Show(args)) => commands::show::execute(&dashboard, &args, cli.json).await,
        Some(Commands::Create(args)) => {
            commands::create::execute(&dashboard, &args, cli.json).await
        }
        Some(Commands::Stats) => commands::stats::execute(&dashboard, cli.json).await,
        Some(Commands::Comment(args)) => {
            commands::comment::execute(&dashboard, &args, cli.json).await
        }
        Some(Commands::Members) => commands::members::execute(&dashboard, cli.json).await,
        Some(Commands::Activity(args)) => {
            commands::activity::execute(&dashboard, &args, cli.json).await
        }
        Some(Commands::Version) => {
            println!("deck {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => {
            println!("deck - Issue-tracking dashboard. Use --help for usage.");
            Ok(())
        }
    }
}
