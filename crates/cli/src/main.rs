//! Fauxgram CLI - drive the mock data services by hand.
//!
//! # Usage
//!
//! ```bash
//! # Browse
//! fauxgram feed
//! fauxgram saved
//! fauxgram profile lenscraft
//! fauxgram search maya
//! fauxgram trending
//! fauxgram comments post1
//!
//! # Mutate (state lasts for one invocation only - the collections are
//! # in-memory and reseeded on every start)
//! fauxgram like post1
//! fauxgram post "hello world"
//! ```
//!
//! Every operation waits out the simulated latency unless `--instant` (or
//! `FAUXGRAM_INSTANT=true`) is set.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use clap::{Parser, Subcommand};

use fauxgram_core::UserId;
use fauxgram_services::latency::{Instant, LatencyPolicy, Simulated};
use fauxgram_services::{Services, seed};

mod commands;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "fauxgram")]
#[command(author, version, about = "Fauxgram mock data layer CLI")]
struct Cli {
    /// Skip the simulated latency
    #[arg(long, global = true)]
    instant: bool,

    /// Act as this seeded user ID
    #[arg(long, global = true)]
    as_user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the home feed, newest first
    Feed,
    /// Print the current user's saved posts
    Saved,
    /// Print a user's profile and posts
    Profile {
        /// Username to look up
        username: String,
    },
    /// Search users by username or display name
    Search {
        /// Case-insensitive substring query
        query: String,
    },
    /// Print the trending users
    Trending,
    /// Print a post's comment thread, oldest first
    Comments {
        /// Post ID
        post_id: String,
    },
    /// Toggle like on a post
    Like {
        /// Post ID
        post_id: String,
    },
    /// Toggle save on a post
    Save {
        /// Post ID
        post_id: String,
    },
    /// Toggle follow on a user
    Follow {
        /// User ID
        user_id: String,
    },
    /// Create a post as the current user
    Post {
        /// Caption text
        caption: String,

        /// Image URL
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Comment on a post as the current user
    Comment {
        /// Post ID
        post_id: String,

        /// Comment text
        text: String,
    },
    /// Delete a post
    DeletePost {
        /// Post ID
        post_id: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter, defaulting to info for our crates
    // if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fauxgram=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    let latency: Arc<dyn LatencyPolicy> = if cli.instant || config.instant {
        Arc::new(Instant)
    } else {
        Arc::new(Simulated)
    };

    let current_user = cli
        .as_user
        .or(config.current_user)
        .map_or_else(|| UserId::new(seed::CURRENT_USER_ID), UserId::new);

    let services = Services::from_seed_as(current_user, latency)?;

    match cli.command {
        Commands::Feed => commands::browse::feed(&services).await,
        Commands::Saved => commands::browse::saved(&services).await,
        Commands::Profile { username } => {
            commands::browse::profile(&services, &username).await?;
        }
        Commands::Search { query } => commands::browse::search(&services, &query).await,
        Commands::Trending => commands::browse::trending(&services).await,
        Commands::Comments { post_id } => commands::browse::comments(&services, &post_id).await,
        Commands::Like { post_id } => commands::write::like(&services, &post_id).await?,
        Commands::Save { post_id } => commands::write::save(&services, &post_id).await?,
        Commands::Follow { user_id } => commands::write::follow(&services, &user_id).await?,
        Commands::Post { caption, image_url } => {
            commands::write::create_post(&services, caption, image_url).await;
        }
        Commands::Comment { post_id, text } => {
            commands::write::create_comment(&services, &post_id, text).await;
        }
        Commands::DeletePost { post_id } => {
            commands::write::delete_post(&services, &post_id).await?;
        }
    }
    Ok(())
}
