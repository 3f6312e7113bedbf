pub mod commands;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::error::Result;
use crate::volume::VolumeFilter;

#[derive(Parser)]
#[command(name = "volumectl")]
#[command(version)]
#[command(about = "Manage persistent volumes on a remote platform API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new persistent volume based on a volume plan
    Create {
        /// Name for the new volume
        name: String,

        /// Volume plan to provision from
        plan: String,

        /// The pool that owns the volume (mandatory if the user has access
        /// to more than one pool)
        #[arg(short, long)]
        pool: Option<String>,

        /// The team that owns the volume (mandatory if the user has access
        /// to more than one team)
        #[arg(short, long)]
        team: Option<String>,

        /// Backend specific volume options (key=value, repeatable)
        #[arg(short, long = "opt", value_name = "KEY=VALUE", value_parser = parse_key_val)]
        opt: Vec<(String, String)>,
    },

    /// Update an existing persistent volume
    Update {
        /// Volume to update
        name: String,

        /// Volume plan to provision from
        plan: String,

        /// The pool that owns the volume
        #[arg(short, long)]
        pool: Option<String>,

        /// The team that owns the volume
        #[arg(short, long)]
        team: Option<String>,

        /// Backend specific volume options (key=value, repeatable)
        #[arg(short, long = "opt", value_name = "KEY=VALUE", value_parser = parse_key_val)]
        opt: Vec<(String, String)>,
    },

    /// List existing persistent volumes
    List {
        /// Filter volumes by name (substring)
        #[arg(short, long)]
        name: Option<String>,

        /// Filter volumes by pool
        #[arg(short = 'o', long)]
        pool: Option<String>,

        /// Filter volumes by plan
        #[arg(short = 'p', long)]
        plan: Option<String>,

        /// Filter volumes by team owner
        #[arg(short = 't', long)]
        team: Option<String>,

        /// Display only volume names
        #[arg(short, long)]
        quiet: bool,

        /// Display in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Show details of a volume
    Info {
        /// Volume to inspect
        name: String,

        /// Display in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Delete an existing persistent volume
    Delete {
        /// Volume to delete
        name: String,
    },

    /// Bind an existing volume to an application
    Bind {
        /// Volume to bind
        volume: String,

        /// Mount point inside the application
        mount_point: String,

        /// Application to bind the volume to
        #[arg(short, long, env = "VOLUMECTL_APP")]
        app: Option<String>,

        /// The volume will be available only for reading
        #[arg(short, long)]
        readonly: bool,

        /// Prevents restarting the application
        #[arg(long)]
        no_restart: bool,
    },

    /// Unbind a volume from an application
    Unbind {
        /// Volume to unbind
        volume: String,

        /// Mount point inside the application
        mount_point: String,

        /// Application to unbind the volume from
        #[arg(short, long, env = "VOLUMECTL_APP")]
        app: Option<String>,

        /// Prevents restarting the application
        #[arg(long)]
        no_restart: bool,
    },

    /// Inspect volume plans
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// List existing volume plans, grouped by provisioner
    List,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config = AppConfig::load()?;

        match self.command {
            Commands::Create {
                name,
                plan,
                pool,
                team,
                opt,
            } => commands::create::execute(&config, name, plan, pool, team, opt).await,
            Commands::Update {
                name,
                plan,
                pool,
                team,
                opt,
            } => commands::update::execute(&config, name, plan, pool, team, opt).await,
            Commands::List {
                name,
                pool,
                plan,
                team,
                quiet,
                json,
            } => {
                let filter = VolumeFilter {
                    name: name.unwrap_or_default(),
                    pool: pool.unwrap_or_default(),
                    plan: plan.unwrap_or_default(),
                    team_owner: team.unwrap_or_default(),
                };
                commands::list::execute(&config, filter, quiet, json).await
            }
            Commands::Info { name, json } => commands::info::execute(&config, name, json).await,
            Commands::Delete { name } => commands::delete::execute(&config, name).await,
            Commands::Bind {
                volume,
                mount_point,
                app,
                readonly,
                no_restart,
            } => commands::bind::bind(&config, volume, mount_point, app, readonly, no_restart).await,
            Commands::Unbind {
                volume,
                mount_point,
                app,
                no_restart,
            } => commands::bind::unbind(&config, volume, mount_point, app, no_restart).await,
            Commands::Plan { command } => match command {
                PlanCommands::List => commands::plan::list(&config).await,
            },
        }
    }
}

/// Parses a `key=value` flag into its pair.
fn parse_key_val(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("invalid KEY=VALUE pair: '{}'", s)),
    }
}
