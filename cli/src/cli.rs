//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::app::{AppContext, AppFlags, OutputFlags};
use crate::commands;

/// Deploy, register and exercise ADK agents on Vertex AI Agent Engine
#[derive(Parser)]
#[command(
    name = "agent-engine",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// `.env` file layered beneath the process environment
    #[arg(
        long,
        global = true,
        env = "AGENT_ENGINE_ENV_FILE",
        default_value = ".env",
        value_name = "PATH"
    )]
    pub env_file: PathBuf,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,

    /// Increase diagnostic logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create the agent engine, or update it when AGENT_ENGINE_ID is set
    Deploy,

    /// Delete the agent engine named by AGENT_ENGINE_ID
    Delete,

    /// Register the agent engine with an Agentspace app
    Register,

    /// Replace the existing Agentspace registration with the configured values
    UpdateRegistration,

    /// Remove the agent engine's Agentspace registration
    Unregister,

    /// List agents registered in the Agentspace app
    List,

    /// Chat with the deployed agent engine
    RemoteTest,

    /// Create an Agentspace OAuth authorization
    CreateAuth,

    /// Delete an Agentspace OAuth authorization
    DeleteAuth,

    /// Validate and print configuration for a mode
    Check {
        /// Mode whose configuration is validated
        #[arg(value_enum)]
        mode: commands::check::CheckMode,
    },
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub fn run(self) -> Result<()> {
        let Cli {
            env_file,
            json,
            quiet,
            no_color,
            verbose: _,
            command,
        } = self;
        let app = AppContext::new(&AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            env_file,
        })?;
        match command {
            Command::Deploy => commands::deploy::run(&app),
            Command::Delete => commands::delete::run(&app),
            Command::Register => commands::registration::register(&app),
            Command::UpdateRegistration => commands::registration::update(&app),
            Command::Unregister => commands::registration::unregister(&app),
            Command::List => commands::registration::list(&app),
            Command::RemoteTest => commands::remote_test::run(&app),
            Command::CreateAuth => commands::authorization::create(&app),
            Command::DeleteAuth => commands::authorization::delete(&app),
            Command::Check { mode } => commands::check::run(&app, mode),
        }
    }
}
