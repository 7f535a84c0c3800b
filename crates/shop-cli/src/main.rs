//! shop - Sports Equipment Shop CLI
//!
//! A command-line client for the shop REST API with a persisted
//! session: register or log in once, then stay authenticated across
//! invocations until logout.
//!
//! # Examples
//!
//! ```bash
//! shop register --name Ana --email a@x.com --password pw123
//! shop whoami --pretty
//! shop update-profile --name "Ana Maria"
//! shop refresh
//! shop logout
//! ```

mod cli;
mod commands;

use crate::cli::Cli;
use crate::commands::Commands;

use shop_cli::{SessionIdentity, SessionManager, SessionStore, ShopClient};

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde_json::json;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let state_dir = cli.state_dir.clone().unwrap_or_else(default_state_dir);
    let mut session = SessionManager::restore(SessionStore::new(state_dir));

    let client = match ShopClient::new(&cli.server) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = run_command(cli.command, &client, &mut session).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(text) => {
                    println!("{}", text);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run_command(
    command: Commands,
    client: &ShopClient,
    session: &mut SessionManager,
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    match command {
        Commands::Register {
            name,
            email,
            password,
            photo,
        } => {
            let outcome = client
                .register(&name, &email, &password, photo.as_deref())
                .await?;

            // A token that fails to decode just leaves us logged out
            session.establish(&outcome.token)?;

            Ok(json!({
                "message": outcome.message,
                "userId": outcome.user_id,
                "identity": session.identity(),
            }))
        }

        Commands::Login { email, password } => {
            let outcome = client.login(&email, &password).await?;

            session.establish(&outcome.token)?;

            Ok(json!({
                "message": outcome.message,
                "identity": session.identity(),
            }))
        }

        Commands::Logout => {
            session.logout()?;
            Ok(json!({"message": "Logged out"}))
        }

        Commands::Whoami => match session.identity() {
            Some(identity) => Ok(json!({"identity": identity})),
            None => Err("Not logged in".into()),
        },

        Commands::UpdateProfile { name, photo } => {
            let identity = session.identity().ok_or("Not logged in")?;
            let user_id = identity.id.to_string();

            let outcome = client
                .update_profile(&user_id, name.as_deref(), photo.as_deref())
                .await?;

            // The session keeps showing the old identity until an
            // explicit `shop refresh`.
            Ok(json!({
                "message": outcome.message,
                "user": {
                    "id": outcome.user.id,
                    "email": outcome.user.email,
                    "name": outcome.user.name,
                    "photo": outcome.user.photo,
                },
            }))
        }

        Commands::Refresh => {
            let token = session.token().ok_or("Not logged in")?.to_string();

            let user = client.me(&token).await?;
            session.refresh(SessionIdentity::from(user))?;

            Ok(json!({"identity": session.identity()}))
        }
    }
}

/// Where the session lives when --state-dir is not given.
fn default_state_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shop-cli")
}
