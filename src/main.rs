//! Parley - a terminal shell for the Parley chat client
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::Parser;
use parley_app::config;
use parley_core::{Session, UserInfo};

/// Parley - a terminal shell for the Parley chat client
#[derive(Parser, Debug)]
#[command(name = "parley")]
#[command(about = "A terminal shell for the Parley chat client", long_about = None)]
struct Args {
    /// Location to open on startup (e.g. /chat/abc123)
    #[arg(value_name = "LOCATION", default_value = "/")]
    location: String,

    /// Override the server base URL from config.toml
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Sign in as this user id
    #[arg(long, value_name = "ID")]
    user: Option<String>,

    /// Display name for the signed-in user
    #[arg(long, value_name = "NAME", requires = "user")]
    name: Option<String>,

    /// Active chat whose documents should be listed
    #[arg(long, value_name = "ID")]
    chat_id: Option<String>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    parley_core::logging::init()?;

    let mut settings = config::load_settings(&config::default_config_dir());
    if let Some(server) = args.server {
        settings.server.base_url = server;
    }

    // Session snapshot comes from the launch flags; there is no login
    // round-trip in the shell itself.
    let session = Session {
        user: args.user.map(|id| UserInfo {
            name: args.name.unwrap_or_else(|| id.clone()),
            id,
            email: None,
        }),
        loading: false,
        chat_id: args.chat_id,
    };

    parley_tui::run(settings, session, args.location).await?;
    Ok(())
}
