use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use dormhub::logging::init_console_logging;
use dormhub::shell::{self, Portal, Prefill};
use dormhub::state::AppState;
use dormhub_config::ApiConfig;

#[derive(Parser)]
#[command(name = "dormhub")]
#[command(about = "Dormhub - dorm room assignment client", long_about = None)]
struct Cli {
    /// API base URL (overrides DORMHUB_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in as a student and pick a room
    Student {
        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (prompted if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Log in as a school administrator
    Admin {
        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (prompted if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,

        /// School the administrator manages
        #[arg(short = 's', long)]
        school_id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    init_console_logging();

    let cli = Cli::parse();

    let mut config = ApiConfig::from_env();
    if let Some(url) = cli.api_url {
        config = config.with_base_url(url);
    }
    let state = AppState::new(config)?;

    let (portal, prefill) = match cli.command {
        Commands::Student { email, password } => (
            Portal::Student,
            Prefill {
                email,
                password,
                school_id: None,
            },
        ),
        Commands::Admin {
            email,
            password,
            school_id,
        } => (
            Portal::Admin,
            Prefill {
                email,
                password,
                school_id,
            },
        ),
    };

    shell::run(state, portal, prefill).await
}
