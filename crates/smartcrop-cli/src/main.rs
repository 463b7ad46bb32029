use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod logging;
mod prompt;
mod render;

use commands::Runtime;
use commands::login::LoginArgs;

#[derive(Parser)]
#[command(name = "smartcrop")]
#[command(about = "SmartCrop - multilingual crop advisory for small farmers", long_about = None)]
struct Cli {
    /// Advisory backend base URL (overrides config file and SMARTCROP_BACKEND_URL)
    #[arg(long, global = true)]
    backend: Option<String>,

    /// Log at debug level to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a page by path, e.g. `/`, `/dashboard`, `/market`
    Open {
        #[arg(default_value = "/")]
        path: String,
    },
    /// Log in with phone number and OTP
    Login {
        #[arg(long)]
        phone: String,
        #[arg(long, default_value = "")]
        farmer_id: String,
        #[arg(long, default_value = "")]
        aadhaar: String,
        /// Skip the prompt and verify this code
        #[arg(long)]
        otp: Option<String>,
    },
    /// Clear the saved session
    Logout,
    /// Show or switch the interface language (en, hi, pa, ta)
    Lang { code: Option<String> },
    /// Search government schemes
    Schemes {
        #[arg(long)]
        state: String,
        #[arg(long)]
        crop: String,
    },
    /// Detect crop disease from a leaf or crop photo
    Detect { file: PathBuf },
    /// Run a page such as `/soil` or `/irrigation` with an optional JSON body
    Run {
        path: String,
        #[arg(long)]
        body: Option<String>,
    },
    /// Chat with the advisory assistant
    Chat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let rt = Runtime::bootstrap(cli.backend.as_deref(), cli.verbose).await?;

    match cli.command {
        Commands::Open { path } => commands::open::run(&rt, &path).await?,
        Commands::Login {
            phone,
            farmer_id,
            aadhaar,
            otp,
        } => {
            commands::login::run(
                &rt,
                LoginArgs {
                    phone,
                    farmer_id,
                    aadhaar,
                    otp,
                },
            )
            .await?
        }
        Commands::Logout => {
            rt.app.logout().await?;
            render::notice(rt.app.context().locale.dictionary().logout);
        }
        Commands::Lang { code } => commands::lang::run(&rt, code.as_deref()).await?,
        Commands::Schemes { state, crop } => {
            commands::actions::schemes(&rt, &state, &crop).await?
        }
        Commands::Detect { file } => commands::actions::detect(&rt, &file).await?,
        Commands::Run { path, body } => {
            commands::actions::run_page(&rt, &path, body.as_deref()).await?
        }
        Commands::Chat => commands::chat::run(&rt).await?,
    }

    Ok(())
}
