//! signflow — demo CLI for the e-signature envelope client.
//!
//! Sends the fixed three-document order envelope to a signer and a carbon
//! copy, or lists envelopes already sent from the account.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use signflow::auth::{OauthTokenProvider, StaticTokenProvider, TokenProvider};
use signflow::config::load_config;
use signflow::envelope::builder::EnvelopeArgs;
use signflow::envelope::sender::{list_sent_envelopes, send_order_envelope};
use signflow::PlatformClient;

/// Static tokens carry no expiry metadata on our side; assume the session
/// outlives the CLI invocation.
const STATIC_TOKEN_TTL_SECS: u64 = 3600;

#[derive(Parser)]
#[command(name = "signflow")]
#[command(about = "Send anchored signing envelopes through an e-signature platform", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "signflow.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the three-document order envelope and send it
    Send {
        #[arg(long)]
        signer_email: String,
        #[arg(long)]
        signer_name: String,
        #[arg(long)]
        cc_email: String,
        #[arg(long)]
        cc_name: String,
    },
    /// List envelopes previously sent from the account
    List,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "signflow=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    tracing::info!(
        base_url = %config.platform.base_url,
        account_id = %config.platform.account_id,
        "configuration loaded"
    );

    let provider: Arc<dyn TokenProvider> = match &config.auth.static_token {
        Some(token) => Arc::new(StaticTokenProvider::new(
            token.clone(),
            config.platform.account_id.clone(),
            Duration::from_secs(STATIC_TOKEN_TTL_SECS),
        )),
        None => Arc::new(OauthTokenProvider::new(
            &config.auth,
            config.platform.account_id.clone(),
        )),
    };
    let client = PlatformClient::new(&config.platform)?;

    match cli.command {
        Commands::Send {
            signer_email,
            signer_name,
            cc_email,
            cc_name,
        } => {
            let args = EnvelopeArgs {
                signer_email,
                signer_name,
                cc_email,
                cc_name,
            };
            let created =
                send_order_envelope(provider.as_ref(), &client, &config.documents, &args).await?;
            println!("{}", serde_json::to_string_pretty(&created)?);
        }
        Commands::List => {
            let list = list_sent_envelopes(provider.as_ref(), &client).await?;
            println!("{}", serde_json::to_string_pretty(&list)?);
        }
    }

    Ok(())
}
