use anyhow::Result;
use clap::Parser;
use console::style;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use letta_vision::api::configs::base::ClientConfig;
use letta_vision::api::configs::letta::{LettaConfig, LETTA_API_KEY};
use letta_vision::api::letta::LettaClient;
use letta_vision::api::types::message::validate_media_type;
use letta_vision::api::utils::{build_request, response_to_reply, validate_agent_id};
use letta_vision::errors::ApiError;
use letta_vision::image::{fetch_image, DEFAULT_IMAGE_URL, DEFAULT_MEDIA_TYPE};

const DEFAULT_AGENT_ID: &str = "agent-bb780791-961a-4fa3-95ba-b681b6d508e6";
const DEFAULT_PROMPT: &str = "Describe this image.";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Agent to send the message to
    #[arg(short, long, default_value = DEFAULT_AGENT_ID)]
    agent_id: String,

    /// Image to attach to the message
    #[arg(short, long, default_value = DEFAULT_IMAGE_URL)]
    image_url: String,

    /// Text sent along with the image
    #[arg(short, long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Media type declared for the image
    #[arg(short, long, default_value = DEFAULT_MEDIA_TYPE)]
    media_type: String,

    /// Print only the assistant's text instead of the raw response
    #[arg(long)]
    text_only: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Values already in the environment win over .env
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match LettaConfig::from_env() {
        Ok(config) => config,
        Err(e) if matches!(e.downcast_ref::<ApiError>(), Some(ApiError::MissingEnv(_))) => {
            eprintln!(
                "{} {} environment variable not set",
                style("Error:").for_stderr().red().bold(),
                LETTA_API_KEY
            );
            std::process::exit(1);
        }
        Err(e) => return Err(e),
    };

    if !validate_agent_id(&cli.agent_id) {
        warn!(agent_id = %cli.agent_id, "agent id does not look like agent-<uuid>");
    }

    let client = LettaClient::new(config)?;

    // Bad input fails before anything is downloaded
    validate_media_type(&cli.media_type)?;

    let image = fetch_image(client.http(), &cli.image_url)?;
    let request = build_request(&image, &cli.media_type, &cli.prompt)?;
    let response = client.create_messages(&cli.agent_id, &request)?;

    if cli.text_only {
        let reply = response_to_reply(&response)?;
        info!(
            total_tokens = ?reply.usage.total_tokens,
            steps = ?reply.usage.step_count,
            "agent replied"
        );
        for text in &reply.assistant_text {
            println!("{}", text);
        }
    } else {
        println!("Response:");
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    Ok(())
}
