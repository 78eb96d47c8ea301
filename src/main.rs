use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use mvi_samples::api::ApiClients;
use mvi_samples::config::Config;
use mvi_samples::logging::init_tracing;
use mvi_samples::model::ChatRole;
use mvi_samples::ui::chat::ChatViewModel;
use mvi_samples::ui::posts::PostListViewModel;
use mvi_samples::ui::traffic_light::TrafficLightViewModel;
use mvi_samples::ui::weather::WeatherViewModel;

#[derive(Debug, Parser)]
#[command(name = "mvi-samples", about = "Drive the sample view-models from a terminal")]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch and list posts
    Posts {
        /// Print at most this many posts
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Send one or more messages in a single conversation
    Chat {
        #[arg(required = true)]
        messages: Vec<String>,
    },
    /// Step the traffic light
    Light {
        #[arg(long, default_value_t = 3)]
        steps: usize,
    },
    /// Show current weather for a city
    Weather { city: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    match cli.command {
        Command::Light { steps } => run_light(steps),
        command => {
            let clients = ApiClients::from_config(&config).context("building HTTP client")?;
            run_remote(command, clients).await?;
        }
    }

    Ok(())
}

fn run_light(steps: usize) {
    let view_model = TrafficLightViewModel::new();
    println!("{}", view_model.state().name());
    for _ in 0..steps {
        view_model.advance();
        println!("{}", view_model.state().name());
    }
}

async fn run_remote(command: Command, clients: ApiClients) -> anyhow::Result<()> {
    match command {
        Command::Posts { limit } => {
            let view_model = PostListViewModel::new(clients.posts);
            if let Some(request) = view_model.fetch() {
                request.await?;
            }
            let state = view_model.state();
            if let Some(error) = state.error {
                anyhow::bail!(error);
            }
            for post in state.posts.iter().take(limit) {
                println!("#{} [user {}] {}", post.id, post.user_id, post.title);
            }
        }
        Command::Chat { messages } => {
            let view_model = ChatViewModel::new(clients.chat);
            for message in &messages {
                if let Some(request) = view_model.send(message) {
                    request.await?;
                }
                if let Some(error) = view_model.state().error {
                    anyhow::bail!(error);
                }
            }
            for message in view_model.state().messages {
                let who = match message.role {
                    ChatRole::User => "you",
                    ChatRole::Assistant => "assistant",
                    ChatRole::System => "system",
                };
                println!("{}: {}", who, message.content);
            }
        }
        Command::Weather { city } => {
            let view_model = WeatherViewModel::new(clients.weather);
            if let Some(request) = view_model.search(&city) {
                request.await?;
            }
            let state = view_model.state();
            if let Some(error) = state.error {
                anyhow::bail!(error);
            }
            if let Some(weather) = state.current {
                println!(
                    "{}: {} ({}), {:.1}° feels like {:.1}°, humidity {}%",
                    weather.city,
                    weather.condition,
                    weather.description,
                    weather.temperature,
                    weather.feels_like,
                    weather.humidity
                );
            }
        }
        Command::Light { steps } => run_light(steps),
    }
    Ok(())
}
