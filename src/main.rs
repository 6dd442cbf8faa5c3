mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt::time::Uptime, EnvFilter};

use superego_core::{Card, Deck, Game, GameSettings, Lobby, LobbyMember, SystemClock};
use superego_net::broadcast::Broadcast;
use superego_net::router::Router;
use superego_net::server::{SessionServer, SessionServerConfig};
use superego_net::{feedback, spawn_game_actor};
use superego_storage::{CardStorage, InMemoryCardStorage, InMemoryPersonStorage, PersonStorage};

use config::SessionConfig;

#[derive(Debug, Parser)]
#[command(name = "superego")]
#[command(about = "Run a SuperEgo trivia/betting game session", long_about = None)]
struct Args {
    /// Path to a TOML session config file.
    #[arg(long, env = "SUPEREGO_CONFIG")]
    config: Option<PathBuf>,

    /// Overrides the config file's host.
    #[arg(long, env = "SUPEREGO_HOST")]
    host: Option<String>,

    /// Overrides the config file's port.
    #[arg(long, env = "SUPEREGO_PORT")]
    port: Option<u16>,

    /// Player names to seed the lobby with, in turn order. First is host.
    /// Overrides the config file's player list when non-empty.
    #[arg(long = "player", value_name = "NAME")]
    players: Vec<String>,
}

fn demo_cards() -> Vec<Card> {
    vec![
        Card {
            question: "Which planet is closest to the sun?".into(),
            answer_a: "Mercury".into(),
            answer_b: "Venus".into(),
            answer_c: "Mars".into(),
        },
        Card {
            question: "What is the largest ocean on Earth?".into(),
            answer_a: "Atlantic".into(),
            answer_b: "Pacific".into(),
            answer_c: "Indian".into(),
        },
        Card {
            question: "How many strings does a standard guitar have?".into(),
            answer_a: "4".into(),
            answer_b: "6".into(),
            answer_c: "8".into(),
        },
    ]
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_timer(Uptime::default())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if !args.players.is_empty() {
        config.players = args.players;
    }
    if config.players.is_empty() {
        config.players = vec!["host".to_string(), "guest".to_string()];
    }

    let people = InMemoryPersonStorage::default();
    let cards = InMemoryCardStorage::default();
    for card in demo_cards() {
        cards.store(card);
    }
    for name in &config.players {
        people.store(name);
    }

    let deck = Deck::new("session", cards.get_all()).expect("seeded at least one card above");
    let lobby = build_lobby(&people, &config.players, deck, config.max_rounds_factor);

    let broadcast = Broadcast::new();
    let observer_broadcast = broadcast.clone();
    let observer = Box::new(move |state: superego_core::GameState| {
        observer_broadcast.broadcast(feedback::game_state(&state));
    });
    let game = Game::new(lobby, Box::new(SystemClock), observer);
    let handle = spawn_game_actor(game);
    let router = Router::new(handle, broadcast);

    let server = SessionServer::new(
        SessionServerConfig { host: config.host.clone(), port: config.port },
        router,
    );
    tracing::info!(host = %config.host, port = config.port, "starting game server");
    server.run().await?;
    tracing::info!("game server stopped, shutting down");
    Ok(())
}

fn build_lobby(
    people: &InMemoryPersonStorage,
    player_names: &[String],
    deck: Deck,
    max_rounds_factor: u32,
) -> Lobby {
    let mut names = player_names.iter();
    let host_name = names.next().expect("at least one player configured");
    let host_id = people.retrieve_guid(host_name).expect("just stored above");
    let host = LobbyMember::with_id(host_id, host_name.clone());
    let mut lobby = Lobby::new(host, GameSettings { deck, max_rounds_factor });
    for name in names {
        let id = people.retrieve_guid(name).expect("just stored above");
        lobby.add_member(LobbyMember::with_id(id, name.clone()));
    }
    lobby
}
