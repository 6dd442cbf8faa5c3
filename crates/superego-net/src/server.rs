//! Binds a listener, spawns one handler task per accepted socket, and
//! installs SIGINT/SIGTERM handlers that call `stop()`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Notify;
use tokio::task::JoinSet;

use crate::connection::handle_connection;
use crate::router::Router;

pub struct SessionServerConfig {
    pub host: String,
    pub port: u16,
}

/// Owns the listener and the in-flight handler tasks for one game session.
///
/// Takes an already-assembled [`Router`] rather than building one, since
/// the router's `Broadcast` must be the same instance the game's observer
/// was wired to at construction time (see the binary's `main`).
pub struct SessionServer {
    config: SessionServerConfig,
    router: Arc<Router>,
    stopped: Arc<AtomicBool>,
    stop_signal: Arc<Notify>,
}

impl SessionServer {
    pub fn new(config: SessionServerConfig, router: Router) -> Self {
        Self {
            config,
            router: Arc::new(router),
            stopped: Arc::new(AtomicBool::new(false)),
            stop_signal: Arc::new(Notify::new()),
        }
    }

    /// Idempotent: calling this more than once, or after `run` has already
    /// returned, has no further effect.
    pub fn stop(&self) {
        if !self.stopped.swap(true, Ordering::SeqCst) {
            // `notify_one`, not `notify_waiters`: `run` may not be waiting
            // yet, and `notify_one` stores a permit for the next `notified()`.
            self.stop_signal.notify_one();
        }
    }

    /// Blocks until `stop()` is called (directly, or via SIGINT/SIGTERM).
    pub async fn run(&self) -> std::io::Result<()> {
        let listener = TcpListener::bind((self.config.host.as_str(), self.config.port)).await?;
        tracing::info!(host = %self.config.host, port = self.config.port, "session server listening");

        let stop_on_signal = self.stopped.clone();
        let notify_on_signal = self.stop_signal.clone();
        tokio::spawn(async move {
            wait_for_termination_signal().await;
            if !stop_on_signal.swap(true, Ordering::SeqCst) {
                notify_on_signal.notify_one();
            }
        });

        let mut handlers = JoinSet::new();
        loop {
            tokio::select! {
                _ = self.stop_signal.notified() => break,
                accepted = listener.accept() => {
                    match accepted {
                        Ok((stream, _addr)) => {
                            let router = self.router.clone();
                            handlers.spawn(async move {
                                handle_connection(stream, &router).await;
                            });
                        }
                        Err(error) => tracing::warn!(%error, "accept failed"),
                    }
                }
            }
        }

        handlers.abort_all();
        while handlers.join_next().await.is_some() {}
        tracing::info!("session server stopped");
        Ok(())
    }
}

#[cfg(unix)]
async fn wait_for_termination_signal() {
    use tokio::signal::unix::{signal, SignalKind};
    let mut sigterm = signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = sigterm.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_termination_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::broadcast::Broadcast;
    use superego_core::{Deck, Game, GameSettings, Lobby, LobbyMember, SystemClock};

    fn router() -> Router {
        let deck = Deck::new(
            "d",
            vec![superego_core::Card {
                question: "q".into(),
                answer_a: "a".into(),
                answer_b: "b".into(),
                answer_c: "c".into(),
            }],
        )
        .unwrap();
        let host = LobbyMember::new("host");
        let mut lobby = Lobby::new(host, GameSettings { deck, max_rounds_factor: 1 });
        lobby.add_member(LobbyMember::new("p2"));
        let game = Game::new(lobby, Box::new(SystemClock), Box::new(|_| {}));
        let handle = crate::actor::spawn_game_actor(game);
        Router::new(handle, Broadcast::new())
    }

    #[tokio::test]
    async fn stop_before_run_makes_run_return_immediately() {
        let server = SessionServer::new(
            SessionServerConfig { host: "127.0.0.1".to_string(), port: 0 },
            router(),
        );
        server.stop();
        server.run().await.unwrap();
    }

    #[tokio::test]
    async fn stop_is_idempotent() {
        let server = SessionServer::new(
            SessionServerConfig { host: "127.0.0.1".to_string(), port: 0 },
            router(),
        );
        server.stop();
        server.stop();
    }
}
