//! WebSocket transport for a SuperEgo game session: wire decoding,
//! issuer-authorized use cases, the single-writer game actor, event
//! routing, and the session server itself.

pub mod actor;
pub mod broadcast;
pub mod connection;
pub mod error;
pub mod events;
pub mod feedback;
mod handlers;
pub mod router;
pub mod serialization;
pub mod server;
pub mod usecases;

pub use actor::{spawn_game_actor, GameHandle};
pub use error::NetError;
pub use events::{Event, EventAction};
pub use router::Router;
pub use server::{SessionServer, SessionServerConfig};
