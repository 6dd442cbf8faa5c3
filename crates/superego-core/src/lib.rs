//! Authoritative, transport-agnostic state machine for a SuperEgo game
//! session: lobby freezing, turn order, betting, settlement, and snapshot
//! construction. Owns no I/O; callers drive it through [`game::Game`] and
//! observe it through a boxed closure.

pub mod card;
pub mod carousel;
pub mod clock;
pub mod error;
pub mod game;
pub mod ledger;
pub mod lobby;
pub mod phase;
pub mod player;
pub mod state;
pub mod table;
pub mod timestamp;

pub use card::{Card, Deck, EmptyDeck};
pub use clock::{Clock, SystemClock};
pub use error::GameError;
pub use game::{Game, GameObserver};
pub use ledger::{Answer, BetPool, MAX_BET, MIN_BET};
pub use lobby::{GameSettings, Lobby, LobbyMember, UnknownMember};
pub use phase::{GameContext, Guess, Phase};
pub use player::{Player, PlayersPool, INITIAL_PLAYER_POINTS};
pub use state::{GamePhaseName, GameState, PlayerState};
pub use table::GameTable;
