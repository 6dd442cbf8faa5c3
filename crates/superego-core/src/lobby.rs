use std::collections::HashMap;

use uuid::Uuid;

use crate::card::Deck;

/// A lobby participant before a game starts. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LobbyMember {
    id: Uuid,
    name: String,
}

impl LobbyMember {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    pub fn with_id(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Immutable game configuration chosen when the lobby is created.
pub struct GameSettings {
    pub deck: Deck,
    pub max_rounds_factor: u32,
}

/// A pre-game grouping of members with settings, frozen into a [`Game`] at
/// start. Member insertion order is preserved and becomes turn order.
///
/// [`Game`]: crate::game::Game
pub struct Lobby {
    id: Uuid,
    host: Uuid,
    members: HashMap<Uuid, LobbyMember>,
    order: Vec<Uuid>,
    settings: GameSettings,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("no member with id {0} in this lobby")]
pub struct UnknownMember(pub Uuid);

impl Lobby {
    pub fn new(host: LobbyMember, settings: GameSettings) -> Self {
        let id = Uuid::new_v4();
        let host_id = host.id();
        let order = vec![host_id];
        let mut members = HashMap::new();
        members.insert(host_id, host);
        Self {
            id,
            host: host_id,
            members,
            order,
            settings,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn host(&self) -> &LobbyMember {
        &self.members[&self.host]
    }

    pub fn add_member(&mut self, member: LobbyMember) {
        let id = member.id();
        if !self.members.contains_key(&id) {
            self.order.push(id);
        }
        self.members.insert(id, member);
    }

    pub fn remove_member(&mut self, id: Uuid) -> Result<(), UnknownMember> {
        if self.members.remove(&id).is_none() {
            return Err(UnknownMember(id));
        }
        self.order.retain(|m| *m != id);
        Ok(())
    }

    /// Members in insertion order — this order becomes turn order once the
    /// lobby is frozen into a [`Game`](crate::game::Game).
    pub fn members(&self) -> Vec<&LobbyMember> {
        self.order.iter().map(|id| &self.members[id]).collect()
    }

    pub fn members_count(&self) -> usize {
        self.order.len()
    }

    pub fn deck(&self) -> &Deck {
        &self.settings.deck
    }

    pub fn into_deck(self) -> Deck {
        self.settings.deck
    }

    /// `max_rounds_factor × member_count`, frozen at game start.
    pub fn max_rounds(&self) -> u32 {
        self.settings.max_rounds_factor * self.members_count() as u32
    }
}
