//! Storage is out of scope for the game session itself — these traits are
//! the narrow contract the rest of the system depends on, plus in-memory
//! implementations good enough to back the demo binary and tests.

use std::collections::HashMap;
use std::sync::RwLock;

use superego_core::Card;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("no person named {0:?}")]
    UnknownPerson(String),
    #[error("deck storage is empty")]
    EmptyDeck,
}

pub trait PersonStorage: Send + Sync {
    fn store(&self, name: &str) -> Uuid;
    fn retrieve_guid(&self, name: &str) -> Result<Uuid, StorageError>;
    fn retrieve_all(&self) -> HashMap<String, Uuid>;
    fn retrieve_many(&self, guids: &[Uuid]) -> HashMap<String, Uuid>;
}

pub trait CardStorage: Send + Sync {
    fn store(&self, card: Card);
    fn get_all(&self) -> Vec<Card>;
}

pub trait DeckStorage: Send + Sync {
    fn get(&self) -> Result<Vec<Card>, StorageError>;
}

/// An in-memory [`PersonStorage`]. Names are unique; re-storing a known name
/// is a no-op that returns the existing identifier.
#[derive(Default)]
pub struct InMemoryPersonStorage {
    people: RwLock<HashMap<String, Uuid>>,
}

impl PersonStorage for InMemoryPersonStorage {
    fn store(&self, name: &str) -> Uuid {
        let mut people = self.people.write().expect("lock poisoned");
        *people.entry(name.to_string()).or_insert_with(Uuid::new_v4)
    }

    fn retrieve_guid(&self, name: &str) -> Result<Uuid, StorageError> {
        self.people
            .read()
            .expect("lock poisoned")
            .get(name)
            .copied()
            .ok_or_else(|| StorageError::UnknownPerson(name.to_string()))
    }

    fn retrieve_all(&self) -> HashMap<String, Uuid> {
        self.people.read().expect("lock poisoned").clone()
    }

    fn retrieve_many(&self, guids: &[Uuid]) -> HashMap<String, Uuid> {
        self.people
            .read()
            .expect("lock poisoned")
            .iter()
            .filter(|(_, guid)| guids.contains(guid))
            .map(|(name, guid)| (name.clone(), *guid))
            .collect()
    }
}

#[derive(Default)]
pub struct InMemoryCardStorage {
    cards: RwLock<Vec<Card>>,
}

impl CardStorage for InMemoryCardStorage {
    fn store(&self, card: Card) {
        self.cards.write().expect("lock poisoned").push(card);
    }

    fn get_all(&self) -> Vec<Card> {
        self.cards.read().expect("lock poisoned").clone()
    }
}

/// Hands out whatever the backing [`CardStorage`] currently holds.
pub struct StoredDeck<'a> {
    cards: &'a dyn CardStorage,
}

impl<'a> StoredDeck<'a> {
    pub fn new(cards: &'a dyn CardStorage) -> Self {
        Self { cards }
    }
}

impl DeckStorage for StoredDeck<'_> {
    fn get(&self) -> Result<Vec<Card>, StorageError> {
        let cards = self.cards.get_all();
        if cards.is_empty() {
            return Err(StorageError::EmptyDeck);
        }
        Ok(cards)
    }
}
