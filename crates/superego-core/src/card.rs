use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::carousel::Carousel;

/// An immutable trivia card: a question and its three possible answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub question: String,
    pub answer_a: String,
    pub answer_b: String,
    pub answer_c: String,
}

/// An ordered, rotatable, shufflable sequence of [`Card`]s.
///
/// Construction fails on an empty card list: a deck must always have a
/// current card to show.
#[derive(Debug, Clone)]
pub struct Deck {
    id: Uuid,
    name: String,
    cards: Vec<Card>,
    carousel: Carousel<Card>,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("a deck must contain at least one card")]
pub struct EmptyDeck;

impl Deck {
    pub fn new(name: impl Into<String>, cards: Vec<Card>) -> Result<Self, EmptyDeck> {
        if cards.is_empty() {
            return Err(EmptyDeck);
        }
        let carousel = Carousel::new(cards.clone());
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            cards,
            carousel,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reorders the underlying sequence with a uniform random permutation
    /// and resets the cursor back to the front.
    pub fn shuffle(&mut self) {
        let mut rng = rand::thread_rng();
        self.cards.shuffle(&mut rng);
        self.carousel.replace(self.cards.clone());
    }

    pub fn advance_card(&mut self) {
        self.carousel.pop_push();
    }

    pub fn current_card(&self) -> &Card {
        self.carousel
            .front()
            .expect("Deck invariant: carousel is never empty after construction")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(q: &str) -> Card {
        Card {
            question: q.to_string(),
            answer_a: "a".to_string(),
            answer_b: "b".to_string(),
            answer_c: "c".to_string(),
        }
    }

    #[test]
    fn empty_deck_rejected() {
        assert_eq!(Deck::new("empty", vec![]), Err(EmptyDeck));
    }

    #[test]
    fn advance_card_rotates() {
        let mut deck = Deck::new("d", vec![card("q1"), card("q2"), card("q3")]).unwrap();
        assert_eq!(deck.current_card().question, "q1");
        deck.advance_card();
        assert_eq!(deck.current_card().question, "q2");
    }

    #[test]
    fn shuffle_resets_cursor_to_front_of_new_order() {
        let mut deck = Deck::new("d", vec![card("q1"), card("q2"), card("q3")]).unwrap();
        deck.advance_card();
        deck.shuffle();
        // after a shuffle the current card is whatever sits at index 0 of
        // the freshly shuffled sequence, not the pre-shuffle cursor position
        assert!(deck.cards.iter().any(|c| c.question == deck.current_card().question));
    }
}
