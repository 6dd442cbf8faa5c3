use uuid::Uuid;

use crate::carousel::Carousel;
use crate::lobby::LobbyMember;

pub const INITIAL_PLAYER_POINTS: u32 = 10;

/// A player derived from a [`LobbyMember`] at game start.
///
/// Equality is by identifier, matching the original's `Player.__eq__`.
#[derive(Debug, Clone)]
pub struct Player {
    id: Uuid,
    name: String,
    points: u32,
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Player {}

impl Player {
    pub fn from_member(member: &LobbyMember) -> Self {
        Self {
            id: member.id(),
            name: member.name().to_string(),
            points: INITIAL_PLAYER_POINTS,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn has_points(&self) -> bool {
        self.points > 0
    }

    pub fn can_bet(&self, amount: u32) -> bool {
        self.points >= amount
    }

    /// Fails without mutating state if `amount` would drive points negative.
    pub fn take(&mut self, amount: u32) -> Result<(), TakeWouldUnderflow> {
        if amount > self.points {
            return Err(TakeWouldUnderflow {
                player: self.id,
                amount,
                points: self.points,
            });
        }
        self.points -= amount;
        Ok(())
    }

    pub fn give(&mut self, amount: u32) {
        self.points += amount;
    }
}

/// Internal invariant violation: `take` would have gone negative. This must
/// never happen in normal operation — `PointsBank::take` is only ever
/// invoked after `BetPool`/`can_bet` has already validated affordability.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("tried to take {amount} points from player {player} having {points} points")]
pub struct TakeWouldUnderflow {
    pub player: Uuid,
    pub amount: u32,
    pub points: u32,
}

/// Carousel of [`Player`]s preserving insertion (turn) order. The front of
/// the carousel is always the current answerer.
#[derive(Debug, Clone)]
pub struct PlayersPool {
    carousel: Carousel<Player>,
}

impl PlayersPool {
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            carousel: Carousel::new(players),
        }
    }

    pub fn advance_player(&mut self) {
        self.carousel.pop_push();
    }

    /// Removes `player` from the carousel, preserving the relative order of
    /// the remaining players.
    pub fn kick(&mut self, player: &Player) {
        self.carousel.find_remove(|p| p.id() != player.id());
    }

    pub fn current_player(&self) -> &Player {
        self.carousel
            .front()
            .expect("PlayersPool invariant: never empty during an active game")
    }

    pub fn all_players(&self) -> Vec<Player> {
        self.carousel.items().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.carousel.len()
    }

    pub fn get(&self, id: Uuid) -> Option<&Player> {
        self.carousel.items().find(|p| p.id() == id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Player> {
        self.carousel.items_mut().find(|p| p.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str) -> LobbyMember {
        LobbyMember::new(name)
    }

    #[test]
    fn take_fails_without_mutating_on_underflow() {
        let mut p = Player::from_member(&member("p1"));
        let before = p.points();
        assert!(p.take(before + 1).is_err());
        assert_eq!(p.points(), before);
    }

    #[test]
    fn kick_preserves_relative_order() {
        let a = Player::from_member(&member("a"));
        let b = Player::from_member(&member("b"));
        let c = Player::from_member(&member("c"));
        let mut pool = PlayersPool::new(vec![a.clone(), b.clone(), c.clone()]);
        pool.kick(&b);
        let remaining: Vec<_> = pool.all_players().iter().map(|p| p.name().to_string()).collect();
        assert_eq!(remaining, vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn advance_rotates_current_player() {
        let a = Player::from_member(&member("a"));
        let b = Player::from_member(&member("b"));
        let mut pool = PlayersPool::new(vec![a.clone(), b.clone()]);
        assert_eq!(pool.current_player().id(), a.id());
        pool.advance_player();
        assert_eq!(pool.current_player().id(), b.id());
    }
}
