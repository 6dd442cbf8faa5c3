//! Two listeners registered before the game starts; both must see the same
//! three STAT frames, in the same order, as the round plays out.

use tokio::sync::mpsc;

use superego_core::{Answer, Deck, Game, GameSettings, Guess, Lobby, LobbyMember, SystemClock};
use superego_net::broadcast::Broadcast;
use superego_net::spawn_game_actor;

fn card() -> superego_core::Card {
    superego_core::Card {
        question: "q".into(),
        answer_a: "a".into(),
        answer_b: "b".into(),
        answer_c: "c".into(),
    }
}

fn phase_of(frame: &str) -> String {
    let value: serde_json::Value = serde_json::from_str(frame).unwrap();
    value["data"]["phase"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn both_listeners_see_the_same_three_stat_frames_in_order() {
    let deck = Deck::new("d", vec![card()]).unwrap();
    let host = LobbyMember::new("host");
    let mut lobby = Lobby::new(host, GameSettings { deck, max_rounds_factor: 1 });
    lobby.add_member(LobbyMember::new("p2"));

    let broadcast = Broadcast::new();
    let (tx_a, mut rx_a) = mpsc::unbounded_channel();
    let (tx_b, mut rx_b) = mpsc::unbounded_channel();
    broadcast.add_listener(tx_a);
    broadcast.add_listener(tx_b);

    let observer_broadcast = broadcast.clone();
    let observer = Box::new(move |state: superego_core::GameState| {
        observer_broadcast.broadcast(superego_net::feedback::game_state(&state));
    });
    // Fires the initial ANSWER_PHASE snapshot, already reaching both listeners.
    let game = Game::new(lobby, Box::new(SystemClock), observer);
    let handle = spawn_game_actor(game);

    let current = handle.current_player().await;
    let other = handle
        .players()
        .await
        .into_iter()
        .find(|p| p.id() != current.id())
        .unwrap();

    handle.answer(current.clone(), Answer::A).await.unwrap();
    handle.guess(other, Guess { answer: Answer::A, bet: 1 }).await.unwrap();

    for rx in [&mut rx_a, &mut rx_b] {
        let frames: Vec<String> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
        assert_eq!(frames.len(), 3, "expected exactly 3 STAT frames, got {frames:?}");
        let phases: Vec<String> = frames.iter().map(|f| phase_of(f)).collect();
        assert_eq!(phases, vec!["ANSWER_PHASE", "GUESS_PHASE", "RESULT_PHASE"]);
    }
}
