//! Polling client and terminal play loop against a live server.

use noughts_core::{Mark, Outcome, Role};
use noughts_server::{AppState, MoveReply, PollingClient, discovery, play, router};
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;
use tokio::net::TcpListener;

const POLL: Duration = Duration::from_millis(10);

async fn spawn_server() -> (PollingClient, u16) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, router(AppState::default())).await.unwrap();
    });
    (PollingClient::new(format!("http://127.0.0.1:{}/", port)), port)
}

/// Places O's moves in order whenever it is O's turn, until the game ends.
///
/// Roles are not bound to clients, so O can move without claiming a seat.
async fn play_o(client: PollingClient, moves: Vec<u8>) {
    let mut moves = moves.into_iter();
    loop {
        if client.status().await.unwrap().is_decided() {
            return;
        }
        if client.turn().await.unwrap() == Mark::O {
            let Some(pos) = moves.next() else { return };
            assert_eq!(client.place(Role::Player(Mark::O), pos).await.unwrap(), MoveReply::Accepted);
        }
        tokio::time::sleep(POLL).await;
    }
}

#[tokio::test]
async fn test_client_round_trip() {
    let (client, _) = spawn_server().await;
    assert_eq!(client.claim_role().await.unwrap(), Role::Player(Mark::X));
    assert_eq!(client.claim_role().await.unwrap(), Role::Player(Mark::O));
    assert_eq!(client.claim_role().await.unwrap(), Role::Observer);

    let x = Role::Player(Mark::X);
    assert_eq!(client.place(x, 5).await.unwrap(), MoveReply::Accepted);
    assert_eq!(client.turn().await.unwrap(), Mark::O);
    assert!(matches!(client.place(x, 1).await.unwrap(), MoveReply::Rejected(_)));
    assert!(matches!(client.place(Role::Player(Mark::O), 5).await.unwrap(), MoveReply::Rejected(_)));

    let board = client.board().await.unwrap();
    assert_eq!(board.render(), "- - -\n- X -\n- - -");
    assert_eq!(client.status().await.unwrap(), Outcome::InProgress);

    client.print().await.unwrap();
    client.reset().await.unwrap();
    assert_eq!(client.turn().await.unwrap(), Mark::X);
    assert_eq!(client.claim_role().await.unwrap(), Role::Player(Mark::X));
}

#[tokio::test]
async fn test_play_loop_wins_top_row() {
    let (client, _) = spawn_server().await;

    let player = client.clone();
    let x_game = tokio::spawn(async move {
        let mut out = Vec::new();
        // "9" is rejected once O has taken it; the loop prompts again.
        let outcome = play::run(&player, POLL, &b"1\n2\n9\n3\n"[..], &mut out).await.unwrap();
        (outcome, String::from_utf8(out).unwrap())
    });

    // The play loop is the only claimant, so it plays X; O moves without claiming.
    play_o(client.clone(), vec![4, 9]).await;

    let (outcome, transcript) = x_game.await.unwrap();
    assert_eq!(outcome, Outcome::Won(Mark::X));
    assert!(transcript.contains("You are X"));
    assert!(transcript.contains("Rejected"));
    assert!(transcript.contains("Game over: X wins"));
}

#[tokio::test]
async fn test_observer_watches_until_the_end() {
    let (client, _) = spawn_server().await;
    client.claim_role().await.unwrap();
    client.claim_role().await.unwrap();

    let watcher = client.clone();
    let watch = tokio::spawn(async move {
        let mut out = Vec::new();
        let outcome = play::run(&watcher, POLL, &b""[..], &mut out).await.unwrap();
        (outcome, String::from_utf8(out).unwrap())
    });

    let x = Role::Player(Mark::X);
    let o = Role::Player(Mark::O);
    for (role, pos) in [(x, 7), (o, 1), (x, 8), (o, 2), (x, 9)] {
        assert_eq!(client.place(role, pos).await.unwrap(), MoveReply::Accepted);
    }

    let (outcome, transcript) = watch.await.unwrap();
    assert_eq!(outcome, Outcome::Won(Mark::X));
    assert!(transcript.contains("watching"));
}

#[tokio::test]
async fn test_discovery_probe_finds_live_server() {
    let (_, port) = spawn_server().await;
    let ips = [IpAddr::V4(Ipv4Addr::LOCALHOST)];
    let found = discovery::first_reachable(&ips, port, Duration::from_secs(2)).await;
    assert_eq!(found.map(|addr| addr.port()), Some(port));
}
