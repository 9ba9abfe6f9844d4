//! Terminal client: claims a role and plays by polling the server.

use crate::client::{ClientError, MoveReply, PollingClient};
use crate::wire;
use anyhow::Result;
use noughts_core::{Board, Outcome, Role};
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::sleep;
use tracing::{debug, info, instrument};

/// Plays one game against whoever else is connected.
///
/// Players are prompted for a position (1-9) on their turn; observers only
/// watch. Returns the final outcome once the server reports one.
#[instrument(skip_all, fields(server = %client.base_url()))]
pub async fn run<R, W>(client: &PollingClient, poll: Duration, input: R, out: &mut W) -> Result<Outcome>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let role = client.claim_role().await?;
    info!(%role, "Joined game");
    match role {
        Role::Player(mark) => writeln!(out, "You are {}. Positions are numbered 1-9, left to right, top to bottom.", mark)?,
        Role::Observer => writeln!(out, "Both seats are taken, watching.")?,
    }

    let mut shown: Option<Board> = None;
    loop {
        let board = client.board().await?;
        if shown.as_ref() != Some(&board) {
            writeln!(out, "\n{}\n", board)?;
            shown = Some(board);
        }

        let outcome = client.status().await?;
        if outcome.is_decided() {
            writeln!(out, "Game over: {}", outcome)?;
            return Ok(outcome);
        }

        let Some(mark) = role.mark() else {
            sleep(poll).await;
            continue;
        };
        if client.turn().await? != mark {
            debug!("Waiting for opponent");
            sleep(poll).await;
            continue;
        }

        write!(out, "Your move ({}): ", mark)?;
        out.flush()?;
        let Some(line) = lines.next_line().await? else {
            return Err(ClientError::new("Input closed before the game ended".to_string()).into());
        };
        match client.place(role, wire::parse_code(&line)).await? {
            MoveReply::Accepted => debug!("Move accepted"),
            MoveReply::Rejected(reason) => writeln!(out, "Rejected: {}", reason)?,
        }
    }
}
