//! Two-player session coordination: role assignment and turn enforcement.

use crate::error::MoveError;
use crate::position::Position;
use crate::types::{Board, Mark, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Role handed to a client that asks to join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Plays the given mark.
    Player(Mark),
    /// Both marks were already taken; may watch but never move.
    Observer,
}

impl Role {
    /// Wire code (`0` observer, otherwise the mark's code).
    pub fn code(self) -> u8 {
        match self {
            Role::Player(mark) => mark.code(),
            Role::Observer => 0,
        }
    }

    /// Decodes a wire code. Unknown codes are the observer sentinel.
    pub fn from_code(code: u8) -> Self {
        Mark::from_code(code).map_or(Role::Observer, Role::Player)
    }

    /// The mark this role plays, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Role::Player(mark) => Some(mark),
            Role::Observer => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Player(mark) => write!(f, "{}", mark),
            Role::Observer => write!(f, "observer"),
        }
    }
}

/// The single shared game: board, claimed roles and active turn.
///
/// Roles are handed out by call order (first claimant plays X, second O) with no
/// notion of client identity. The turn only changes on an accepted placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    board: Board,
    claimed_roles: u8,
    active_turn: Mark,
}

impl Session {
    /// Creates a fresh session: empty board, no roles claimed, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            claimed_roles: 0,
            active_turn: Mark::X,
        }
    }

    /// Claims the next free role.
    ///
    /// Returns X, then O, then [`Role::Observer`] for every later call until reset.
    #[instrument(skip(self), fields(claimed = self.claimed_roles))]
    pub fn claim_role(&mut self) -> Role {
        let role = match self.claimed_roles {
            0 => Role::Player(Mark::X),
            1 => Role::Player(Mark::O),
            _ => {
                debug!("Both roles taken, handing out observer");
                return Role::Observer;
            }
        };
        self.claimed_roles += 1;
        info!(%role, "Role claimed");
        role
    }

    /// Attempts to place the role's mark at the 1-based `position`.
    ///
    /// On success the turn passes to the other mark and the resulting outcome is
    /// returned.
    ///
    /// # Errors
    ///
    /// Checked in order, each leaving the session unchanged:
    /// - [`MoveError::GameOver`] if the game already has a result
    /// - [`MoveError::WrongTurn`] if `role` does not hold the active turn
    /// - [`MoveError::InvalidPosition`] if `position` is outside `1..=9`
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark
    #[instrument(skip(self), fields(active = %self.active_turn))]
    pub fn attempt_move(&mut self, role: Role, position: u8) -> Result<Outcome, MoveError> {
        let outcome = self.board.outcome();
        if outcome.is_decided() {
            warn!(%outcome, "Move after the game ended");
            return Err(MoveError::GameOver(outcome));
        }

        if role.mark() != Some(self.active_turn) {
            warn!(%role, "Move out of turn");
            return Err(MoveError::WrongTurn {
                role,
                active: self.active_turn,
            });
        }

        let position = Position::from_number(position)?;
        self.board.place(self.active_turn, position).map_err(|e| {
            warn!(error = %e, "Placement refused");
            MoveError::from(e)
        })?;

        self.active_turn = self.active_turn.opponent();
        let outcome = self.board.outcome();
        info!(%position, next = %self.active_turn, %outcome, "Move accepted");
        Ok(outcome)
    }

    /// Mark allowed to move next.
    pub fn current_turn(&self) -> Mark {
        self.active_turn
    }

    /// Number of roles handed out since the last reset (0-2).
    pub fn claimed_roles(&self) -> u8 {
        self.claimed_roles
    }

    /// Clears the board, releases both roles and gives the turn back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.claimed_roles = 0;
        self.active_turn = Mark::X;
        info!("Session reset");
    }

    /// Current outcome of the board.
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
