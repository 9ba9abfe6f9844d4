//! Shared, lock-guarded access to the single game session.

use crate::error::MoveError;
use crate::session::{Role, Session};
use crate::types::{Board, Mark, Outcome};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, instrument};

/// Cloneable handle to the one session every client plays in.
///
/// Each operation holds the lock for its whole read-modify-write, so two
/// concurrent moves onto the same cell can never both succeed.
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<Session>>,
}

impl SharedSession {
    /// Wraps a fresh session.
    #[instrument]
    pub fn new() -> Self {
        debug!("Creating shared session");
        Self::default()
    }

    // Every mutation is a single step, so a panic elsewhere cannot leave the
    // session half-updated.
    fn lock(&self) -> MutexGuard<'_, Session> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`Session::claim_role`].
    pub fn claim_role(&self) -> Role {
        self.lock().claim_role()
    }

    /// See [`Session::attempt_move`].
    pub fn attempt_move(&self, role: Role, position: u8) -> Result<Outcome, MoveError> {
        self.lock().attempt_move(role, position)
    }

    /// See [`Session::current_turn`].
    pub fn current_turn(&self) -> Mark {
        self.lock().current_turn()
    }

    /// See [`Session::outcome`].
    pub fn outcome(&self) -> Outcome {
        self.lock().outcome()
    }

    /// Copy of the current board.
    pub fn board(&self) -> Board {
        self.lock().board().clone()
    }

    /// See [`Session::reset`].
    pub fn reset(&self) {
        self.lock().reset();
    }

    /// Runs `f` against the session while holding the lock.
    pub fn with<T>(&self, f: impl FnOnce(&Session) -> T) -> T {
        f(&self.lock())
    }
}
