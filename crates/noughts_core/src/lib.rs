//! Tic-tac-toe board engine and two-player session coordinator.
//!
//! # Architecture
//!
//! - **Board engine** ([`Board`]): nine cells, placement, outcome evaluation
//! - **Rules** ([`WIN_LINES`], [`evaluate`]): the fixed win-line table
//! - **Session** ([`Session`]): role claiming and turn enforcement over one board
//! - **Handle** ([`SharedSession`]): the session behind a lock, shared by request handlers
//!
//! # Example
//!
//! ```
//! use noughts_core::{Mark, Outcome, Role, Session};
//!
//! let mut session = Session::new();
//! let x = session.claim_role();
//! let o = session.claim_role();
//! assert_eq!(x, Role::Player(Mark::X));
//!
//! session.attempt_move(x, 5).unwrap();
//! assert!(session.attempt_move(x, 1).is_err()); // O's turn now
//! assert_eq!(session.attempt_move(o, 1), Ok(Outcome::InProgress));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod handle;
mod position;
mod rules;
mod session;
mod types;

pub use error::{MoveError, PlaceError};
pub use handle::SharedSession;
pub use position::Position;
pub use rules::{WIN_LINES, evaluate, is_full, winning_mark};
pub use session::{Role, Session};
pub use types::{Board, Cell, Mark, Outcome};
