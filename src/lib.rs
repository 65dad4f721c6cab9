//! Optimal 8-puzzle solving with A*.
//!
//! [`Search`] pulls the cheapest frontier node from a d-ary [`OpenSet`],
//! settles its [`Fingerprint`] in a [`ClosedSet`], and pushes unsettled
//! successors scored by the [`Manhattan`] estimate. A solvable start ends
//! in [`Outcome::Solved`]; a start from the other parity class settles every
//! reachable board and ends in [`Outcome::Exhausted`].

pub mod closed_set;
pub mod error;
pub mod fingerprint;
pub mod heuristic;
pub mod open_set;
pub mod path;
pub mod puzzle;
pub mod search;

pub use closed_set::ClosedSet;
pub use error::{BoardError, SolveError};
pub use fingerprint::Fingerprint;
pub use heuristic::{manhattan, Manhattan};
pub use open_set::{OpenSet, DEFAULT_ARITY};
pub use path::{Solution, Step};
pub use puzzle::{Board, Move, ROW, SIZE};
pub use search::{solve, Outcome, Search, SearchConfig, SearchReport, SearchStats};
