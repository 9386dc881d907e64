//! # rover-pose
//!
//! A pure pose-transition crate for grid rovers. It replays a sequence of
//! single-character commands (`M` move, `L` turn left, `R` turn right) against
//! an `(x, y, heading)` pose on an unbounded integer grid and returns the
//! resulting pose.
//!
//! The computation is a single deterministic state transition: no I/O, no
//! shared state, no boundary or obstacle checks. It is meant to be embedded in
//! a larger rover-control harness that supplies poses and command plans.

pub mod command;
pub mod error;
pub mod interpreter;
pub mod pose;

pub use command::*;
pub use error::*;
pub use interpreter::*;
pub use pose::*;
