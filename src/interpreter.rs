//! Interpreter that replays a command sequence against a [`Pose`].
//!
//! The entry point is [`RoverInterpreter`]. Configure it with a
//! [`RoverConfig`], then call [`RoverInterpreter::drive`] with a starting
//! [`Pose`] and a command string. For the plain string-in/string-out contract
//! there is the [`move_rover`] convenience function.

use crate::command::RoverOp;
use crate::error::RoverError;
use crate::pose::Pose;
use glam::IVec2;

/// What to do with command characters outside `{M, L, R}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownCommandPolicy {
    /// Skip the character, leaving the rover state unchanged for that step.
    /// This is the default and matches the reference behavior.
    #[default]
    Ignore,
    /// Fail with [`RoverError::UnknownCommand`] on the first such character.
    Reject,
}

/// Configuration for command interpretation.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoverConfig {
    /// Policy for characters with no registered meaning.
    pub unknown_commands: UnknownCommandPolicy,
}

/// Replays command sequences to produce final poses.
///
/// The interpreter holds no mutable state; [`drive`](Self::drive) is pure and
/// safe to call concurrently from any number of callers.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoverInterpreter {
    config: RoverConfig,
}

impl RoverInterpreter {
    /// Creates a new interpreter with the given configuration.
    pub const fn new(config: RoverConfig) -> Self {
        Self { config }
    }

    /// Applies every command in `commands`, in order, to `start`.
    ///
    /// `M` steps one cell along the heading as updated by prior turns in the
    /// same sequence; `L` and `R` rotate in place and consume no grid
    /// movement. The turn maps are 4-cycles, so the heading is always valid.
    ///
    /// # Errors
    ///
    /// Only under [`UnknownCommandPolicy::Reject`], when a character outside
    /// `{M, L, R}` is encountered. The default policy skips such characters.
    pub fn drive(&self, start: Pose, commands: &str) -> Result<Pose, RoverError> {
        let mut delta = IVec2::ZERO;
        let mut heading = start.heading;

        for symbol in commands.chars() {
            match RoverOp::decode(symbol) {
                RoverOp::Move => delta += heading.step(),
                RoverOp::TurnLeft => heading = heading.turn_left(),
                RoverOp::TurnRight => heading = heading.turn_right(),
                RoverOp::Ignore => {
                    if self.config.unknown_commands == UnknownCommandPolicy::Reject {
                        return Err(RoverError::UnknownCommand(symbol));
                    }
                }
            }
        }

        Ok(Pose {
            position: start.position + delta,
            heading,
        })
    }
}

/// String-level pose transition: parse, drive, re-encode.
///
/// `initial` must be `"<x> <y> <heading>"` with heading in `NESW`; `commands`
/// is a string of `M`/`L`/`R` characters (others are ignored). Returns the
/// final pose in the same encoding.
///
/// ```
/// assert_eq!(rover_pose::move_rover("1 2 N", "LMLMLMLMM").unwrap(), "1 3 N");
/// ```
///
/// # Errors
///
/// [`RoverError::InvalidPose`] if `initial` does not parse.
pub fn move_rover(initial: &str, commands: &str) -> Result<String, RoverError> {
    let start: Pose = initial.parse()?;
    let interpreter = RoverInterpreter::default();
    Ok(interpreter.drive(start, commands)?.to_string())
}
