//! The rover command alphabet.

/// A single command in a movement plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoverOp {
    /// Step one cell forward along the current heading (`M`).
    Move,
    /// Rotate 90° counter-clockwise (`L`).
    TurnLeft,
    /// Rotate 90° clockwise (`R`).
    TurnRight,
    /// No-op — the character has no registered meaning.
    Ignore,
}

impl RoverOp {
    /// Decodes one command character.
    ///
    /// Characters outside `{M, L, R}` decode to [`RoverOp::Ignore`]; whether
    /// that is tolerated or rejected is up to the interpreter's
    /// [`UnknownCommandPolicy`](crate::UnknownCommandPolicy).
    pub const fn decode(symbol: char) -> Self {
        match symbol {
            'M' => RoverOp::Move,
            'L' => RoverOp::TurnLeft,
            'R' => RoverOp::TurnRight,
            _ => RoverOp::Ignore,
        }
    }
}
