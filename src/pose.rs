//! Rover pose state: grid position plus cardinal heading.

use crate::error::RoverError;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A cardinal heading on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// The heading after a 90° left (counter-clockwise) turn.
    ///
    /// `turn_left` and [`turn_right`](Self::turn_right) are mutual inverses,
    /// and applying either four times is the identity.
    pub const fn turn_left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// The heading after a 90° right (clockwise) turn.
    pub const fn turn_right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Unit grid displacement of one forward step under this heading.
    ///
    /// North is `+y`, south `-y`, east `+x`, west `-x`.
    pub const fn step(self) -> IVec2 {
        match self {
            Heading::North => IVec2::new(0, 1),
            Heading::East => IVec2::new(1, 0),
            Heading::South => IVec2::new(0, -1),
            Heading::West => IVec2::new(-1, 0),
        }
    }

    /// Single-letter encoding used by the pose string format.
    pub const fn letter(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }

    /// Decodes a heading letter. Returns `None` for anything outside `NESW`.
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(Heading::North),
            'E' => Some(Heading::East),
            'S' => Some(Heading::South),
            'W' => Some(Heading::West),
            _ => None,
        }
    }
}

/// The full rover state: position on the grid plus heading.
///
/// A pose is an immutable value; driving a command sequence produces a new
/// pose rather than mutating in place. The external encoding is the
/// space-separated string `"<x> <y> <heading>"`, e.g. `"1 2 N"`, with decimal
/// (possibly negative) integer coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pose {
    /// Grid position. The grid is unbounded; coordinates may be negative.
    pub position: IVec2,

    /// Current cardinal heading.
    pub heading: Heading,
}

impl Pose {
    /// Constructs a pose from raw coordinates and a heading.
    pub const fn new(x: i32, y: i32, heading: Heading) -> Self {
        Self {
            position: IVec2::new(x, y),
            heading,
        }
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.position.x,
            self.position.y,
            self.heading.letter()
        )
    }
}

impl FromStr for Pose {
    type Err = RoverError;

    /// Parses `"<x> <y> <heading>"`.
    ///
    /// Fails with [`RoverError::InvalidPose`] on a wrong field count, a
    /// non-integer coordinate, or a heading letter outside `NESW`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| RoverError::InvalidPose {
            input: s.to_owned(),
            reason: reason.to_owned(),
        };

        let mut fields = s.split_whitespace();
        let (Some(x), Some(y), Some(heading), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(invalid("expected exactly three fields \"<x> <y> <heading>\""));
        };

        let x: i32 = x.parse().map_err(|_| invalid("x is not an integer"))?;
        let y: i32 = y.parse().map_err(|_| invalid("y is not an integer"))?;
        let heading = heading
            .chars()
            .next()
            .filter(|_| heading.len() == 1)
            .and_then(Heading::from_letter)
            .ok_or_else(|| invalid("heading must be one of N, E, S, W"))?;

        Ok(Pose::new(x, y, heading))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADINGS: [Heading; 4] = [
        Heading::North,
        Heading::East,
        Heading::South,
        Heading::West,
    ];

    #[test]
    fn turning_four_times_is_identity() {
        for h in HEADINGS {
            assert_eq!(h.turn_left().turn_left().turn_left().turn_left(), h);
            assert_eq!(h.turn_right().turn_right().turn_right().turn_right(), h);
        }
    }

    #[test]
    fn left_and_right_are_mutual_inverses() {
        for h in HEADINGS {
            assert_eq!(h.turn_left().turn_right(), h);
            assert_eq!(h.turn_right().turn_left(), h);
        }
    }

    #[test]
    fn step_moves_exactly_one_axis_by_one() {
        for h in HEADINGS {
            let step = h.step();
            assert_eq!(step.x.abs() + step.y.abs(), 1, "step for {h:?}");
        }
    }

    #[test]
    fn pose_round_trips_through_string_form() {
        for s in ["1 2 N", "0 0 W", "-3 17 E", "42 -1 S"] {
            let pose: Pose = s.parse().unwrap();
            assert_eq!(pose.to_string(), s);
        }
    }

    #[test]
    fn malformed_poses_are_rejected() {
        for s in ["", "1 2", "1 2 N extra", "a 2 N", "1 b N", "1 2 Q", "1 2 NE"] {
            assert!(
                s.parse::<Pose>().is_err(),
                "expected {s:?} to fail parsing"
            );
        }
    }
}
