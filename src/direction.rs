//! Mapping orientation to direction commands.

use core::fmt::{Display, Formatter};

use crate::orientation::Angles;

/// Direction command derived from hand orientation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Stop,
    Forward,
    Backward,
    Left,
    Right,
    RotateLeft,
    RotateRight,
}

impl Direction {
    #[cfg(test)]
    pub(crate) const ALL: [Direction; 7] = [
        Direction::Stop,
        Direction::Forward,
        Direction::Backward,
        Direction::Left,
        Direction::Right,
        Direction::RotateLeft,
        Direction::RotateRight,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Stop => "STOP",
            Self::Forward => "FORWARD",
            Self::Backward => "BACKWARD",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::RotateLeft => "ROTATE_LEFT",
            Self::RotateRight => "ROTATE_RIGHT",
        }
    }

    /// Arrow shown next to the label; empty for `Stop`.
    pub const fn indicator(self) -> &'static str {
        match self {
            Self::Stop => "",
            Self::Forward => "↑",
            Self::Backward => "↓",
            Self::Left => "←",
            Self::Right => "→",
            Self::RotateLeft => "↺",
            Self::RotateRight => "↻",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification thresholds in degrees. All comparisons are strict.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thresholds {
    /// Roll below this is LEFT
    pub left: f32,
    /// Roll above this is RIGHT
    pub right: f32,
    /// Pitch above this is FORWARD
    pub forward: f32,
    /// Pitch below this is BACKWARD
    pub backward: f32,
    /// Yaw magnitude above this is a rotation
    pub turn: f32,
    /// Deviations within ±dead_zone never trigger
    pub dead_zone: f32,
}

impl Thresholds {
    pub const LEFT: f32 = -15.0;
    pub const RIGHT: f32 = 15.0;
    pub const FORWARD: f32 = 15.0;
    pub const BACKWARD: f32 = -15.0;
    pub const TURN: f32 = 20.0;
    pub const DEAD_ZONE: f32 = 10.0;
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            left: Self::LEFT,
            right: Self::RIGHT,
            forward: Self::FORWARD,
            backward: Self::BACKWARD,
            turn: Self::TURN,
            dead_zone: Self::DEAD_ZONE,
        }
    }
}

/// Label for one set of angles.
///
/// Rules run pitch, then roll, then yaw, each later match replacing the earlier one, so
/// a strong yaw always reports a rotation whatever the tilt. Nothing matching is STOP.
pub fn classify(angles: Angles, t: &Thresholds) -> Direction {
    let mut direction = Direction::Stop;

    if angles.y > t.dead_zone && angles.y > t.forward {
        direction = Direction::Forward;
    } else if angles.y < -t.dead_zone && angles.y < t.backward {
        direction = Direction::Backward;
    }

    if angles.x < -t.dead_zone && angles.x < t.left {
        direction = Direction::Left;
    } else if angles.x > t.dead_zone && angles.x > t.right {
        direction = Direction::Right;
    }

    let yaw = libm::fabsf(angles.z);
    if yaw > t.dead_zone && yaw > t.turn {
        direction = if angles.z > 0.0 {
            Direction::RotateRight
        } else {
            Direction::RotateLeft
        };
    }

    direction
}

/// Flicker suppression for the reported direction.
///
/// A label becomes the stable one only after `required` consecutive cycles produce it;
/// until then the previous stable label stays in effect. Starts out stable at STOP.
/// Purely presentational: it never feeds back into the orientation estimate.
#[derive(Copy, Clone, Debug)]
pub struct Debouncer {
    required: u8,
    candidate: Direction,
    count: u8,
    stable: Direction,
}

impl Debouncer {
    pub fn new(required: u8) -> Self {
        Self {
            required: required.max(1),
            candidate: Direction::Stop,
            count: 0,
            stable: Direction::Stop,
        }
    }

    pub fn stable(&self) -> Direction {
        self.stable
    }

    /// Feed one classification. Returns the label when it is confirmed this cycle.
    pub fn update(&mut self, direction: Direction) -> Option<Direction> {
        if direction == self.candidate {
            self.count = self.count.saturating_add(1);
        } else {
            self.candidate = direction;
            self.count = 1;
        }

        if self.count >= self.required {
            if self.stable != direction {
                info!("direction {} -> {}", self.stable, direction);
            }
            self.stable = direction;
            Some(direction)
        } else {
            None
        }
    }
}
