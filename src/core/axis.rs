//! Coordinate axis selector shared by unit vectors and rotation factories.

use std::fmt;

use crate::error::LinalgError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
    W,
}

impl Axis {
    /// Component index of the axis (X = 0 ... W = 3).
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
            Axis::W => 3,
        }
    }

    pub fn name(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
            Axis::W => 'w',
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = LinalgError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            3 => Ok(Axis::W),
            other => Err(LinalgError::InvalidAxis(other)),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name().to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_from_round_trips_index() {
        for i in 0..4 {
            assert_eq!(Axis::try_from(i).unwrap().index(), i);
        }
        assert_eq!(Axis::try_from(4), Err(LinalgError::InvalidAxis(4)));
    }
}
