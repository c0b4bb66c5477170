//! Tile and pixel coordinate types.
//!
//! The world is a grid of square tiles, each [`TILE_SIZE`] pixels wide. Map
//! coordinates are absolute pixels measured from the upper-left corner of the
//! map; the host viewport is applied only when talking to the screen.
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Width and height of one map tile in pixels.
pub const TILE_SIZE: i32 = 64;

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Pixel-space point or offset.
///
/// Used both for absolute map positions and for relative offsets (viewing
/// offset, locked cursor offset, movement deltas).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelVector {
    pub x: i32,
    pub y: i32,
}

impl PixelVector {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Tile containing this pixel.
    pub const fn to_tile(self) -> Position {
        Position::new(self.x.div_euclid(TILE_SIZE), self.y.div_euclid(TILE_SIZE))
    }

    pub const fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Component-wise addition, `None` if either axis overflows.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self::new(self.x.checked_add(rhs.x)?, self.y.checked_add(rhs.y)?))
    }
}

impl Add for PixelVector {
    type Output = PixelVector;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for PixelVector {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for PixelVector {
    type Output = PixelVector;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for PixelVector {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for PixelVector {
    type Output = PixelVector;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for PixelVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

/// Screen-space cardinal direction (y grows downwards).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    Up,
    Right,
    Down,
    Left,
}

impl Facing {
    /// Maps the host's facing index (0 = up, 1 = right, 2 = down, 3 = left).
    pub const fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Facing::Up),
            1 => Some(Facing::Right),
            2 => Some(Facing::Down),
            3 => Some(Facing::Left),
            _ => None,
        }
    }

    /// Unit delta in tiles.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Facing::Up => (0, -1),
            Facing::Right => (1, 0),
            Facing::Down => (0, 1),
            Facing::Left => (-1, 0),
        }
    }

    /// Offset of `distance` pixels in this direction.
    pub const fn scaled(self, distance: i32) -> PixelVector {
        let (dx, dy) = self.delta();
        PixelVector::new(dx * distance, dy * distance)
    }

    /// One tile in this direction, or zero when the facing is unknown.
    pub const fn tile_vector(facing: Option<Facing>) -> PixelVector {
        match facing {
            Some(facing) => facing.scaled(TILE_SIZE),
            None => PixelVector::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_to_tile_floors() {
        assert_eq!(PixelVector::new(0, 0).to_tile(), Position::new(0, 0));
        assert_eq!(PixelVector::new(63, 64).to_tile(), Position::new(0, 1));
        assert_eq!(PixelVector::new(672, 800).to_tile(), Position::new(10, 12));
        assert_eq!(PixelVector::new(-1, -64).to_tile(), Position::new(-1, -1));
    }

    #[test]
    fn facing_vectors_are_one_tile() {
        assert_eq!(
            Facing::tile_vector(Facing::from_index(0)),
            PixelVector::new(0, -TILE_SIZE)
        );
        assert_eq!(
            Facing::tile_vector(Facing::from_index(1)),
            PixelVector::new(TILE_SIZE, 0)
        );
        assert_eq!(
            Facing::tile_vector(Facing::from_index(2)),
            PixelVector::new(0, TILE_SIZE)
        );
        assert_eq!(
            Facing::tile_vector(Facing::from_index(3)),
            PixelVector::new(-TILE_SIZE, 0)
        );
        assert_eq!(Facing::tile_vector(Facing::from_index(7)), PixelVector::ZERO);
    }

    #[test]
    fn vector_arithmetic() {
        let mut v = PixelVector::new(10, 20);
        v += PixelVector::new(5, -5);
        assert_eq!(v, PixelVector::new(15, 15));
        v -= PixelVector::new(15, 15);
        assert!(v.is_zero());
        assert_eq!(-PixelVector::new(1, -2), PixelVector::new(-1, 2));
    }

    #[test]
    fn checked_add_reports_overflow() {
        let near_edge = PixelVector::new(i32::MAX - 1, 0);
        assert_eq!(
            near_edge.checked_add(PixelVector::new(1, 5)),
            Some(PixelVector::new(i32::MAX, 5))
        );
        assert_eq!(near_edge.checked_add(PixelVector::new(2, 0)), None);
        assert_eq!(
            PixelVector::new(0, i32::MIN).checked_add(PixelVector::new(0, -1)),
            None
        );
    }
}
