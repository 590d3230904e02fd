//! The die type and rolling.
//!
//! A die has between 1 and 255 sides. It is rolled once when built, so its
//! face value is always valid. Rolls draw from the shared generator unless
//! the caller supplies one.

use rand::Rng;

use crate::error::{DieError, DieResult};
use crate::source::with_shared_rng;

/// Fewest sides a die may have.
pub const MIN_SIDES: u8 = 1;

/// Most sides a die may have.
pub const MAX_SIDES: u8 = u8::MAX;

/// Side count used by [`Die::default`].
pub const DEFAULT_SIDES: u8 = 6;

/// A die with a fixed number of sides and a current face-up value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Die {
    sides: u8,
    face_value: u8,
}

impl Die {
    /// Create a die and roll it once using the shared generator.
    pub fn new(sides: u32) -> DieResult<Self> {
        let sides = validate_sides(sides)?;
        Ok(with_shared_rng(|rng| Self::rolled_with(sides, rng)))
    }

    /// Create a die and roll it once using the given RNG.
    pub fn with_rng<R: Rng + ?Sized>(sides: u32, rng: &mut R) -> DieResult<Self> {
        let sides = validate_sides(sides)?;
        Ok(Self::rolled_with(sides, rng))
    }

    fn rolled_with<R: Rng + ?Sized>(sides: u8, rng: &mut R) -> Self {
        let mut die = Self {
            sides,
            face_value: MIN_SIDES,
        };
        die.roll_with(rng);
        die
    }

    /// Returns the number of sides on this die.
    pub fn sides(&self) -> u8 {
        self.sides
    }

    /// Returns the value currently facing up.
    pub fn face_value(&self) -> u8 {
        self.face_value
    }

    /// Roll the die using the shared generator and return the new face value.
    pub fn roll(&mut self) -> u8 {
        with_shared_rng(|rng| self.roll_with(rng))
    }

    /// Roll the die using the given RNG and return the new face value.
    pub fn roll_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u8 {
        self.face_value = rng.random_range(MIN_SIDES..=self.sides);
        tracing::trace!(sides = self.sides, face_value = self.face_value, "rolled die");
        self.face_value
    }
}

fn validate_sides(sides: u32) -> DieResult<u8> {
    match u8::try_from(sides) {
        Ok(n) if n >= MIN_SIDES => Ok(n),
        _ => {
            tracing::debug!(sides, "rejected die side count");
            Err(DieError::InvalidSideCount {
                parameter: "sides",
                value: sides,
                min: MIN_SIDES,
                max: MAX_SIDES,
            })
        }
    }
}

impl Default for Die {
    fn default() -> Self {
        with_shared_rng(|rng| Self::rolled_with(DEFAULT_SIDES, rng))
    }
}

impl TryFrom<u32> for Die {
    type Error = DieError;

    fn try_from(sides: u32) -> DieResult<Self> {
        Self::new(sides)
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides)
    }
}
