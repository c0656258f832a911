use crate::rings::fraction::Fraction;
use num_traits::{One, Zero};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Scalars the elimination engine can work over.
///
/// Exactness is up to the implementation: `Fraction` never rounds, `f64`
/// does, but both detect an exactly zero pivot the same way.
pub trait Field:  // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + std::fmt::Display
    + std::fmt::Debug
{
    fn abs(&self) -> Self;
}

impl Field for Fraction {
    fn abs(&self) -> Fraction {
        Fraction::abs(self)
    }
}

impl Field for f64 {
    fn abs(&self) -> f64 {
        f64::abs(*self)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn magnitude<T: Field>(value: T) -> T {
        Field::abs(&value)
    }

    #[test]
    fn test_field_abs() {
        assert_eq!(magnitude(-2.5f64), 2.5);
        assert_eq!(magnitude(Fraction::from(-3)), Fraction::from(3));
        assert_eq!(magnitude(Fraction::zero()), Fraction::zero());
    }
}
