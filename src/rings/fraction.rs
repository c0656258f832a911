use crate::error::ParseFractionError;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::ops;
use std::str::FromStr;

/// Exact rational number, always kept reduced with a positive denominator,
/// so the derived equality and hash are structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    num: BigInt,
    den: BigInt,
}

impl Fraction {
    /// # Panics
    ///
    /// Panics if `den` is zero.
    pub fn new(num: BigInt, den: BigInt) -> Self {
        if den.is_zero() {
            panic!("Denominator cannot be zero");
        }

        let g = num.gcd(&den);
        let num = num / &g;
        let den = den / &g;

        if den.is_negative() {
            return Self {
                num: -num,
                den: -den,
            };
        }
        Self { num, den }
    }

    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self {
            num: value.into(),
            den: BigInt::one(),
        }
    }

    pub fn numer(&self) -> &BigInt {
        &self.num
    }

    pub fn denom(&self) -> &BigInt {
        &self.den
    }

    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    pub fn is_negative(&self) -> bool {
        self.num.is_negative()
    }

    pub fn abs(&self) -> Fraction {
        Fraction {
            num: self.num.abs(),
            den: self.den.clone(),
        }
    }

    /// # Panics
    ///
    /// Panics if `self` is zero.
    pub fn recip(&self) -> Fraction {
        if self.num.is_zero() {
            panic!("attempt to divide by zero");
        }
        Fraction::new(self.den.clone(), self.num.clone())
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Fraction {
        Fraction::from_integer(value)
    }
}

impl From<i32> for Fraction {
    fn from(value: i32) -> Fraction {
        Fraction::from_integer(value)
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Fraction {
        Fraction::from_integer(value)
    }
}

impl FromStr for Fraction {
    type Err = ParseFractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (num, den) = match s.split_once('/') {
            Some((num, den)) => (num.trim(), den.trim()),
            None => (s, "1"),
        };

        let parse = |part: &str| {
            part.parse::<BigInt>()
                .map_err(|_| ParseFractionError::InvalidNumber(s.to_string()))
        };
        let num = parse(num)?;
        let den = parse(den)?;

        if den.is_zero() {
            return Err(ParseFractionError::ZeroDenominator);
        }
        Ok(Fraction::new(num, den))
    }
}

impl ops::Add<&Fraction> for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: &Fraction) -> Fraction {
        if self.den == rhs.den {
            return Fraction::new(&self.num + &rhs.num, self.den.clone());
        }

        Fraction::new(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl ops::Sub<&Fraction> for &Fraction {
    type Output = Fraction;

    fn sub(self, rhs: &Fraction) -> Fraction {
        if self.den == rhs.den {
            return Fraction::new(&self.num - &rhs.num, self.den.clone());
        }

        Fraction::new(
            &self.num * &rhs.den - &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl ops::Mul<&Fraction> for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: &Fraction) -> Fraction {
        Fraction::new(&self.num * &rhs.num, &self.den * &rhs.den)
    }
}

impl ops::Div<&Fraction> for &Fraction {
    type Output = Fraction;

    fn div(self, rhs: &Fraction) -> Fraction {
        if rhs.num.is_zero() {
            panic!("attempt to divide by zero");
        }
        Fraction::new(&self.num * &rhs.den, &self.den * &rhs.num)
    }
}

// Owned and mixed operands go through the reference implementations
macro_rules! forward_fraction_binop {
    ($imp:ident, $method:ident) => {
        impl ops::$imp<Fraction> for Fraction {
            type Output = Fraction;

            #[inline]
            fn $method(self, rhs: Fraction) -> Fraction {
                ops::$imp::$method(&self, &rhs)
            }
        }

        impl ops::$imp<&Fraction> for Fraction {
            type Output = Fraction;

            #[inline]
            fn $method(self, rhs: &Fraction) -> Fraction {
                ops::$imp::$method(&self, rhs)
            }
        }

        impl ops::$imp<Fraction> for &Fraction {
            type Output = Fraction;

            #[inline]
            fn $method(self, rhs: Fraction) -> Fraction {
                ops::$imp::$method(self, &rhs)
            }
        }
    };
}

forward_fraction_binop!(Add, add);
forward_fraction_binop!(Sub, sub);
forward_fraction_binop!(Mul, mul);
forward_fraction_binop!(Div, div);

impl ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            num: -self.num,
            den: self.den,
        }
    }
}

impl ops::Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            num: -&self.num,
            den: self.den.clone(),
        }
    }
}

impl One for Fraction {
    fn one() -> Fraction {
        Fraction::from_integer(1)
    }
}

impl Zero for Fraction {
    fn zero() -> Fraction {
        Fraction::from_integer(0)
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            return write!(f, "{}", self.num);
        }
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl PartialEq<i64> for Fraction {
    fn eq(&self, rhs: &i64) -> bool {
        self.den.is_one() && self.num == BigInt::from(*rhs)
    }
}

impl PartialOrd<Fraction> for Fraction {
    fn partial_cmp(&self, rhs: &Fraction) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Ord for Fraction {
    // Denominators are positive, cross multiplication keeps the order
    fn cmp(&self, rhs: &Fraction) -> Ordering {
        (&self.num * &rhs.den).cmp(&(&rhs.num * &self.den))
    }
}

impl std::iter::Sum<Fraction> for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::zero(), |acc, f| acc + f)
    }
}

impl<'a> std::iter::Sum<&'a Fraction> for Fraction {
    fn sum<I: Iterator<Item = &'a Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::zero(), |acc, f| acc + f)
    }
}

impl std::iter::Product<Fraction> for Fraction {
    fn product<I: Iterator<Item = Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::one(), |acc, f| acc * f)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn q(s: &str) -> Fraction {
        s.parse().unwrap()
    }

    #[test]
    fn test_fraction_canonical_form() {
        let f = Fraction::new(BigInt::from(6), BigInt::from(-4));
        assert_eq!(f.numer(), &BigInt::from(-3));
        assert_eq!(f.denom(), &BigInt::from(2));

        let zero = Fraction::new(BigInt::from(0), BigInt::from(-7));
        assert_eq!(zero, Fraction::zero());
        assert_eq!(zero.denom(), &BigInt::one());

        assert_eq!(q("4/8"), q("1/2"));
        assert_eq!(q("-2/-4"), q("1/2"));
        assert!(q("12/4").is_integer());
        assert_eq!(q("12/4"), 3);
    }

    #[test]
    #[should_panic(expected = "Denominator cannot be zero")]
    fn test_fraction_zero_denominator() {
        Fraction::new(BigInt::one(), BigInt::zero());
    }

    #[test]
    fn test_fraction_parse() {
        assert_eq!(q(" 3 / 9 "), Fraction::new(BigInt::from(1), BigInt::from(3)));
        assert_eq!(q("-14/11").to_string(), "-14/11");
        assert_eq!(q("3/-4"), q("-3/4"));
        assert_eq!(
            "1/0".parse::<Fraction>(),
            Err(ParseFractionError::ZeroDenominator)
        );
        assert_eq!(
            "1/2/3".parse::<Fraction>(),
            Err(ParseFractionError::InvalidNumber("1/2/3".into()))
        );
        assert!("abc".parse::<Fraction>().is_err());
        assert!("".parse::<Fraction>().is_err());

        let big = q("100000000000000000000000000000000000000000000000000000000000006/2");
        assert_eq!(
            big.to_string(),
            "50000000000000000000000000000000000000000000000000000000000003"
        );
    }

    #[test]
    fn test_fraction_arithmetic() {
        assert_eq!(q("1/2") + q("1/3"), q("5/6"));
        assert_eq!(q("1/4") + q("3/4"), 1);
        assert_eq!(q("1/2") - q("3/4"), q("-1/4"));
        assert_eq!(q("2/3") * q("9/4"), q("3/2"));
        assert_eq!(q("2/3") / q("-4/9"), q("-3/2"));
        assert_eq!(&q("1/6") + &q("1/6"), q("1/3"));
        assert_eq!(-q("5/7"), q("-5/7"));
        assert_eq!(-&q("-5/7"), q("5/7"));
        assert_eq!(q("-5/7").abs(), q("5/7"));
        assert_eq!(q("-5/7").recip(), q("-7/5"));

        let sum: Fraction = vec![q("1/2"), q("1/3"), q("1/6")].into_iter().sum();
        assert_eq!(sum, 1);
        let product: Fraction = vec![q("2/3"), q("3/4"), q("4/5")].into_iter().product();
        assert_eq!(product, q("2/5"));
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_fraction_divide_by_zero() {
        let _ = q("1/2") / Fraction::zero();
    }

    #[test]
    fn test_fraction_order() {
        assert!(q("1/3") < q("1/2"));
        assert!(q("-1/2") < q("-1/3"));
        assert!(q("-7/2").abs() > q("3"));
        assert_eq!(q("2/4").cmp(&q("1/2")), Ordering::Equal);

        let mut values = vec![q("3/2"), q("-1"), q("1/3"), q("0")];
        values.sort();
        assert_eq!(values, vec![q("-1"), q("0"), q("1/3"), q("3/2")]);
    }

    #[test]
    fn test_fraction_display() {
        assert_eq!(Fraction::from(-4i64).to_string(), "-4");
        assert_eq!(q("18/11").to_string(), "18/11");
        assert_eq!(q("-0/5").to_string(), "0");
    }
}
