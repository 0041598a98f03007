pub mod range;

pub use range::{InRange, Range};

use crate::error::NumError;
use num_traits::{Num, NumCast, ToPrimitive};

/// Map `value` from the `input` range onto the `output` range.
///
/// The arithmetic happens in `f64` and the result is converted back to `T`,
/// truncating toward zero for integer types.
pub fn map<T>(value: T, input: &Range<T>, output: &Range<T>) -> Result<T, NumError>
where
    T: PartialOrd + Copy + ToPrimitive + NumCast,
{
    let as_f64 = |n: T| n.to_f64().ok_or(NumError::Unrepresentable);

    let in_min = as_f64(input.minimum())?;
    let in_max = as_f64(input.maximum())?;
    let out_min = as_f64(output.minimum())?;
    let out_max = as_f64(output.maximum())?;
    let value = as_f64(value)?;

    if in_max == in_min {
        return Err(NumError::EmptyInputRange);
    }

    let mapped = out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min);
    <T as NumCast>::from(mapped).ok_or(NumError::Unrepresentable)
}

/// Remainder of `value / modulus` carrying the sign of `modulus`.
///
/// Unlike `%`, `modulo(-1, 5)` is `4`.
///
/// # Panics
///
/// For signed integers, `T::MIN` modulo `-1` overflows just as `%` does.
pub fn modulo<T>(value: T, modulus: T) -> Result<T, NumError>
where
    T: Num + PartialOrd + Copy,
{
    let zero = T::zero();
    if modulus == zero {
        return Err(NumError::DivideByZero);
    }

    let remainder = value % modulus;
    if remainder != zero && (remainder < zero) != (modulus < zero) {
        Ok(remainder + modulus)
    } else {
        Ok(remainder)
    }
}

pub fn is_even<T>(value: T) -> bool
where
    T: Num + PartialOrd + Copy,
{
    let two = T::one() + T::one();
    modulo(value, two).is_ok_and(|r| r == T::zero())
}

pub fn is_odd<T>(value: T) -> bool
where
    T: Num + PartialOrd + Copy,
{
    !is_even(value)
}
