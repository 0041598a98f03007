use crate::error::NumError;
use num_traits::{NumCast, ToPrimitive};
use std::ops::Sub;

/// An inclusive range `[minimum, maximum]`.
///
/// # Invariants
/// `minimum` is never larger than `maximum`; every constructor and setter
/// rejects values that would break this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<T> {
    min: T,
    max: T,
}

impl<T> Range<T>
where
    T: PartialOrd + Copy,
{
    pub fn new(min: T, max: T) -> Result<Self, NumError> {
        if min > max {
            return Err(NumError::InvalidRange);
        }
        Ok(Self { min, max })
    }

    pub fn minimum(&self) -> T {
        self.min
    }

    pub fn maximum(&self) -> T {
        self.max
    }

    pub fn set_minimum(&mut self, value: T) -> Result<(), NumError> {
        if value > self.max {
            return Err(NumError::InvalidRange);
        }
        self.min = value;
        Ok(())
    }

    pub fn set_maximum(&mut self, value: T) -> Result<(), NumError> {
        if value < self.min {
            return Err(NumError::InvalidRange);
        }
        self.max = value;
        Ok(())
    }

    /// Returns `true` if `value` lies within the range, both ends included.
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

impl<T> Range<T>
where
    T: PartialOrd + Copy + Sub<Output = T>,
{
    /// The distance between `maximum` and `minimum`.
    pub fn length(&self) -> T {
        self.max - self.min
    }
}

/// Range checks available on every ordered value.
pub trait InRange: PartialOrd + Copy {
    /// Checks `min <= self <= max`, failing if `min > max`.
    fn is_in_range(self, min: Self, max: Self) -> Result<bool, NumError> {
        if min > max {
            return Err(NumError::InvalidRange);
        }
        Ok(self >= min && self <= max)
    }

    /// Like [`InRange::is_in_range`], with bounds of another numeric type.
    ///
    /// Bounds are converted into `Self` first, truncating toward zero when
    /// `Self` is an integer type.
    fn is_in_range_of<U>(self, min: U, max: U) -> Result<bool, NumError>
    where
        Self: NumCast,
        U: ToPrimitive,
    {
        let min = <Self as NumCast>::from(min).ok_or(NumError::Unrepresentable)?;
        let max = <Self as NumCast>::from(max).ok_or(NumError::Unrepresentable)?;
        self.is_in_range(min, max)
    }

    fn is_in(self, range: &Range<Self>) -> bool {
        range.contains(self)
    }
}

impl<T> InRange for T where T: PartialOrd + Copy {}
