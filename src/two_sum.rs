use crate::error::{Error, Result};
use ahash::AHashMap as HashMap;
use std::hash::Hash;
use tracing::debug;

/// Values that can be looked up by their complement against a target.
pub trait Complement: Copy + Hash + Eq {
    /// Returns `target - self`, or `None` if that is not representable.
    fn complement(self, target: Self) -> Option<Self>;
}

macro_rules! impl_complement {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Complement for $ty {
                #[inline]
                fn complement(self, target: Self) -> Option<Self> {
                    target.checked_sub(self)
                }
            }
        )*
    };
}

impl_complement!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Finds two distinct indices whose values sum to `target`.
///
/// Scans once, remembering the index of each value seen. Returns the first
/// pair completed in scan order as `[earlier, later]`, or
/// [`Error::PairNotFound`] when no such pair exists.
///
/// ```
/// use keygroup_rs::two_sum;
///
/// assert_eq!(two_sum(&[3, 4, 5, 6], 7), Ok([0, 1]));
/// assert!(two_sum(&[1, 2], 10).is_err());
/// ```
pub fn two_sum<T: Complement>(nums: &[T], target: T) -> Result<[usize; 2]> {
    let mut seen: HashMap<T, usize> = HashMap::with_capacity(nums.len());

    for (j, &num) in nums.iter().enumerate() {
        // An unrepresentable complement can't be in the slice
        if let Some(i) = num.complement(target).and_then(|c| seen.get(&c)) {
            return Ok([*i, j]);
        }
        seen.insert(num, j);
    }

    debug!(len = nums.len(), "no pair sums to target");
    Err(Error::PairNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_pair() {
        assert_eq!(two_sum(&[3, 4, 5, 6], 7), Ok([0, 1]));
    }

    #[test]
    fn test_split_pair() {
        assert_eq!(two_sum(&[4, 5, 6], 10), Ok([0, 2]));
    }

    #[test]
    fn test_equal_values() {
        assert_eq!(two_sum(&[5, 5], 10), Ok([0, 1]));
    }

    #[test]
    fn test_element_not_paired_with_itself() {
        assert_eq!(two_sum(&[5, 1], 10), Err(Error::PairNotFound));
    }

    #[test]
    fn test_not_found() {
        assert_eq!(two_sum::<i32>(&[], 0), Err(Error::PairNotFound));
        assert_eq!(two_sum(&[1], 1), Err(Error::PairNotFound));
        assert_eq!(two_sum(&[1, 2, 3], 100), Err(Error::PairNotFound));
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(two_sum(&[-3, 8, 4, 11], 1), Ok([0, 2]));
    }

    #[test]
    fn test_later_duplicate_overwrites_index() {
        // 2 at index 0 is replaced by 2 at index 1 before 3 completes the pair
        assert_eq!(two_sum(&[2, 2, 3], 5), Ok([1, 2]));
    }

    #[test]
    fn test_overflowing_complement() {
        assert_eq!(two_sum(&[i32::MIN, 1], i32::MAX), Err(Error::PairNotFound));
        assert_eq!(two_sum(&[i32::MAX, -1], i32::MAX - 1), Ok([0, 1]));
        assert_eq!(two_sum(&[10u8, 250], 4), Err(Error::PairNotFound));
        assert_eq!(two_sum(&[10u8, 245], 255), Ok([0, 1]));
    }

    #[test]
    fn test_overflowing_complement_i64() {
        assert_eq!(two_sum(&[i64::MIN, 1], i64::MAX), Err(Error::PairNotFound));
        assert_eq!(two_sum(&[i64::MAX, i64::MIN], -1), Ok([0, 1]));
        assert_eq!(two_sum(&[i64::MAX, -1], i64::MAX - 1), Ok([0, 1]));
    }
}
