//! Utility for calculating the product of iterators while checking for overflow.
//!
//! The [`CheckedProduct`] trait is implemented for iterators of integer types, via those types
//! implementing [`CheckedMul`][num_traits::CheckedMul].

// NOTE the product counterpart of the `checked_sum` crate, which has no product equivalent

use num_traits::{CheckedMul, One};

/// Iterator extension trait for calculating the product of numbers with overflow checking.
pub trait CheckedProduct<T> {
    /// Multiplies numbers in an iterator, checking for overflow.
    /// Returns `None` if overflow occurred.
    fn checked_product(self) -> Option<T>;
}

impl<T, I> CheckedProduct<T> for I
where
    T: CheckedMul + One,
    I: Iterator<Item = T>,
{
    fn checked_product(mut self) -> Option<T> {
        self.try_fold(T::one(), |acc, value| acc.checked_mul(&value))
    }
}

#[cfg(test)]
mod tests {
    use crate::checked_product::CheckedProduct;

    #[test]
    fn test_checked_product() {
        let values = vec![1u8, 2, 3, 4, 5];
        let maybe_product = values.into_iter().checked_product();
        assert_eq!(maybe_product, Some(2 * 3 * 4 * 5));
    }

    #[test]
    fn test_checked_product_empty_iterator() {
        let values: Vec<u64> = vec![];
        let maybe_product = values.into_iter().checked_product();
        assert_eq!(maybe_product, Some(1));
    }

    #[test]
    fn test_checked_product_negative_values() {
        let values = vec![-2i64, 3, -4];
        let maybe_product = values.into_iter().checked_product();
        assert_eq!(maybe_product, Some(24));
    }

    #[test]
    fn test_checked_product_overflow() {
        let values = vec![200u8, 2];
        let maybe_product = values.into_iter().checked_product();
        assert_eq!(maybe_product, None);

        let values = vec![2u8, 200];
        let maybe_product = values.into_iter().checked_product();
        assert_eq!(maybe_product, None);
    }
}
