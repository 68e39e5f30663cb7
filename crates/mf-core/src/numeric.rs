use crate::{MfError, MfResult};

/// Integer type used for capacities and flows throughout the system.
///
/// Signed so that reverse edges can hold returnable flow as a negative value.
pub type Capacity = i64;

/// Inherited bound for a fresh path search: the largest representable amount.
pub const UNBOUNDED: Capacity = Capacity::MAX;

/// Add two flow amounts, reporting overflow instead of wrapping.
pub fn checked_add(a: Capacity, b: Capacity, what: &'static str) -> MfResult<Capacity> {
    a.checked_add(b).ok_or(MfError::Overflow { what })
}

/// Subtract two flow amounts, reporting overflow instead of wrapping.
pub fn checked_sub(a: Capacity, b: Capacity, what: &'static str) -> MfResult<Capacity> {
    a.checked_sub(b).ok_or(MfError::Overflow { what })
}

/// Sum a sequence of amounts with overflow detection.
pub fn checked_sum<I>(values: I, what: &'static str) -> MfResult<Capacity>
where
    I: IntoIterator<Item = Capacity>,
{
    values
        .into_iter()
        .try_fold(0, |acc: Capacity, v| checked_add(acc, v, what))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn checked_add_matches_wide_arithmetic(a in any::<i64>(), b in any::<i64>()) {
            let wide = a as i128 + b as i128;
            match checked_add(a, b, "prop") {
                Ok(v) => prop_assert_eq!(v as i128, wide),
                Err(_) => prop_assert!(wide > i64::MAX as i128 || wide < i64::MIN as i128),
            }
        }
    }
}
