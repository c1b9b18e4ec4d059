use super::{AllocError, AllocResult};

/// The capacity a full storage grows to: double the old one, and a
/// single slot when growing from nothing
///
/// Doubling keeps the total number of relocated elements over `n`
/// pushes below `2n`.
pub(crate) fn grown_capacity(capacity: usize) -> AllocResult<usize> {
    match capacity.checked_mul(2) {
        Some(doubled) => Ok(doubled.max(1)),
        None => Err(AllocError::CapacityOverflow),
    }
}
