use std::ops::RangeBounds;

use crate::RangeError;

/// Fixed-length sequence with range-add and range-sum.
///
/// - Ranges are any `RangeBounds<usize>`; an inclusive `[l, r]` is `l..=r`.
/// - An empty, inverted, or out-of-bounds range is `RangeError::InvalidRange`
///   and leaves the sequence unchanged.
pub trait RangeAddSum {
    type Value;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Option<Self::Value>;

    fn set(&mut self, index: usize, value: Self::Value) -> Result<(), RangeError>;

    fn range_sum<R: RangeBounds<usize>>(&self, range: R) -> Result<Self::Value, RangeError>;

    fn range_add<R: RangeBounds<usize>>(
        &mut self,
        range: R,
        delta: Self::Value,
    ) -> Result<(), RangeError>;
}
