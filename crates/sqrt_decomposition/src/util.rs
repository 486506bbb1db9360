use std::ops::{Bound, Range, RangeBounds};

use crate::RangeError;

/// Converts `range` to a non-empty half-open `start..end` within `0..len`.
pub(crate) fn normalize_range<R: RangeBounds<usize>>(
    range: &R,
    len: usize,
) -> Result<Range<usize>, RangeError> {
    let start = match range.start_bound() {
        Bound::Included(&start) => Some(start),
        Bound::Excluded(&start) => start.checked_add(1),
        Bound::Unbounded => Some(0),
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.checked_add(1),
        Bound::Excluded(&end) => Some(end),
        Bound::Unbounded => Some(len),
    };

    match (start, end) {
        (Some(start), Some(end)) if start < end && end <= len => Ok(start..end),
        (start, end) => Err(RangeError::InvalidRange {
            start: start.unwrap_or(usize::MAX),
            end: end.unwrap_or(usize::MAX),
            len,
        }),
    }
}

#[inline(always)]
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), RangeError> {
    if index < len {
        Ok(())
    } else {
        Err(RangeError::InvalidRange {
            start: index,
            end: index.saturating_add(1),
            len,
        })
    }
}

/// Smallest `s` with `s * s >= n`.
#[inline(always)]
pub(crate) fn ceil_sqrt(n: usize) -> usize {
    let s = n.isqrt();
    if s * s < n { s + 1 } else { s }
}
