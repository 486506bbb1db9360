use std::ops::RangeBounds;

use tracing::{debug, trace};

use crate::util::{check_index, normalize_range};
use crate::{Additive, BlockSize, RangeAddSum, RangeError};

/// Sequence split into contiguous blocks of `block_size` elements.
///
/// Each block keeps the sum of its base values and an offset that is
/// pending for every element of the block. The true value of index `i` in
/// block `b` is `base[i] + pending_add[b]`, so a whole block is updated by
/// touching only its two scalars. Both range operations cost
/// *O*(`block_size` + *n* / `block_size`), i.e. *O*(√*n*) for a block size
/// near √*n*.
#[derive(Clone, Debug)]
pub struct BlockedRangeAccumulator<T> {
    base: Vec<T>,
    block_sum: Vec<T>,
    pending_add: Vec<T>,
    block_size: usize,
}

impl<T: Additive> BlockedRangeAccumulator<T> {
    pub fn new(values: &[T], block_size: usize) -> Result<Self, RangeError> {
        if block_size == 0 {
            return Err(RangeError::InvalidConfiguration { block_size });
        }

        let base = values.to_vec();
        let block_sum = base
            .chunks(block_size)
            .map(|block| block.iter().fold(T::zero(), |acc, &value| acc.add(value)))
            .collect::<Vec<_>>();
        let pending_add = vec![T::zero(); block_sum.len()];
        debug!(
            len = base.len(),
            block_size,
            blocks = block_sum.len(),
            "built block decomposition"
        );

        Ok(Self {
            base,
            block_sum,
            pending_add,
            block_size,
        })
    }

    pub fn with_block_size(values: &[T], block_size: BlockSize) -> Result<Self, RangeError> {
        let block_size = block_size.resolve(values.len())?;
        Self::new(values, block_size)
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn block_count(&self) -> usize {
        self.block_sum.len()
    }

    /// Moves the pending offset of `block` into its base values. Fails with
    /// `InvalidRange` (in block units) when `block >= block_count()`.
    pub fn push_down(&mut self, block: usize) -> Result<(), RangeError> {
        check_index(block, self.block_count())?;
        let pending = std::mem::replace(&mut self.pending_add[block], T::zero());
        let start = block * self.block_size;
        let len = self.block_len(block);
        for value in &mut self.base[start..start + len] {
            *value = value.add(pending);
        }
        self.block_sum[block] = self.block_sum[block].add(pending.scale(len));
        trace!(block, len, ?pending, "pushed down pending offset");
        Ok(())
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.base
            .chunks(self.block_size)
            .zip(&self.pending_add)
            .flat_map(|(block, &pending)| block.iter().map(move |&value| value.add(pending)))
            .collect()
    }

    #[inline(always)]
    fn block_len(&self, block: usize) -> usize {
        let start = block * self.block_size;
        self.block_size.min(self.base.len() - start)
    }

    #[inline(always)]
    fn block_total(&self, block: usize) -> T {
        self.block_sum[block].add(self.pending_add[block].scale(self.block_len(block)))
    }
}

impl<T: Additive> RangeAddSum for BlockedRangeAccumulator<T> {
    type Value = T;

    fn len(&self) -> usize {
        self.base.len()
    }

    fn get(&self, index: usize) -> Option<T> {
        let value = *self.base.get(index)?;
        Some(value.add(self.pending_add[index / self.block_size]))
    }

    fn set(&mut self, index: usize, value: T) -> Result<(), RangeError> {
        check_index(index, self.base.len())?;
        let block = index / self.block_size;
        let new_base = value.sub(self.pending_add[block]);
        let old_base = std::mem::replace(&mut self.base[index], new_base);
        self.block_sum[block] = self.block_sum[block].sub(old_base).add(new_base);
        Ok(())
    }

    fn range_sum<R: RangeBounds<usize>>(&self, range: R) -> Result<T, RangeError> {
        let range = normalize_range(&range, self.base.len())?;
        let last = range.end - 1;

        let mut acc = T::zero();
        let mut i = range.start;
        while i < range.end {
            let block = i / self.block_size;
            let block_start = block * self.block_size;
            let block_last = block_start + self.block_len(block) - 1;
            if i == block_start && block_last <= last {
                acc = acc.add(self.block_total(block));
                i = block_last + 1;
            } else {
                acc = acc.add(self.base[i].add(self.pending_add[block]));
                i += 1;
            }
        }
        Ok(acc)
    }

    fn range_add<R: RangeBounds<usize>>(&mut self, range: R, delta: T) -> Result<(), RangeError> {
        let range = normalize_range(&range, self.base.len())?;
        let last = range.end - 1;

        let mut i = range.start;
        while i < range.end {
            let block = i / self.block_size;
            let block_start = block * self.block_size;
            let block_len = self.block_len(block);
            let block_last = block_start + block_len - 1;
            if i == block_start && block_last <= last {
                self.pending_add[block] = self.pending_add[block].add(delta);
                i = block_last + 1;
            } else {
                self.base[i] = self.base[i].add(delta);
                self.block_sum[block] = self.block_sum[block].add(delta);
                i += 1;
            }
        }
        Ok(())
    }
}
