use std::ops::RangeBounds;

use crate::util::{check_index, normalize_range};
use crate::{Additive, RangeAddSum, RangeError};

#[derive(Clone, Debug)]
pub struct NaiveAccumulator<T> {
    values: Vec<T>,
}

impl<T: Additive> NaiveAccumulator<T> {
    pub fn new(values: &[T]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }
}

impl<T: Additive> RangeAddSum for NaiveAccumulator<T> {
    type Value = T;

    fn len(&self) -> usize {
        self.values.len()
    }

    fn get(&self, index: usize) -> Option<T> {
        self.values.get(index).copied()
    }

    fn set(&mut self, index: usize, value: T) -> Result<(), RangeError> {
        check_index(index, self.values.len())?;
        self.values[index] = value;
        Ok(())
    }

    fn range_sum<R: RangeBounds<usize>>(&self, range: R) -> Result<T, RangeError> {
        let range = normalize_range(&range, self.values.len())?;
        Ok(self.values[range]
            .iter()
            .fold(T::zero(), |acc, &value| acc.add(value)))
    }

    fn range_add<R: RangeBounds<usize>>(&mut self, range: R, delta: T) -> Result<(), RangeError> {
        let range = normalize_range(&range, self.values.len())?;
        for value in &mut self.values[range] {
            *value = value.add(delta);
        }
        Ok(())
    }
}
