use crate::RangeError;
use crate::util::ceil_sqrt;

/// Elements per block. Only performance depends on the choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlockSize {
    Fixed(usize),
    /// `ceil(sqrt(n))`, at least 1.
    #[default]
    Sqrt,
}

impl BlockSize {
    pub fn resolve(self, len: usize) -> Result<usize, RangeError> {
        match self {
            Self::Fixed(0) => Err(RangeError::InvalidConfiguration { block_size: 0 }),
            Self::Fixed(block_size) => Ok(block_size),
            Self::Sqrt => Ok(ceil_sqrt(len).max(1)),
        }
    }
}
