/// Returned before any state is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("range {start}..{end} is empty or out of bounds for length {len}")]
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("block size must be positive, got {block_size}")]
    InvalidConfiguration { block_size: usize },
}
