mod accumulator;
mod block_size;
mod error;
mod naive;
mod policy;
mod traits;
mod util;

pub mod mo;

pub use accumulator::BlockedRangeAccumulator;
pub use block_size::BlockSize;
pub use error::RangeError;
pub use naive::NaiveAccumulator;
pub use policy::Additive;
pub use traits::RangeAddSum;
