mod error;
mod normalize;
mod symbol;

pub use error::{PatternError, PatternResult};
pub use normalize::{normalize_pattern, normalize_pattern_with_offsets};
pub use symbol::Symbol;
