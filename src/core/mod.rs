pub mod rank;
pub mod types;

pub use rank::{exceeds, ParseRankError, Rank};
pub use types::{ComplexityBlock, ModuleResult, ParseFailure, ResultSet};
