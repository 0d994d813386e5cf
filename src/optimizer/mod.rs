pub mod scanners;

pub mod performance;
pub use performance::*;

pub mod complexity;
pub use complexity::*;

pub mod anti_pattern;
pub use anti_pattern::*;

pub mod query_optimizer;
pub use query_optimizer::*;

pub mod read_only_guard;
pub use read_only_guard::*;
