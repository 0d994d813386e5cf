pub mod pattern_error;
pub use pattern_error::*;

pub mod clock;
pub use clock::*;

pub mod rule;
pub use rule::*;

pub mod aggregate_fn;
pub use aggregate_fn::*;

pub mod time_rules;
pub use time_rules::*;

pub mod business_terms;
pub use business_terms::*;

pub mod vocabulary;
pub use vocabulary::*;

pub mod aggregation_terms;
pub use aggregation_terms::*;

pub mod filter_rules;
pub use filter_rules::*;

pub mod phrase_rules;
pub use phrase_rules::*;

pub mod pattern_library;
pub use pattern_library::*;
