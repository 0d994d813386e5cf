pub mod explanation_generator;
pub use explanation_generator::*;
