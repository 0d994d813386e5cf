pub mod query_components;
pub use query_components::*;

pub mod clause_builder;
pub use clause_builder::*;

pub mod query_assembler;
pub use query_assembler::*;
