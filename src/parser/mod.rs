pub mod intent;
pub use intent::*;

pub mod entity;
pub use entity::*;

pub mod parsed_query;
pub use parsed_query::*;

pub mod intent_classifier;
pub use intent_classifier::*;

pub mod extractor;
pub use extractor::*;
