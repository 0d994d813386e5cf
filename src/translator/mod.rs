pub mod translator_error;
pub use translator_error::*;

pub mod translation_result;
pub use translation_result::*;

pub mod sql_translator;
pub use sql_translator::*;
