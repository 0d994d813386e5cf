pub mod column_info;
pub use column_info::*;

pub mod table_info;
pub use table_info::*;

pub mod join_edge;
pub use join_edge::*;

pub mod schema_error;
pub use schema_error::*;

pub mod schema_snapshot;
pub use schema_snapshot::*;

pub mod schema_catalog;
pub use schema_catalog::*;

pub mod introspector;
pub use introspector::*;
