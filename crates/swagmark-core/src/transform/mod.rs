pub mod schema_resolver;
pub mod spec_to_model;

pub use spec_to_model::transform;
