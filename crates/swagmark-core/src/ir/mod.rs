pub mod grouping;
pub mod operations;
pub mod schemas;
pub mod types;

pub use grouping::{TagGroup, group_by_tag};
pub use operations::*;
pub use schemas::*;
pub use types::{ApiContact, ApiDoc, ApiInfo, ApiLicense, ApiPath, ApiTag};
