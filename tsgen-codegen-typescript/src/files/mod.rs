//! TypeScript file generators.

mod api_ts;

pub use api_ts::ApiTs;
