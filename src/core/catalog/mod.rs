//! Model catalog: wire types, backend fetch, and display labels.

mod fetch;
mod info;
mod labels;

pub use fetch::{FetchError, fetch_catalog};
pub use info::{ModelCatalog, ModelInfo, ProviderModels};
pub use labels::{model_display_name, provider_display_name};
