pub mod movie;

pub use movie::{decode_providers, MovieRecord, MovieSummary, ProviderInfo};
