pub mod aggregation;
pub mod assembler;

pub use aggregation::{split_by_dominant_platform, PlatformSplit, UNDETECTED_PLATFORM};
pub use assembler::{assemble, RecommendationResponse};
