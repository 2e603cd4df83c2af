use serde::Serialize;

use super::aggregation::PlatformSplit;
use crate::models::MovieRecord;

/// Movies grouped under the dominant streaming platform
#[derive(Debug, Serialize)]
pub struct DominantPlatform {
    pub name: String,
    pub movies: Vec<MovieRecord>,
}

/// Movies available anywhere else (or nowhere)
#[derive(Debug, Serialize)]
pub struct OtherPlatforms {
    pub movies: Vec<MovieRecord>,
}

/// The externally visible recommendation payload
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub dominant_platform: DominantPlatform,
    pub other_platforms: OtherPlatforms,
}

/// Wraps an aggregation result into the response contract. Pure reshaping;
/// no ordering or bucketing decisions are made here.
pub fn assemble(split: PlatformSplit) -> RecommendationResponse {
    RecommendationResponse {
        dominant_platform: DominantPlatform {
            name: split.dominant_platform,
            movies: split.dominant,
        },
        other_platforms: OtherPlatforms {
            movies: split.other,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_response_shape() {
        let split = PlatformSplit {
            dominant_platform: "Netflix".to_string(),
            dominant: vec![MovieRecord {
                movie_id: 603,
                original_title: "The Matrix".to_string(),
                poster_path: Some("/matrix.jpg".to_string()),
                watch_providers: vec![],
            }],
            other: vec![],
        };

        let response = assemble(split);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["dominant_platform"]["name"], "Netflix");
        assert_eq!(
            json["dominant_platform"]["movies"][0]["movie_id"],
            603
        );
        assert_eq!(
            json["dominant_platform"]["movies"][0]["original_title"],
            "The Matrix"
        );
        assert!(json["other_platforms"]["movies"]
            .as_array()
            .unwrap()
            .is_empty());
    }
}
