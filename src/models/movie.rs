use serde::{Deserialize, Serialize};

/// A single streaming provider offering a movie
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderInfo {
    /// TMDB provider identifier
    pub id: i64,
    /// Display name shown to the client (e.g. "Netflix")
    pub name: String,
    /// Full URL of the provider logo
    pub logo: Option<String>,
    /// Landing page for subscribing to the provider
    pub subscribe_url: Option<String>,
}

/// A movie row from the detail store, with its provider payload decoded
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieRecord {
    pub movie_id: i64,
    pub original_title: String,
    pub poster_path: Option<String>,
    /// Decoded provider list; empty when the stored payload was absent or malformed
    pub watch_providers: Vec<ProviderInfo>,
}

/// Minimal projection used by the catalog listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    pub movie_id: i64,
    pub original_title: String,
}

/// Decodes the `watch_providers` JSON column into a provider list.
///
/// The column is free text written by an offline scraper, so a row may carry
/// anything. Malformed or absent payloads normalize to an empty list here,
/// once, at the boundary; nothing downstream ever sees a decode failure.
pub fn decode_providers(raw: Option<&str>) -> Vec<ProviderInfo> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<ProviderInfo>>(raw) {
        Ok(providers) => providers,
        Err(e) => {
            tracing::debug!(error = %e, "Malformed watch_providers payload, treating as empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_providers_valid_payload() {
        let raw = r#"[
            {"id": 8, "name": "Netflix", "logo": "https://image.tmdb.org/t/p/original/netflix.jpg", "subscribe_url": "https://www.netflix.com/"},
            {"id": 337, "name": "Disney Plus", "logo": null, "subscribe_url": null}
        ]"#;

        let providers = decode_providers(Some(raw));

        assert_eq!(providers.len(), 2);
        assert_eq!(providers[0].id, 8);
        assert_eq!(providers[0].name, "Netflix");
        assert_eq!(providers[1].name, "Disney Plus");
        assert_eq!(providers[1].logo, None);
    }

    #[test]
    fn test_decode_providers_round_trip() {
        let providers = vec![ProviderInfo {
            id: 9,
            name: "Amazon Prime Video".to_string(),
            logo: Some("https://image.tmdb.org/t/p/original/prime.jpg".to_string()),
            subscribe_url: Some("https://www.primevideo.com/".to_string()),
        }];

        let encoded = serde_json::to_string(&providers).unwrap();
        let decoded = decode_providers(Some(&encoded));

        assert_eq!(decoded, providers);
    }

    #[test]
    fn test_decode_providers_absent_is_empty() {
        assert!(decode_providers(None).is_empty());
    }

    #[test]
    fn test_decode_providers_malformed_is_empty() {
        assert!(decode_providers(Some("not json at all")).is_empty());
        assert!(decode_providers(Some("{\"id\": 8}")).is_empty());
        assert!(decode_providers(Some("[{\"truncated\":")).is_empty());
    }
}
