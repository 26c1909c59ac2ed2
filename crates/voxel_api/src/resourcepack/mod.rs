//! # Resource Packs
//!
//! A [`ResourcePack`] is a downloadable asset bundle identified by a URI and,
//! once retrieved, verified by its SHA-1 content hash. Hosts create packs
//! through their [`ResourcePackFactory`]; extensions only hold on to the
//! resulting values and hand them to players.

use crate::error::ResourcePackError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// Length of a hex encoded SHA-1 digest.
pub const HASH_LENGTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawResourcePack")]
pub struct ResourcePack {
    id: Uuid,
    name: String,
    uri: Url,
    hash: Option<String>,
}

impl ResourcePack {
    /// A pack without a hash, named after its location.
    pub fn new(uri: Url) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name_from_uri(&uri),
            uri,
            hash: None,
        }
    }

    /// Attaches the hex encoded SHA-1 digest of the pack's contents.
    ///
    /// # Errors
    ///
    /// [`ResourcePackError::InvalidHash`] unless `hash` is exactly
    /// [`HASH_LENGTH`] hex digits.
    pub fn with_hash(mut self, hash: &str) -> Result<Self, ResourcePackError> {
        let valid = hash.len() == HASH_LENGTH && hash.chars().all(|c| c.is_ascii_hexdigit());
        if !valid {
            return Err(ResourcePackError::InvalidHash(hash.to_string()));
        }
        self.hash = Some(hash.to_ascii_lowercase());
        Ok(self)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn uri(&self) -> &Url {
        &self.uri
    }

    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }
}

/// Unchecked form of a deserialized [`ResourcePack`]; the hash still has to
/// pass [`ResourcePack::with_hash`].
#[derive(Deserialize)]
struct RawResourcePack {
    id: Uuid,
    name: String,
    uri: Url,
    #[serde(default)]
    hash: Option<String>,
}

impl TryFrom<RawResourcePack> for ResourcePack {
    type Error = ResourcePackError;

    fn try_from(raw: RawResourcePack) -> Result<Self, Self::Error> {
        let pack = ResourcePack {
            id: raw.id,
            name: raw.name,
            uri: raw.uri,
            hash: None,
        };
        match raw.hash {
            Some(hash) => pack.with_hash(&hash),
            None => Ok(pack),
        }
    }
}

/// Last non-empty path segment, falling back to the host and then the whole
/// URI.
fn name_from_uri(uri: &Url) -> String {
    uri.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(str::to_string)
        .or_else(|| uri.host_str().map(str::to_string))
        .unwrap_or_else(|| uri.to_string())
}

/// Parses a pack location.
pub fn parse_uri(uri: &str) -> Result<Url, ResourcePackError> {
    Url::parse(uri).map_err(|e| ResourcePackError::InvalidUri(format!("{uri}: {e}")))
}

/// Creates [`ResourcePack`]s. Implemented by the host.
#[async_trait]
pub trait ResourcePackFactory: Send + Sync {
    /// Creates a pack from `uri`, downloading and hashing it.
    ///
    /// # Errors
    ///
    /// [`ResourcePackError::NotFound`] if a valid resource pack could not be
    /// retrieved from the URI.
    async fn from_uri(&self, uri: Url) -> Result<ResourcePack, ResourcePackError>;

    /// Creates a pack from `uri` without retrieving it. The pack has no hash.
    fn from_uri_unchecked(&self, uri: Url) -> ResourcePack {
        ResourcePack::new(uri)
    }
}

/// What a client reported after being offered a pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourcePackStatus {
    /// The client is downloading the pack
    Accepted,
    /// The client refused the pack
    Declined,
    /// The download or the pack itself was broken
    Failed,
    SuccessfullyLoaded,
}

impl ResourcePackStatus {
    /// Whether the client is done with the pack, one way or another.
    pub fn is_complete(self) -> bool {
        !matches!(self, ResourcePackStatus::Accepted)
    }

    /// `Some(true)` once loaded, `Some(false)` after a refusal or failure and
    /// `None` while still in progress.
    pub fn was_successful(self) -> Option<bool> {
        match self {
            ResourcePackStatus::Accepted => None,
            ResourcePackStatus::SuccessfullyLoaded => Some(true),
            ResourcePackStatus::Declined | ResourcePackStatus::Failed => Some(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_uri() {
        let pack = ResourcePack::new(parse_uri("https://cdn.example.com/packs/faithful.zip").unwrap());
        assert_eq!(pack.name(), "faithful.zip");

        let trailing = ResourcePack::new(parse_uri("https://cdn.example.com/packs/").unwrap());
        assert_eq!(trailing.name(), "packs");

        let bare = ResourcePack::new(parse_uri("https://cdn.example.com").unwrap());
        assert_eq!(bare.name(), "cdn.example.com");
    }

    #[test]
    fn test_hash_validation() {
        let uri = parse_uri("https://example.com/pack.zip").unwrap();

        let hashed = ResourcePack::new(uri.clone())
            .with_hash("DA39A3EE5E6B4B0D3255BFEF95601890AFD80709")
            .unwrap();
        assert_eq!(hashed.hash(), Some("da39a3ee5e6b4b0d3255bfef95601890afd80709"));

        let short = ResourcePack::new(uri.clone()).with_hash("abc123");
        assert_eq!(short, Err(ResourcePackError::InvalidHash("abc123".to_string())));

        let not_hex = ResourcePack::new(uri).with_hash(&"z".repeat(HASH_LENGTH));
        assert!(matches!(not_hex, Err(ResourcePackError::InvalidHash(_))));
    }

    #[test]
    fn test_deserialize_checks_hash() {
        let json = |hash: &str| {
            format!(
                r#"{{"id":"67e55044-10b1-426f-9247-bb680e5fe0c8","name":"x","uri":"https://e.com/p.zip","hash":"{hash}"}}"#
            )
        };

        let bad = serde_json::from_str::<ResourcePack>(&json("NOT-A-SHA1"));
        assert!(bad.is_err());

        let upper = serde_json::from_str::<ResourcePack>(&json("DA39A3EE5E6B4B0D3255BFEF95601890AFD80709")).unwrap();
        assert_eq!(upper.hash(), Some("da39a3ee5e6b4b0d3255bfef95601890afd80709"));
        assert_eq!(upper.name(), "x");
    }

    #[test]
    fn test_serde_round_trip_without_hash() {
        let pack = ResourcePack::new(parse_uri("https://example.com/pack.zip").unwrap());
        let json = serde_json::to_string(&pack).unwrap();
        let back: ResourcePack = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pack);
    }

    #[test]
    fn test_parse_uri_rejects_garbage() {
        assert!(matches!(parse_uri("not a uri"), Err(ResourcePackError::InvalidUri(_))));
    }

    #[test]
    fn test_packs_get_distinct_ids() {
        let uri = parse_uri("https://example.com/pack.zip").unwrap();
        assert_ne!(ResourcePack::new(uri.clone()).id(), ResourcePack::new(uri).id());
    }

    #[test]
    fn test_status_helpers() {
        assert!(!ResourcePackStatus::Accepted.is_complete());
        assert!(ResourcePackStatus::Declined.is_complete());
        assert_eq!(ResourcePackStatus::Accepted.was_successful(), None);
        assert_eq!(ResourcePackStatus::Failed.was_successful(), Some(false));
        assert_eq!(ResourcePackStatus::SuccessfullyLoaded.was_successful(), Some(true));
    }
}
