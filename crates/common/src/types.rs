use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a printing shop.
///
/// Wraps a UUID so shop ids cannot be mixed up with other UUID-based
/// values. Persisted verbatim in the `PrintingShopID:` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopId(Uuid);

impl ShopId {
    /// Creates a new random shop ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a shop ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ShopId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ShopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ShopId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

impl From<Uuid> for ShopId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<ShopId> for Uuid {
    fn from(id: ShopId) -> Self {
        id.0
    }
}

/// Handle of an edition inside a shop's edition catalog.
///
/// Editions are told apart by handle, never by field equality: two
/// editions with identical title, pages and paper get different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditionId(usize);

impl EditionId {
    /// Creates an edition id from its catalog slot.
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Returns the catalog slot.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for EditionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "edition#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shop_id_new_creates_unique_ids() {
        let id1 = ShopId::new();
        let id2 = ShopId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn shop_id_from_uuid_preserves_value() {
        let uuid = Uuid::new_v4();
        let id = ShopId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), uuid);
    }

    #[test]
    fn shop_id_parses_its_display_form() {
        let id = ShopId::new();
        let parsed: ShopId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn shop_id_parse_tolerates_surrounding_whitespace() {
        let id = ShopId::new();
        let parsed: ShopId = format!("  {id} ").parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn shop_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<ShopId>().is_err());
    }

    #[test]
    fn shop_id_serializes_transparently() {
        let id = ShopId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }

    #[test]
    fn edition_id_exposes_its_index() {
        let id = EditionId::from_index(7);
        assert_eq!(id.index(), 7);
        assert_eq!(id.to_string(), "edition#7");
    }
}
