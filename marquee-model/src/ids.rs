use uuid::Uuid;

/// Strongly typed ID for slider tiles
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileId(pub Uuid);

impl Default for TileId {
    fn default() -> Self {
        Self::new()
    }
}

impl TileId {
    pub fn new() -> Self {
        TileId(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for TileId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for TileId {
    fn from(value: Uuid) -> Self {
        TileId(value)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        assert_ne!(TileId::new(), TileId::new());
    }

    #[test]
    fn display_matches_uuid() {
        let uuid = Uuid::nil();
        assert_eq!(TileId(uuid).to_string(), uuid.to_string());
    }
}
