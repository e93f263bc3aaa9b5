use common::EditionId;
use serde::{Deserialize, Serialize};

use super::Edition;

/// Arena of the editions a shop works with.
///
/// Machines refer to editions by [`EditionId`], so copy bookkeeping
/// separates editions that happen to have identical fields. Entries are
/// never removed, which keeps every handed-out id valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditionCatalog {
    editions: Vec<Edition>,
}

impl EditionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an edition and returns its handle.
    pub fn add(&mut self, edition: Edition) -> EditionId {
        self.editions.push(edition);
        EditionId::from_index(self.editions.len() - 1)
    }

    pub fn get(&self, id: EditionId) -> Option<&Edition> {
        self.editions.get(id.index())
    }

    pub fn get_mut(&mut self, id: EditionId) -> Option<&mut Edition> {
        self.editions.get_mut(id.index())
    }

    pub fn contains(&self, id: EditionId) -> bool {
        id.index() < self.editions.len()
    }

    pub fn len(&self) -> usize {
        self.editions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.editions.is_empty()
    }

    /// Iterates editions in insertion order together with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (EditionId, &Edition)> {
        self.editions
            .iter()
            .enumerate()
            .map(|(index, edition)| (EditionId::from_index(index), edition))
    }
}
