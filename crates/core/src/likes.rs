//! Liked ("찜") flowers.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Flower};
use crate::types::FlowerId;

/// Outcome of toggling a flower's liked state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeToggle {
    /// The flower was added; the UI shows a confirmation notice.
    Liked,
    /// The flower was removed.
    Unliked,
}

/// Set of liked flower ids, kept in the order they were liked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LikedSet {
    ids: Vec<FlowerId>,
}

impl LikedSet {
    #[must_use]
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Flip membership of `id`.
    pub fn toggle(&mut self, id: FlowerId) -> LikeToggle {
        if self.contains(id) {
            self.ids.retain(|liked| *liked != id);
            LikeToggle::Unliked
        } else {
            self.ids.push(id);
            LikeToggle::Liked
        }
    }

    #[must_use]
    pub fn contains(&self, id: FlowerId) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn ids(&self) -> &[FlowerId] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Liked flowers in catalog order. Ids no longer in the catalog are skipped.
    #[must_use]
    pub fn liked_flowers(&self, catalog: &Catalog) -> Vec<&'static Flower> {
        catalog
            .flowers()
            .iter()
            .filter(|f| self.contains(f.id))
            .collect()
    }
}

impl FromIterator<FlowerId> for LikedSet {
    fn from_iter<I: IntoIterator<Item = FlowerId>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            if !set.contains(id) {
                set.ids.push(id);
            }
        }
        set
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut liked = LikedSet::new();
        assert_eq!(liked.toggle(FlowerId::new(3)), LikeToggle::Liked);
        assert!(liked.contains(FlowerId::new(3)));
        assert_eq!(liked.toggle(FlowerId::new(3)), LikeToggle::Unliked);
        assert!(!liked.contains(FlowerId::new(3)));
    }

    #[test]
    fn test_double_toggle_restores_original() {
        let mut liked: LikedSet = [FlowerId::new(1), FlowerId::new(5)].into_iter().collect();
        let original = liked.clone();

        liked.toggle(FlowerId::new(2));
        liked.toggle(FlowerId::new(2));
        assert_eq!(liked, original);

        liked.toggle(FlowerId::new(5));
        liked.toggle(FlowerId::new(5));
        assert!(liked.contains(FlowerId::new(5)));
        assert_eq!(liked.len(), original.len());
    }

    #[test]
    fn test_liked_flowers_in_catalog_order() {
        let catalog = Catalog::standard();
        let liked: LikedSet = [FlowerId::new(7), FlowerId::new(2), FlowerId::new(99)]
            .into_iter()
            .collect();
        let ids: Vec<i32> = liked
            .liked_flowers(&catalog)
            .iter()
            .map(|f| f.id.as_i32())
            .collect();
        assert_eq!(ids, vec![2, 7]);
    }

    #[test]
    fn test_persists_as_integer_array() {
        let liked: LikedSet = [FlowerId::new(4), FlowerId::new(1)].into_iter().collect();
        assert_eq!(serde_json::to_string(&liked).unwrap(), "[4,1]");
        let back: LikedSet = serde_json::from_str("[4,1]").unwrap();
        assert_eq!(back, liked);
    }
}
