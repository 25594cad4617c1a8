use std::collections::HashSet;

use crate::entities::*;

/// All locations fetched so far, without duplicates.
///
/// The first fetched version of a location wins, later
/// copies with the same id are ignored.
#[derive(Debug, Clone, Default)]
pub struct AccumulatedLocations {
    ids: HashSet<Id>,
    locations: Vec<Location>,
}

impl AccumulatedLocations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn as_slice(&self) -> &[Location] {
        &self.locations
    }

    /// Append all unknown locations and return how many were new.
    pub fn merge(&mut self, fetched: impl IntoIterator<Item = Location>) -> usize {
        let before = self.locations.len();
        for location in fetched {
            if self.ids.insert(location.id.clone()) {
                self.locations.push(location);
            }
        }
        self.locations.len() - before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gems_entities::builders::*;

    fn new_location(id: &str) -> Location {
        Location::build().id(id).name(id).finish()
    }

    #[test]
    fn merge_skips_known_ids() {
        let mut acc = AccumulatedLocations::new();
        assert_eq!(acc.merge(vec![new_location("a"), new_location("b")]), 2);
        assert_eq!(acc.merge(vec![new_location("b"), new_location("c")]), 1);
        let ids: Vec<_> = acc.as_slice().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert!(acc.contains("c"));
    }

    #[test]
    fn duplicates_within_one_batch() {
        let mut acc = AccumulatedLocations::new();
        assert_eq!(acc.merge(vec![new_location("a"), new_location("a")]), 1);
        assert_eq!(acc.len(), 1);
    }

    #[test]
    fn first_version_wins() {
        let mut acc = AccumulatedLocations::new();
        acc.merge(vec![Location::build().id("a").name("old").finish()]);
        acc.merge(vec![Location::build().id("a").name("new").finish()]);
        assert_eq!(acc.as_slice()[0].name, "old");
    }
}
