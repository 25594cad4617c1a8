use crate::entities::*;

/// Client side narrowing of the loaded locations.
///
/// An empty filter lets everything pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationFilter {
    pub category: Option<Category>,
    pub text: Option<String>,
}

impl LocationFilter {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.search_text().is_none()
    }

    fn search_text(&self) -> Option<String> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
    }

    pub fn matches(&self, location: &Location) -> bool {
        self.matches_text(location, self.search_text().as_deref())
    }

    fn matches_text(&self, location: &Location, text: Option<&str>) -> bool {
        if let Some(category) = self.category {
            if location.category != category {
                return false;
            }
        }
        let Some(text) = text else {
            return true;
        };
        [
            Some(location.name.as_str()),
            Some(location.description.as_str()),
            location.city(),
            location.street(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(text))
    }

    pub fn apply<'a>(&self, locations: impl IntoIterator<Item = &'a Location>) -> Vec<Location> {
        let text = self.search_text();
        locations
            .into_iter()
            .filter(|l| self.matches_text(l, text.as_deref()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gems_entities::builders::*;

    fn locations() -> Vec<Location> {
        vec![
            Location::build()
                .id("a")
                .name("Café Mrabet")
                .category(Category::Cafe)
                .city("Tunis")
                .finish(),
            Location::build()
                .id("b")
                .name("Belvedere Park")
                .description("Quiet hill with a view over the lake")
                .category(Category::Park)
                .finish(),
            Location::build()
                .id("c")
                .name("Sidi Bou Said lookout")
                .category(Category::Viewpoint)
                .street("Rue Habib Thameur")
                .finish(),
        ]
    }

    fn ids(locations: &[Location]) -> Vec<&str> {
        locations.iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_passes_everything() {
        let f = LocationFilter::default();
        assert!(f.is_empty());
        assert_eq!(ids(&f.apply(&locations())), vec!["a", "b", "c"]);
    }

    #[test]
    fn blank_text_is_ignored() {
        let f = LocationFilter {
            text: Some("   ".into()),
            ..Default::default()
        };
        assert!(f.is_empty());
        assert_eq!(f.apply(&locations()).len(), 3);
    }

    #[test]
    fn filter_by_category() {
        let f = LocationFilter {
            category: Some(Category::Park),
            ..Default::default()
        };
        assert_eq!(ids(&f.apply(&locations())), vec!["b"]);
    }

    #[test]
    fn filter_by_text_in_all_fields() {
        let search = |text: &str| {
            let f = LocationFilter {
                text: Some(text.into()),
                ..Default::default()
            };
            ids(&f.apply(&locations()))
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        };
        assert_eq!(search("tunis"), vec!["a"]);
        assert_eq!(search(" LAKE "), vec!["b"]);
        assert_eq!(search("habib"), vec!["c"]);
        assert_eq!(search("café"), vec!["a"]);
        assert!(search("beach").is_empty());
    }

    #[test]
    fn category_and_text_are_combined() {
        let f = LocationFilter {
            category: Some(Category::Viewpoint),
            text: Some("park".into()),
        };
        assert!(f.apply(&locations()).is_empty());
    }
}
