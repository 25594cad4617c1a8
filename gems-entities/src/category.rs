use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoEnumIterator};

/// The kind of a hidden gem.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display, EnumCount, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Category {
    Cafe,
    Art,
    Park,
    Shop,
    Restaurant,
    Museum,
    Viewpoint,
    Nightlife,
    #[default]
    Other,
}

/// How a category is presented on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub label: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

impl Category {
    /// Lenient conversion of the free-text category stored by the API.
    ///
    /// Unknown categories end up as [`Category::Other`].
    pub fn from_tag(tag: &str) -> Self {
        tag.trim().parse().unwrap_or_default()
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    #[rustfmt::skip]
    pub const fn style(self) -> CategoryStyle {
        let (label, color, icon) = match self {
            Self::Cafe       => ("Cafe",       "#8B4513", "☕"),
            Self::Art        => ("Art",        "#FF6B6B", "🎨"),
            Self::Park       => ("Park",       "#51CF66", "🌳"),
            Self::Shop       => ("Shop",       "#FFD93D", "🛍️"),
            Self::Restaurant => ("Restaurant", "#FF8C42", "🍽️"),
            Self::Museum     => ("Museum",     "#6C5CE7", "🏛️"),
            Self::Viewpoint  => ("Viewpoint",  "#A29BFE", "🏞️"),
            Self::Nightlife  => ("Nightlife",  "#FF7675", "🌙"),
            Self::Other      => ("Other",      "#95A5A6", "📍"),
        };
        CategoryStyle { label, color, icon }
    }
}
