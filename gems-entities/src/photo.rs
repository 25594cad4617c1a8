use crate::id::Id;

/// A photo reference of a location.
///
/// Only the URLs are known to the client, the binary data
/// is served by the upload storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id: Id,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub caption: Option<String>,
}

impl Photo {
    /// The URL that should be used for previews.
    pub fn preview_url(&self) -> &str {
        self.thumbnail_url.as_deref().unwrap_or(&self.url)
    }
}
