use crate::{address::*, category::*, geo::*, id::*, photo::*, review::*, time::*};

/// A hidden gem as it is shown on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub pos: MapPoint,
    pub address: Option<Address>,
    // Ordered, the first photo is the cover.
    pub photos: Vec<Photo>,
    pub status: ReviewStatus,
    pub submitted_by: Option<Id>,
    pub created_at: Option<Timestamp>,
}

impl Location {
    pub fn city(&self) -> Option<&str> {
        self.address.as_ref().and_then(|a| a.city.as_deref())
    }

    pub fn street(&self) -> Option<&str> {
        self.address.as_ref().and_then(|a| a.street.as_deref())
    }

    pub fn cover_photo(&self) -> Option<&Photo> {
        self.photos.first()
    }
}
