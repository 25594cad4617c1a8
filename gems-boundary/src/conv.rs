use super::*;
use gems_entities as e;

impl From<e::review::ReviewStatus> for ReviewStatus {
    fn from(from: e::review::ReviewStatus) -> Self {
        use e::review::ReviewStatus as E;
        match from {
            E::Pending => Self::Pending,
            E::Approved => Self::Approved,
            E::Rejected => Self::Rejected,
        }
    }
}

impl From<ReviewStatus> for e::review::ReviewStatus {
    fn from(from: ReviewStatus) -> Self {
        match from {
            ReviewStatus::Pending => Self::Pending,
            ReviewStatus::Approved => Self::Approved,
            ReviewStatus::Rejected => Self::Rejected,
        }
    }
}

impl From<e::photo::Photo> for Photo {
    fn from(from: e::photo::Photo) -> Self {
        let e::photo::Photo {
            id,
            url,
            thumbnail_url,
            caption,
        } = from;
        Self {
            id: id.into(),
            url,
            thumbnail_url,
            caption,
        }
    }
}

impl From<Photo> for e::photo::Photo {
    fn from(from: Photo) -> Self {
        let Photo {
            id,
            url,
            thumbnail_url,
            caption,
        } = from;
        Self {
            id: id.into(),
            url,
            thumbnail_url,
            caption,
        }
    }
}

impl From<e::geo::MapBbox> for BoundsQuery {
    fn from(from: e::geo::MapBbox) -> Self {
        Self {
            min_lat: from.min_lat(),
            max_lat: from.max_lat(),
            min_lng: from.min_lng(),
            max_lng: from.max_lng(),
        }
    }
}

impl From<e::location::Location> for Location {
    fn from(from: e::location::Location) -> Self {
        let e::location::Location {
            id,
            name,
            description,
            category,
            pos,
            address,
            photos,
            status,
            submitted_by,
            created_at,
        } = from;
        let (address, city) = address
            .map(|a| (a.street, a.city))
            .unwrap_or_default();
        Self {
            id: id.into(),
            name,
            description,
            category: category.to_string(),
            latitude: pos.lat(),
            longitude: pos.lng(),
            address,
            city,
            photos: photos.into_iter().map(Into::into).collect(),
            status: Some(status.into()),
            submitted_by_id: submitted_by.map(Into::into),
            created_at: created_at.map(Into::into),
        }
    }
}

impl TryFrom<Location> for e::location::Location {
    type Error = e::geo::InvalidCoordinate;

    fn try_from(from: Location) -> Result<Self, Self::Error> {
        let Location {
            id,
            name,
            description,
            category,
            latitude,
            longitude,
            address,
            city,
            photos,
            status,
            submitted_by_id,
            created_at,
        } = from;
        let pos = e::geo::MapPoint::try_from_lat_lng_deg(latitude, longitude)?;
        let address = e::address::Address {
            street: address.filter(|s| !s.trim().is_empty()),
            city: city.filter(|s| !s.trim().is_empty()),
        };
        let address = (!address.is_empty()).then_some(address);
        Ok(Self {
            id: id.into(),
            name,
            description,
            category: e::category::Category::from_tag(&category),
            pos,
            address,
            photos: photos.into_iter().map(Into::into).collect(),
            // The public listing only contains approved locations
            status: status.map(Into::into).unwrap_or(e::review::ReviewStatus::Approved),
            submitted_by: submitted_by_id.map(Into::into),
            created_at: created_at.map(Into::into),
        })
    }
}
