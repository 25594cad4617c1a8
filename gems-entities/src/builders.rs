pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::location_builder::*;

pub mod location_builder {

    use super::*;
    use crate::{category::*, geo::*, id::*, location::*, photo::*, review::*};

    #[derive(Debug)]
    pub struct LocationBuild {
        location: Location,
    }

    impl LocationBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.location.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.location.name = name.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.location.description = desc.into();
            self
        }
        pub fn category(mut self, category: Category) -> Self {
            self.location.category = category;
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.location.pos = pos;
            self
        }
        pub fn lat_lng(self, lat: f64, lng: f64) -> Self {
            self.pos(MapPoint::from_lat_lng_deg(lat, lng))
        }
        pub fn city(mut self, city: &str) -> Self {
            let mut address = self.location.address.take().unwrap_or_default();
            address.city = Some(city.into());
            self.location.address = Some(address);
            self
        }
        pub fn street(mut self, street: &str) -> Self {
            let mut address = self.location.address.take().unwrap_or_default();
            address.street = Some(street.into());
            self.location.address = Some(address);
            self
        }
        pub fn photo(mut self, url: &str) -> Self {
            self.location.photos.push(Photo {
                id: Id::new(),
                url: url.into(),
                thumbnail_url: None,
                caption: None,
            });
            self
        }
        pub fn status(mut self, status: ReviewStatus) -> Self {
            self.location.status = status;
            self
        }
        pub fn finish(self) -> Location {
            self.location
        }
    }

    impl Builder for Location {
        type Build = LocationBuild;
        fn build() -> LocationBuild {
            LocationBuild {
                location: Location {
                    id: Id::new(),
                    name: "".into(),
                    description: "".into(),
                    category: Category::Other,
                    pos: MapPoint::default(),
                    address: None,
                    photos: vec![],
                    status: ReviewStatus::Approved,
                    submitted_by: None,
                    created_at: None,
                },
            }
        }
    }
}
