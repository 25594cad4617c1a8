use std::{fmt, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

pub const LAT_DEG_MIN: f64 = -90.0;
pub const LAT_DEG_MAX: f64 = 90.0;
pub const LNG_DEG_MIN: f64 = -180.0;
pub const LNG_DEG_MAX: f64 = 180.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidCoordinate {
    #[error("Invalid latitude degrees: {0}")]
    Latitude(f64),
    #[error("Invalid longitude degrees: {0}")]
    Longitude(f64),
    #[error("Invalid number '{0}'")]
    Number(String),
    #[error("Failed to parse '{0}'")]
    Format(String),
    #[error("The south-west corner is not below and left of the north-east corner")]
    Corners,
}

/// A geographical location on a (flat) map in decimal degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    /// Create a point without validation.
    ///
    /// Use [`MapPoint::try_from_lat_lng_deg`] for untrusted input.
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Result<Self, InvalidCoordinate> {
        if !(LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat) {
            return Err(InvalidCoordinate::Latitude(lat));
        }
        if !(LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng) {
            return Err(InvalidCoordinate::Longitude(lng));
        }
        Ok(Self { lat, lng })
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&self.lat)
            && (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&self.lng)
    }

    fn parse_lat_lng_deg(lat_str: &str, lng_str: &str) -> Result<Self, InvalidCoordinate> {
        let lat = parse_deg(lat_str)?;
        let lng = parse_deg(lng_str)?;
        Self::try_from_lat_lng_deg(lat, lng)
    }
}

fn parse_deg(s: &str) -> Result<f64, InvalidCoordinate> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| InvalidCoordinate::Number(s.to_owned()))
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for MapPoint {
    type Err = InvalidCoordinate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((lat, lng)) = s.split(',').collect_tuple() else {
            return Err(InvalidCoordinate::Format(s.to_owned()));
        };
        Self::parse_lat_lng_deg(lat, lng)
    }
}

/// An axis-aligned bounding box on the map.
///
/// Boxes crossing the antimeridian are not supported,
/// i.e. the western edge is always left of the eastern edge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    pub const fn from_bounds(min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Self {
        Self::new(
            MapPoint::from_lat_lng_deg(min_lat, min_lng),
            MapPoint::from_lat_lng_deg(max_lat, max_lng),
        )
    }

    pub const fn south_west(&self) -> MapPoint {
        self.sw
    }

    pub const fn north_east(&self) -> MapPoint {
        self.ne
    }

    pub const fn min_lat(&self) -> f64 {
        self.sw.lat
    }

    pub const fn max_lat(&self) -> f64 {
        self.ne.lat
    }

    pub const fn min_lng(&self) -> f64 {
        self.sw.lng
    }

    pub const fn max_lng(&self) -> f64 {
        self.ne.lng
    }

    pub fn lat_span(&self) -> f64 {
        self.ne.lat - self.sw.lat
    }

    pub fn lng_span(&self) -> f64 {
        self.ne.lng - self.sw.lng
    }

    pub fn is_valid(&self) -> bool {
        self.sw.is_valid()
            && self.ne.is_valid()
            && self.sw.lat <= self.ne.lat
            && self.sw.lng <= self.ne.lng
    }

    pub fn is_empty(&self) -> bool {
        self.sw.lat >= self.ne.lat || self.sw.lng >= self.ne.lng
    }

    pub fn contains_point(&self, pt: MapPoint) -> bool {
        pt.lat >= self.sw.lat
            && pt.lat <= self.ne.lat
            && pt.lng >= self.sw.lng
            && pt.lng <= self.ne.lng
    }

    /// Clamp the box to the valid range of coordinates.
    pub fn clamp_to_world(self) -> Self {
        Self::from_bounds(
            self.min_lat().max(LAT_DEG_MIN),
            self.max_lat().min(LAT_DEG_MAX),
            self.min_lng().max(LNG_DEG_MIN),
            self.max_lng().min(LNG_DEG_MAX),
        )
    }
}

impl fmt::Display for MapBbox {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.sw, self.ne)
    }
}

/// Parses `sw_lat,sw_lng,ne_lat,ne_lng`.
impl FromStr for MapBbox {
    type Err = InvalidCoordinate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((sw_lat, sw_lng, ne_lat, ne_lng)) = s.split(',').collect_tuple() else {
            return Err(InvalidCoordinate::Format(s.to_owned()));
        };
        let sw = MapPoint::parse_lat_lng_deg(sw_lat, sw_lng)?;
        let ne = MapPoint::parse_lat_lng_deg(ne_lat, ne_lng)?;
        let bbox = Self::new(sw, ne);
        if bbox.is_empty() {
            return Err(InvalidCoordinate::Corners);
        }
        Ok(bbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_ranges() {
        assert!(MapPoint::try_from_lat_lng_deg(90.0, 180.0).is_ok());
        assert!(MapPoint::try_from_lat_lng_deg(-90.0, -180.0).is_ok());
        assert_eq!(
            MapPoint::try_from_lat_lng_deg(90.000001, 0.0),
            Err(InvalidCoordinate::Latitude(90.000001))
        );
        assert_eq!(
            MapPoint::try_from_lat_lng_deg(0.0, -180.000001),
            Err(InvalidCoordinate::Longitude(-180.000001))
        );
        assert!(!MapPoint::from_lat_lng_deg(91.0, 0.0).is_valid());
    }

    #[test]
    fn parse_point() {
        let p: MapPoint = "36.84,10.19".parse().unwrap();
        assert_eq!(p.lat(), 36.84);
        assert_eq!(p.lng(), 10.19);
        assert!("36.84".parse::<MapPoint>().is_err());
        assert!("x,10.19".parse::<MapPoint>().is_err());
    }

    #[test]
    fn parse_bbox() {
        let bbox: MapBbox = "10,0,20,10".parse().unwrap();
        assert_eq!(bbox, MapBbox::from_bounds(10.0, 20.0, 0.0, 10.0));
        assert_eq!(bbox.to_string(), "10,0,20,10");
        assert_eq!(
            "20,0,10,10".parse::<MapBbox>(),
            Err(InvalidCoordinate::Corners)
        );
        assert!("1,2,3".parse::<MapBbox>().is_err());
    }

    #[test]
    fn bbox_contains_point() {
        let bbox = MapBbox::from_bounds(-25.0, 25.0, -20.0, 30.0);
        assert!(bbox.contains_point(MapPoint::from_lat_lng_deg(-10.0, -15.0)));
        assert!(bbox.contains_point(MapPoint::from_lat_lng_deg(25.0, 30.0)));
        assert!(!bbox.contains_point(MapPoint::from_lat_lng_deg(-26.0, -15.0)));
        assert!(!bbox.contains_point(MapPoint::from_lat_lng_deg(10.0, 31.0)));
    }

    #[test]
    fn clamp_bbox_to_world() {
        let bbox = MapBbox::from_bounds(-95.0, 80.0, -170.0, 185.0).clamp_to_world();
        assert_eq!(bbox, MapBbox::from_bounds(-90.0, 80.0, -170.0, 180.0));
        assert!(bbox.is_valid());
    }
}
