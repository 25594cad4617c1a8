use crate::entities::*;

/// Grow the box by `ratio` of its own height and width on every side.
///
/// The latitude and the longitude margin are computed independently,
/// e.g. a ratio of `0.3` turns `10..20 x 0..10` into `7..23 x -3..13`.
/// The result is not clamped to the valid coordinate range.
pub fn extend_bbox(bbox: &MapBbox, ratio: f64) -> MapBbox {
    let lat_buffer = bbox.lat_span() * ratio;
    let lng_buffer = bbox.lng_span() * ratio;
    MapBbox::from_bounds(
        bbox.min_lat() - lat_buffer,
        bbox.max_lat() + lat_buffer,
        bbox.min_lng() - lng_buffer,
        bbox.max_lng() + lng_buffer,
    )
}

pub trait InBBox {
    fn in_bbox(&self, bbox: &MapBbox) -> bool;
}

impl InBBox for Location {
    fn in_bbox(&self, bbox: &MapBbox) -> bool {
        bbox.contains_point(self.pos)
    }
}
