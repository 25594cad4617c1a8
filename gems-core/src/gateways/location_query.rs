use std::future::Future;

use super::Result;
use crate::entities::{Location, MapBbox};

/// Read access to the published locations.
///
/// Implementations are expected to retry transient failures
/// on their own before giving up. An area without any
/// location is not an error but an empty list.
pub trait LocationQueryGateway {
    fn locations_in_bbox(&self, bbox: &MapBbox)
        -> impl Future<Output = Result<Vec<Location>>> + Send;

    fn all_locations(&self) -> impl Future<Output = Result<Vec<Location>>> + Send;
}
