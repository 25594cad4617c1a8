use std::future::Future;

use gems_boundary as json;
use gems_core::{
    entities::{Location, MapBbox},
    gateways::{self, location_query::LocationQueryGateway},
};

use crate::{Error, PublicApi};

impl From<Error> for gateways::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Fetch(msg) | Error::Decode(msg) => Self::Fetch(msg),
            Error::Api(err) => Self::Api(err.to_string()),
        }
    }
}

impl LocationQueryGateway for PublicApi {
    fn locations_in_bbox(
        &self,
        bbox: &MapBbox,
    ) -> impl Future<Output = gateways::Result<Vec<Location>>> + Send {
        let bounds = json::BoundsQuery::from(*bbox);
        async move {
            let locations = self.locations_in_bounds(&bounds).await?;
            Ok(into_entities(locations))
        }
    }

    fn all_locations(&self) -> impl Future<Output = gateways::Result<Vec<Location>>> + Send {
        async move {
            let locations = self.locations().await?;
            Ok(into_entities(locations))
        }
    }
}

/// Convert a single location, e.g. for `GET /locations/{id}`.
pub fn into_entity(location: json::Location) -> gateways::Result<Location> {
    let id = location.id.clone();
    Location::try_from(location)
        .map_err(|err| gateways::Error::InvalidLocation(format!("{id}: {err}")))
}

/// Records with invalid coordinates are skipped.
fn into_entities(locations: Vec<json::Location>) -> Vec<Location> {
    locations
        .into_iter()
        .filter_map(|location| {
            into_entity(location)
                .map_err(|err| log::warn!("Skipping location: {err}"))
                .ok()
        })
        .collect()
}
