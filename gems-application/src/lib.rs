#[macro_use]
extern crate log;

pub mod debounce;
pub mod error;
pub mod map_view;
pub mod resource;
pub mod viewport;

pub mod prelude {
    pub use super::{
        error::{AppError, LoadError},
        map_view::MapView,
        resource::{spawn_locations_resource, LocationsResource, ResourceState},
        viewport::{spawn_viewport_loader, LoaderState, ViewportConfig, ViewportLoaderHandle},
    };
}

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use gems_core::{entities::*, gateways::location_query::LocationQueryGateway};

#[cfg(test)]
pub(crate) mod tests;
