use std::sync::Arc;

use crate::{
    error::LoadError,
    resource::{spawn_locations_resource, LocationsResource},
    viewport::{spawn_viewport_loader, ViewportConfig, ViewportLoaderHandle},
    *,
};

/// Everything a map display needs to observe.
///
/// Combines the complete location list that is loaded on
/// start-up with the incremental loading of the viewport.
#[derive(Debug, Clone)]
pub struct MapView {
    resource: LocationsResource,
    viewport: ViewportLoaderHandle,
}

impl MapView {
    pub fn spawn<G>(gateway: G, config: ViewportConfig) -> Self
    where
        G: LocationQueryGateway + Send + Sync + 'static,
    {
        let gateway = Arc::new(gateway);
        let resource = spawn_locations_resource(Arc::clone(&gateway));
        let viewport = spawn_viewport_loader(gateway, config);
        Self { resource, viewport }
    }

    pub fn resource(&self) -> &LocationsResource {
        &self.resource
    }

    pub fn viewport(&self) -> &ViewportLoaderHandle {
        &self.viewport
    }

    /// The filtered locations of the viewport loader.
    pub fn locations(&self) -> Vec<Location> {
        self.viewport.locations()
    }

    pub fn is_loading(&self) -> bool {
        self.resource.is_loading() || self.viewport.is_loading()
    }

    pub fn error(&self) -> Option<LoadError> {
        self.resource.error().or_else(|| self.viewport.error())
    }

    pub fn retry(&self) -> Result<()> {
        self.resource.reload()
    }
}
