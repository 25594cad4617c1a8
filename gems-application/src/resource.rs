use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::{
    error::{AppError, LoadError},
    *,
};

#[derive(Debug, Clone, Default)]
pub struct ResourceState {
    pub locations: Arc<Vec<Location>>,
    pub loading: bool,
    pub error: Option<LoadError>,
}

/// The complete list of locations, loaded once in the background.
#[derive(Debug, Clone)]
pub struct LocationsResource {
    reload: mpsc::UnboundedSender<()>,
    state: watch::Receiver<ResourceState>,
}

/// Start loading all locations.
///
/// The task stops when the last handle is dropped.
pub fn spawn_locations_resource<G>(gateway: Arc<G>) -> LocationsResource
where
    G: LocationQueryGateway + Send + Sync + 'static,
{
    let (reload_tx, mut reload_rx) = mpsc::unbounded_channel();
    let (state_tx, state_rx) = watch::channel(ResourceState {
        loading: true,
        ..Default::default()
    });
    tokio::spawn(async move {
        loop {
            state_tx.send_modify(|state| state.loading = true);
            let result = gateway.all_locations().await;
            state_tx.send_modify(|state| {
                state.loading = false;
                match result {
                    Ok(locations) => {
                        debug!("Loaded {} locations", locations.len());
                        state.locations = Arc::new(locations);
                        state.error = None;
                    }
                    Err(err) => {
                        error!("Failed to load all locations: {err}");
                        state.error = Some(err.into());
                    }
                }
            });
            if reload_rx.recv().await.is_none() {
                break;
            }
            // Collapse a burst of reload requests into a single one
            while reload_rx.try_recv().is_ok() {}
        }
    });
    LocationsResource {
        reload: reload_tx,
        state: state_rx,
    }
}

impl LocationsResource {
    pub fn locations(&self) -> Arc<Vec<Location>> {
        Arc::clone(&self.state.borrow().locations)
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn error(&self) -> Option<LoadError> {
        self.state.borrow().error.clone()
    }

    pub fn state(&self) -> ResourceState {
        self.state.borrow().clone()
    }

    /// Fetch the locations again, e.g. after a failure.
    pub fn reload(&self) -> Result<()> {
        self.reload.send(()).map_err(|_| AppError::Stopped)
    }

    /// Wait until the state has changed.
    pub async fn changed(&mut self) -> Result<()> {
        self.state.changed().await.map_err(|_| AppError::Stopped)
    }
}
