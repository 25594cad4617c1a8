//! The incremental loading of the locations around the visible map area.
//!
//! A single task owns the [`ViewportLoader`] together with the debouncer.
//! Viewport changes and fetch results are sent to that task, so the
//! coverage and the accumulated locations are never shared.

use std::{sync::Arc, time::Duration};

use gems_core::{
    filter::LocationFilter,
    gateways,
    loader::{FetchPlan, ViewportLoader, ViewportLoaderConfig},
};
use tokio::sync::{mpsc, watch};

use crate::{
    debounce::Debouncer,
    error::{AppError, LoadError},
    *,
};

pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportConfig {
    pub loader: ViewportLoaderConfig,
    pub debounce: Duration,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            loader: ViewportLoaderConfig::default(),
            debounce: DEFAULT_DEBOUNCE_DELAY,
        }
    }
}

/// Observable state of the loader.
#[derive(Debug, Clone, Default)]
pub struct LoaderState {
    /// All locations fetched so far, in the order they arrived.
    pub locations: Arc<Vec<Location>>,
    pub loading: bool,
    pub error: Option<LoadError>,
    /// Number of grid cells that have been loaded.
    pub covered_cells: usize,
    /// Number of fetches that have been issued.
    pub fetch_count: usize,
}

#[derive(Debug)]
enum Command {
    MapReady(MapBbox),
    ViewportChanged(MapBbox),
}

#[derive(Debug)]
struct FetchOutcome {
    plan: FetchPlan,
    result: gateways::Result<Vec<Location>>,
}

/// Handle of a running viewport loader.
///
/// The loader task stops as soon as the last handle is dropped.
#[derive(Debug, Clone)]
pub struct ViewportLoaderHandle {
    commands: mpsc::UnboundedSender<Command>,
    state: watch::Receiver<LoaderState>,
    filter: Arc<watch::Sender<LocationFilter>>,
}

/// Spawn the loader task on the current tokio runtime.
pub fn spawn_viewport_loader<G>(gateway: Arc<G>, config: ViewportConfig) -> ViewportLoaderHandle
where
    G: LocationQueryGateway + Send + Sync + 'static,
{
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();
    let (state_tx, state_rx) = watch::channel(LoaderState::default());
    let (filter_tx, _) = watch::channel(LocationFilter::default());
    let task = LoaderTask {
        gateway,
        loader: ViewportLoader::new(config.loader),
        debouncer: Debouncer::new(config.debounce),
        in_flight: 0,
        fetch_tx,
        state: state_tx,
    };
    tokio::spawn(task.run(command_rx, fetch_rx));
    ViewportLoaderHandle {
        commands: command_tx,
        state: state_rx,
        filter: Arc::new(filter_tx),
    }
}

impl ViewportLoaderHandle {
    /// The map has been initialized with its first viewport.
    ///
    /// The viewport is loaded immediately without waiting for
    /// the debounce delay.
    pub fn map_ready(&self, viewport: MapBbox) -> Result<()> {
        self.send(Command::MapReady(viewport))
    }

    /// The visible area changed, e.g. after panning or zooming.
    pub fn viewport_changed(&self, viewport: MapBbox) -> Result<()> {
        self.send(Command::ViewportChanged(viewport))
    }

    fn send(&self, cmd: Command) -> Result<()> {
        self.commands.send(cmd).map_err(|_| AppError::Stopped)
    }

    pub fn set_category(&self, category: Option<Category>) {
        self.filter.send_modify(|filter| filter.category = category);
    }

    pub fn set_search_text(&self, text: Option<String>) {
        let text = text.filter(|t| !t.trim().is_empty());
        self.filter.send_modify(|filter| filter.text = text);
    }

    pub fn filter(&self) -> LocationFilter {
        self.filter.borrow().clone()
    }

    /// The accumulated locations that pass the current filter.
    pub fn locations(&self) -> Vec<Location> {
        let filter = self.filter.borrow();
        filter.apply(self.state.borrow().locations.iter())
    }

    pub fn all_locations(&self) -> Arc<Vec<Location>> {
        Arc::clone(&self.state.borrow().locations)
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn error(&self) -> Option<LoadError> {
        self.state.borrow().error.clone()
    }

    pub fn state(&self) -> LoaderState {
        self.state.borrow().clone()
    }

    /// Wait until the state has changed.
    pub async fn changed(&mut self) -> Result<()> {
        self.state.changed().await.map_err(|_| AppError::Stopped)
    }
}

struct LoaderTask<G> {
    gateway: Arc<G>,
    loader: ViewportLoader,
    debouncer: Debouncer<MapBbox>,
    in_flight: usize,
    fetch_tx: mpsc::UnboundedSender<FetchOutcome>,
    state: watch::Sender<LoaderState>,
}

impl<G> LoaderTask<G>
where
    G: LocationQueryGateway + Send + Sync + 'static,
{
    async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<Command>,
        mut fetched: mpsc::UnboundedReceiver<FetchOutcome>,
    ) {
        debug!("Viewport loader started");
        loop {
            tokio::select! {
                cmd = commands.recv() => {
                    let Some(cmd) = cmd else {
                        break;
                    };
                    self.handle_command(cmd);
                }
                viewport = self.debouncer.ready() => {
                    self.load(&viewport);
                }
                Some(outcome) = fetched.recv() => {
                    self.handle_fetch_outcome(outcome);
                }
            }
        }
        debug!("Viewport loader stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::MapReady(viewport) => {
                self.debouncer.cancel();
                self.load(&viewport);
            }
            Command::ViewportChanged(viewport) => {
                self.debouncer.trigger(viewport);
            }
        }
    }

    fn load(&mut self, viewport: &MapBbox) {
        let Some(plan) = self.loader.plan(viewport) else {
            return;
        };
        self.in_flight += 1;
        self.state.send_modify(|state| {
            state.loading = true;
            state.fetch_count += 1;
        });
        let gateway = Arc::clone(&self.gateway);
        let fetch_tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let result = gateway.locations_in_bbox(&plan.bbox).await;
            if fetch_tx.send(FetchOutcome { plan, result }).is_err() {
                debug!("Viewport loader stopped before the fetch completed");
            }
        });
    }

    fn handle_fetch_outcome(&mut self, outcome: FetchOutcome) {
        let FetchOutcome { plan, result } = outcome;
        self.in_flight = self.in_flight.saturating_sub(1);
        let loading = self.in_flight > 0;
        match result {
            Ok(fetched) => {
                let added = self.loader.complete(plan, fetched);
                let covered_cells = self.loader.coverage().len();
                let locations = (added > 0).then(|| Arc::new(self.loader.locations().to_vec()));
                self.state.send_modify(|state| {
                    if let Some(locations) = locations {
                        state.locations = locations;
                    }
                    state.loading = loading;
                    state.error = None;
                    state.covered_cells = covered_cells;
                });
            }
            Err(err) => {
                error!("Failed to load locations in {}: {err}", plan.bbox);
                self.state.send_modify(|state| {
                    state.loading = loading;
                    state.error = Some(err.into());
                });
            }
        }
    }
}
