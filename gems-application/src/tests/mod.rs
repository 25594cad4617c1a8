mod resource;

pub mod prelude {
    use std::{
        future::Future,
        sync::{
            atomic::{AtomicBool, AtomicUsize, Ordering},
            Mutex,
        },
        time::Duration,
    };

    pub use gems_core::{
        bbox::{extend_bbox, InBBox},
        entities::*,
        gateways::{self, location_query::LocationQueryGateway},
    };
    pub use gems_entities::builders::*;
    pub use tokio::time::sleep;

    pub use crate::prelude::*;

    pub const DEBOUNCE: Duration = Duration::from_millis(500);

    pub fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Wait long enough for any pending debounce to fire.
    pub async fn settle() {
        sleep(DEBOUNCE * 2).await;
    }

    pub fn new_location(id: &str, name: &str, category: Category, lat: f64, lng: f64) -> Location {
        Location::build()
            .id(id)
            .name(name)
            .category(category)
            .lat_lng(lat, lng)
            .finish()
    }

    /// An in-memory gateway that records every request.
    #[derive(Debug, Default)]
    pub struct MockGateway {
        locations: Vec<Location>,
        latency: Option<Duration>,
        failing: AtomicBool,
        bbox_requests: Mutex<Vec<MapBbox>>,
        all_requests: AtomicUsize,
    }

    impl MockGateway {
        pub fn new(locations: Vec<Location>) -> Self {
            Self {
                locations,
                ..Default::default()
            }
        }

        pub fn with_latency(mut self, latency: Duration) -> Self {
            self.latency = Some(latency);
            self
        }

        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        pub fn bbox_requests(&self) -> Vec<MapBbox> {
            self.bbox_requests.lock().unwrap().clone()
        }

        pub fn all_requests(&self) -> usize {
            self.all_requests.load(Ordering::SeqCst)
        }

        fn respond<T: Send + 'static>(
            &self,
            result: T,
        ) -> impl Future<Output = gateways::Result<T>> + Send {
            let failing = self.failing.load(Ordering::SeqCst);
            let latency = self.latency;
            async move {
                if let Some(latency) = latency {
                    sleep(latency).await;
                }
                if failing {
                    return Err(gateways::Error::Fetch("network unreachable".into()));
                }
                Ok(result)
            }
        }
    }

    impl LocationQueryGateway for MockGateway {
        fn locations_in_bbox(
            &self,
            bbox: &MapBbox,
        ) -> impl Future<Output = gateways::Result<Vec<Location>>> + Send {
            self.bbox_requests.lock().unwrap().push(*bbox);
            let found = self
                .locations
                .iter()
                .filter(|l| l.in_bbox(bbox))
                .cloned()
                .collect();
            self.respond(found)
        }

        fn all_locations(&self) -> impl Future<Output = gateways::Result<Vec<Location>>> + Send {
            self.all_requests.fetch_add(1, Ordering::SeqCst);
            self.respond(self.locations.clone())
        }
    }
}
