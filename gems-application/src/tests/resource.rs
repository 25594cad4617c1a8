use std::{sync::Arc, time::Duration};

use super::prelude::*;

fn locations() -> Vec<Location> {
    vec![
        new_location("x", "Tea house", Category::Cafe, 48.2, 16.3),
        new_location("y", "Rooftop", Category::Viewpoint, 48.3, 16.4),
    ]
}

#[tokio::test(start_paused = true)]
async fn load_all_locations_on_start() {
    init_logging();
    let gateway = Arc::new(MockGateway::new(locations()).with_latency(Duration::from_millis(100)));
    let resource = spawn_locations_resource(Arc::clone(&gateway));
    assert!(resource.is_loading());
    sleep(Duration::from_millis(200)).await;
    assert!(!resource.is_loading());
    assert_eq!(resource.locations().len(), 2);
    assert!(resource.error().is_none());
    assert_eq!(gateway.all_requests(), 1);
}

#[tokio::test(start_paused = true)]
async fn reload_after_a_failure() {
    init_logging();
    let gateway = Arc::new(MockGateway::new(locations()));
    gateway.set_failing(true);
    let resource = spawn_locations_resource(Arc::clone(&gateway));
    sleep(Duration::from_millis(10)).await;
    assert!(resource.error().is_some());
    assert!(resource.locations().is_empty());

    gateway.set_failing(false);
    resource.reload().unwrap();
    sleep(Duration::from_millis(10)).await;
    assert!(resource.error().is_none());
    assert_eq!(resource.locations().len(), 2);
    assert_eq!(gateway.all_requests(), 2);
}

#[tokio::test(start_paused = true)]
async fn map_view_combines_loading_and_errors() {
    init_logging();
    let gateway = MockGateway::new(locations()).with_latency(Duration::from_secs(1));
    let view = MapView::spawn(gateway, ViewportConfig::default());
    assert!(view.is_loading());
    sleep(Duration::from_secs(2)).await;
    assert!(!view.is_loading());
    assert!(view.error().is_none());
    assert_eq!(view.resource().locations().len(), 2);

    view.viewport()
        .map_ready(MapBbox::from_bounds(48.1, 48.35, 16.2, 16.45))
        .unwrap();
    sleep(Duration::from_millis(10)).await;
    assert!(view.is_loading());
    assert!(!view.resource().is_loading());
    sleep(Duration::from_secs(2)).await;
    assert!(!view.is_loading());
    assert_eq!(view.locations().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn reload_burst_is_collapsed() {
    init_logging();
    let gateway = Arc::new(MockGateway::new(locations()).with_latency(Duration::from_secs(1)));
    let resource = spawn_locations_resource(Arc::clone(&gateway));
    sleep(Duration::from_millis(10)).await;
    assert!(resource.is_loading());
    for _ in 0..5 {
        resource.reload().unwrap();
    }
    sleep(Duration::from_secs(3)).await;
    assert!(!resource.is_loading());
    assert_eq!(resource.locations().len(), 2);
    assert_eq!(gateway.all_requests(), 2);
}
