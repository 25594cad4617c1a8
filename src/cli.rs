use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::Result;
use clap::{Parser, Subcommand};

use gems_application::prelude::*;
use gems_boundary::SearchQuery;
use gems_core::{
    bbox::InBBox, entities::*, filter::LocationFilter,
    gateways::location_query::LocationQueryGateway, loader::ViewportLoader,
};
use gems_frontend_api::{gateway::into_entity, PublicApi};

use crate::config::Config;

/// Time to let the loader pick up a command before waiting for it.
const SETTLE_DELAY: Duration = Duration::from_millis(50);

const MAX_LISTED_CELLS: usize = 16;

#[derive(Parser, Debug)]
#[command(author, version, about = "Discover hidden gems on the map")]
pub struct Args {
    /// Configuration file (default: hidden-gems.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Base URL of the public API (overrides the configuration)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pan the map through a sequence of viewports and load the locations incrementally
    Explore {
        /// Viewport: swLat,swLng,neLat,neLng (the first one initializes the map)
        #[arg(long = "viewport", required = true, allow_hyphen_values = true)]
        viewports: Vec<MapBbox>,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show the grid cells that are required for a sequence of viewports
    Cells {
        /// Viewport: swLat,swLng,neLat,neLng
        #[arg(long = "viewport", required = true, allow_hyphen_values = true)]
        viewports: Vec<MapBbox>,
    },

    /// List all locations
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show a single location
    Show { id: String },

    /// Search for locations
    Search {
        query: String,

        #[arg(long)]
        category: Option<Category>,
    },
}

#[derive(clap::Args, Debug)]
struct FilterArgs {
    /// Only show locations of this category
    #[arg(long)]
    category: Option<Category>,

    /// Only show locations containing this text
    #[arg(long)]
    text: Option<String>,
}

impl From<FilterArgs> for LocationFilter {
    fn from(from: FilterArgs) -> Self {
        let FilterArgs { category, text } = from;
        Self { category, text }
    }
}

pub async fn run(args: Args) -> Result<()> {
    let Args {
        config,
        api_url,
        command,
    } = args;
    let mut cfg = Config::try_load_from_file_or_default(config)?;
    if let Some(api_url) = api_url {
        cfg.api.base_url = api_url;
    }
    let api = PublicApi::new(cfg.api.base_url.clone()).with_retry_policy(cfg.api.retry);

    match command {
        Command::Explore { viewports, filter } => {
            explore(api, cfg.viewport, viewports, filter.into()).await
        }
        Command::Cells { viewports } => {
            cells(cfg.viewport, &viewports);
            Ok(())
        }
        Command::List { filter } => {
            let locations = api.all_locations().await?;
            let filter = LocationFilter::from(filter);
            print_locations(&filter.apply(&locations));
            Ok(())
        }
        Command::Show { id } => {
            let location = into_entity(api.location(&id).await?)?;
            print_location_details(&location);
            Ok(())
        }
        Command::Search { query, category } => {
            let query = SearchQuery {
                query,
                category: category.map(|c| c.to_string()),
            };
            let locations = api
                .search(&query)
                .await?
                .into_iter()
                .map(into_entity)
                .collect::<Result<Vec<_>, _>>()?;
            print_locations(&locations);
            Ok(())
        }
    }
}

async fn explore(
    api: PublicApi,
    config: ViewportConfig,
    viewports: Vec<MapBbox>,
    filter: LocationFilter,
) -> Result<()> {
    let mut loader = spawn_viewport_loader(Arc::new(api), config);
    loader.set_category(filter.category);
    loader.set_search_text(filter.text);

    for (i, viewport) in viewports.into_iter().enumerate() {
        if i == 0 {
            loader.map_ready(viewport)?;
            tokio::time::sleep(SETTLE_DELAY).await;
        } else {
            loader.viewport_changed(viewport)?;
            tokio::time::sleep(config.debounce + SETTLE_DELAY).await;
        }
        while loader.is_loading() {
            loader.changed().await?;
        }
        let LoaderState {
            locations,
            error,
            covered_cells,
            fetch_count,
            ..
        } = loader.state();
        if let Some(err) = error {
            log::warn!("{err}");
        }
        let visible = locations.iter().filter(|l| l.in_bbox(&viewport)).count();
        log::info!(
            "{viewport}: {visible} visible, {} loaded, {covered_cells} cells covered, {fetch_count} fetches",
            locations.len()
        );
    }
    print_locations(&loader.locations());
    Ok(())
}

fn cells(config: ViewportConfig, viewports: &[MapBbox]) {
    let mut loader = ViewportLoader::new(config.loader);
    for viewport in viewports {
        let cells = loader.required_cells(viewport);
        println!("viewport {viewport}");
        println!("  buffered {}", loader.buffered(viewport));
        println!(
            "  cells    lat {:?} x lng {:?} ({} cells)",
            cells.lat_indexes(),
            cells.lng_indexes(),
            cells.len()
        );
        if cells.len() <= MAX_LISTED_CELLS {
            let keys: Vec<_> = cells.iter().map(|cell| cell.to_string()).collect();
            println!("           {}", keys.join(" "));
        }
        match loader.plan(viewport) {
            Some(plan) => {
                let missing = loader.coverage().count_missing(&plan.cells);
                println!("  fetch    {} ({missing} cells missing)", plan.bbox);
                loader.complete(plan, vec![]);
            }
            None => println!("  covered"),
        }
    }
}

fn print_locations(locations: &[Location]) {
    for location in locations {
        let Location {
            id,
            name,
            category,
            pos,
            ..
        } = location;
        let city = location
            .city()
            .map(|city| format!(" ({city})"))
            .unwrap_or_default();
        let category: &str = category.as_ref();
        println!("{id}  {category:<10} {pos}  {name}{city}");
    }
    println!("{} locations", locations.len());
}

fn print_location_details(location: &Location) {
    let Location {
        id,
        name,
        description,
        category,
        pos,
        address,
        photos,
        status,
        submitted_by,
        created_at,
    } = location;
    let style = category.style();
    println!("{} {name}", style.icon);
    println!("id:          {id}");
    println!("category:    {}", style.label);
    println!("position:    {pos}");
    if let Some(address) = address {
        let parts: Vec<_> = [address.street.as_deref(), address.city.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        println!("address:     {}", parts.join(", "));
    }
    println!("status:      {status}");
    if let Some(submitted_by) = submitted_by {
        println!("submitted by {submitted_by}");
    }
    if let Some(created_at) = created_at {
        println!("created at:  {created_at}");
    }
    if let Some(cover) = location.cover_photo() {
        println!("cover:       {}", cover.preview_url());
    }
    if !description.is_empty() {
        println!();
        println!("{description}");
    }
    for photo in photos.iter().skip(1) {
        let caption = photo.caption.as_deref().unwrap_or_default();
        println!("photo:       {} {caption}", photo.preview_url());
    }
}
