//! Business logic of the map client.
//!
//! Everything in here is synchronous and free of I/O,
//! the network is only reachable through the [`gateways`].

pub mod accumulated;
pub mod bbox;
pub mod coverage;
pub mod filter;
pub mod gateways;
pub mod grid;
pub mod loader;

pub mod entities {
    pub use gems_entities::{
        address::*, category::*, geo::*, id::*, location::*, photo::*, review::*, time::*,
    };
}
