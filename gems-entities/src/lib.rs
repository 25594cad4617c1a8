#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # gems-entities
//!
//! Reusable, agnostic domain entities for Hidden Gems.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod category;
pub mod geo;
pub mod id;
pub mod location;
pub mod photo;
pub mod review;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
