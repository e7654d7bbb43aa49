#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # bridgemap-entities
//!
//! Reusable, agnostic domain entities for the bridge map.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod bridge;
pub mod geo;
pub mod map;
pub mod marker;
pub mod planar;
pub mod table;
