//! Self-contained HTML map pages.

mod static_map;
mod view;

pub use self::{static_map::*, view::*};
