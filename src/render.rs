//! Overlay rendering: zone outlines and occupancy count labels.

mod font;
mod overlay;

pub use overlay::{ZoneLabel, ZoneRenderer};
