//! Integration module for hosting zone occupancy counting inside a larger
//! detection/tracking pipeline.
//!
//! This module provides the seam between an upstream multi-object tracker
//! (ByteTrack, SORT, ...) and the [`ZoneOccupancyTracker`]: a `TrackSource`
//! yields per-frame tracks, and `OccupancyPipeline` feeds them through the
//! counter and draws the overlay.
//!
//! [`ZoneOccupancyTracker`]: crate::zone::ZoneOccupancyTracker

mod pipeline;
mod source;

pub use pipeline::OccupancyPipeline;
pub use source::{Track, TrackSource};
