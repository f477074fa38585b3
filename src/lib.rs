//! Zone-based occupancy counting for multi-object tracking pipelines.
//!
//! Given per-frame tracked-object bounding boxes, this crate determines which
//! of a fixed set of named rectangular zones each object overlaps, and keeps
//! per-zone membership plus append-only enter/exit transition logs. Zone
//! outlines and occupancy counts can be drawn onto an RGB frame buffer.
//!
//! The detector, the identity-assigning tracker, and video I/O are external
//! collaborators: this crate only consumes their output through the
//! [`TrackRegion`] and [`TrackSource`] seams.

pub mod integration;
pub mod render;
pub mod zone;

pub use integration::{OccupancyPipeline, Track, TrackSource};
pub use render::{ZoneLabel, ZoneRenderer};
pub use zone::{
    ConfigError, Rect, TrackId, TrackRegion, Zone, ZoneConfig, ZoneOccupancyTracker, ZoneState,
    ZonesConfig,
};
