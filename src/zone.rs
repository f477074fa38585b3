mod config;
mod occupancy;
mod rect;
mod state;

pub use config::{ConfigError, ZoneConfig, ZonesConfig};
pub use occupancy::{TrackRegion, Zone, ZoneOccupancyTracker};
pub use rect::Rect;
pub use state::{TrackId, ZoneState};
