//! Trait for per-frame track providers.

use image::RgbImage;

use crate::zone::{Rect, TrackId, TrackRegion};

/// A tracked object handed over by the upstream tracker for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub id: TrackId,
    pub bbox: Rect,
}

impl Track {
    pub fn new(id: TrackId, bbox: Rect) -> Self {
        Self { id, bbox }
    }
}

impl TrackRegion for Track {
    fn track_id(&self) -> TrackId {
        self.id
    }

    fn bbox(&self) -> Rect {
        self.bbox
    }
}

/// Per-frame source of tracked objects.
///
/// Implement this trait to connect any multi-object tracker to the
/// occupancy counter.
///
/// # Example
///
/// ```ignore
/// use zonetrack_rs::{Track, TrackSource};
///
/// struct MyTracker {
///     // Your detector + tracker here
/// }
///
/// impl TrackSource for MyTracker {
///     type Error = std::io::Error;
///
///     fn tracks(&mut self, frame: &image::RgbImage) -> Result<Vec<Track>, Self::Error> {
///         // Run detection and identity assignment, return this frame's tracks
///         Ok(vec![])
///     }
/// }
/// ```
pub trait TrackSource {
    /// Error type for tracking failures.
    type Error;

    /// Produce the tracked objects visible in `frame`.
    fn tracks(&mut self, frame: &RgbImage) -> Result<Vec<Track>, Self::Error>;
}
