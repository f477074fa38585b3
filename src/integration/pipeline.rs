//! OccupancyPipeline for combining a track source with zone counting.

use image::RgbImage;

use crate::render::ZoneRenderer;
use crate::zone::ZoneOccupancyTracker;

use super::TrackSource;

/// Hosts a [`ZoneOccupancyTracker`] behind a per-frame track source.
///
/// Each processed frame pulls the source's tracks, updates every zone, and
/// draws the overlay onto the frame buffer. The pipeline owns the tracker
/// explicitly; collaborators reach it through the accessors rather than any
/// ambient global.
pub struct OccupancyPipeline<S: TrackSource> {
    source: S,
    tracker: ZoneOccupancyTracker,
    renderer: ZoneRenderer,
    next_frame_id: u64,
}

impl<S: TrackSource> OccupancyPipeline<S> {
    /// Create a pipeline with the default overlay style.
    pub fn new(source: S, tracker: ZoneOccupancyTracker) -> Self {
        Self {
            source,
            tracker,
            renderer: ZoneRenderer::default(),
            next_frame_id: 0,
        }
    }

    /// Replace the overlay renderer.
    pub fn with_renderer(mut self, renderer: ZoneRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Process a single frame: update zone occupancy from the source's
    /// tracks and draw the overlay in place.
    ///
    /// Frame ids are assigned from an internal counter, one per call, so the
    /// occupancy tracker sees strictly increasing ids.
    pub fn process_frame(&mut self, frame: &mut RgbImage) -> Result<(), S::Error> {
        self.next_frame_id += 1;
        let frame_id = self.next_frame_id;

        let tracks = self.source.tracks(frame)?;
        for track in &tracks {
            self.tracker.update(frame_id, track);
        }
        self.renderer.draw(frame, &self.tracker);
        Ok(())
    }

    /// Get a reference to the occupancy tracker.
    pub fn tracker(&self) -> &ZoneOccupancyTracker {
        &self.tracker
    }

    /// Get a mutable reference to the occupancy tracker.
    pub fn tracker_mut(&mut self) -> &mut ZoneOccupancyTracker {
        &mut self.tracker
    }

    /// Get a reference to the underlying track source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the underlying track source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
