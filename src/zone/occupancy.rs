//! Zone occupancy tracking across frames.

use std::collections::HashMap;

use log::{debug, info, warn};

use crate::zone::config::ZonesConfig;
use crate::zone::rect::Rect;
use crate::zone::state::{TrackId, Transition, ZoneState};

/// Minimal view of a tracked object: a stable identifier plus the current
/// bounding box, as produced by an upstream multi-object tracker.
pub trait TrackRegion {
    /// Identifier stable across frames for the same physical object.
    fn track_id(&self) -> TrackId;

    /// Current bounding box in pixel coordinates.
    fn bbox(&self) -> Rect;
}

/// A named rectangular region of interest, fixed after load.
#[derive(Debug, Clone)]
pub struct Zone {
    pub name: String,
    pub rect: Rect,
}

/// Per-zone occupancy bookkeeping over a stream of tracked objects.
///
/// One instance is constructed from configuration at startup and passed
/// explicitly to whatever drives the frame loop; zones are immutable for its
/// lifetime. All methods run on the calling thread, one object-update at a
/// time.
pub struct ZoneOccupancyTracker {
    zones: Vec<Zone>,
    states: HashMap<String, ZoneState>,
    last_frame_id: Option<u64>,
}

impl ZoneOccupancyTracker {
    pub fn new(zones: Vec<Zone>) -> Self {
        let mut states = HashMap::with_capacity(zones.len());
        for zone in &zones {
            if states.insert(zone.name.clone(), ZoneState::default()).is_some() {
                warn!("duplicate zone name {:?}: definitions share one state", zone.name);
            }
        }
        info!("tracking occupancy for {} zone(s)", zones.len());
        Self {
            zones,
            states,
            last_frame_id: None,
        }
    }

    pub fn from_config(config: &ZonesConfig) -> Self {
        Self::new(
            config
                .zones
                .iter()
                .map(|z| Zone {
                    name: z.name.clone(),
                    rect: z.rect(),
                })
                .collect(),
        )
    }

    /// Zones in configuration order.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Occupancy state for the named zone.
    pub fn state(&self, name: &str) -> Option<&ZoneState> {
        self.states.get(name)
    }

    /// Frame-boundary detector: true the first time a frame id is observed
    /// since the previous one, false on repeats, replacing the stored id on
    /// every boundary. Called exactly once per [`update`](Self::update) so
    /// the `current` resets stay consistent.
    fn is_new_frame(&mut self, frame_id: u64) -> bool {
        if self.last_frame_id != Some(frame_id) {
            self.last_frame_id = Some(frame_id);
            true
        } else {
            false
        }
    }

    /// Ingest one tracked object for `frame_id`, updating every zone.
    ///
    /// The frame-change flag is evaluated once per call, so the first object
    /// seen for a new frame clears every zone's `current` membership; later
    /// objects of the same frame only append to it. An enter transition is
    /// logged when the box overlaps a zone the id is not already counted
    /// inside of, an exit transition when it stops overlapping while counted
    /// inside. Boxes, identifiers, and frame-id ordering are taken at face
    /// value; nothing is validated.
    pub fn update(&mut self, frame_id: u64, track: &impl TrackRegion) {
        let change_frame = self.is_new_frame(frame_id);
        let id = track.track_id();
        let bbox = track.bbox();

        for zone in &self.zones {
            let Some(state) = self.states.get_mut(&zone.name) else {
                continue;
            };
            match state.observe(id, zone.rect.overlaps(&bbox), change_frame) {
                Some(Transition::Entered) => debug!("track {id} entered zone {}", zone.name),
                Some(Transition::Exited) => debug!("track {id} exited zone {}", zone.name),
                None => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestTrack {
        id: TrackId,
        bbox: Rect,
    }

    impl TrackRegion for TestTrack {
        fn track_id(&self) -> TrackId {
            self.id
        }

        fn bbox(&self) -> Rect {
            self.bbox
        }
    }

    fn one_zone_tracker() -> ZoneOccupancyTracker {
        ZoneOccupancyTracker::new(vec![Zone {
            name: "A".into(),
            rect: Rect::new(0, 0, 10, 10),
        }])
    }

    #[test]
    fn test_is_new_frame_transitions() {
        let mut tracker = one_zone_tracker();

        assert!(tracker.is_new_frame(1));
        assert!(!tracker.is_new_frame(1));
        assert!(tracker.is_new_frame(2));
        assert!(!tracker.is_new_frame(2));
        // Frame ids need not be contiguous.
        assert!(tracker.is_new_frame(7));
    }

    #[test]
    fn test_enter_then_exit() {
        let mut tracker = one_zone_tracker();

        tracker.update(
            1,
            &TestTrack {
                id: 1,
                bbox: Rect::new(2, 2, 5, 5),
            },
        );
        let state = tracker.state("A").unwrap();
        assert_eq!(state.entered(), &[1]);
        assert_eq!(state.current(), &[1]);
        assert!(state.exited().is_empty());

        tracker.update(
            2,
            &TestTrack {
                id: 1,
                bbox: Rect::new(100, 100, 110, 110),
            },
        );
        let state = tracker.state("A").unwrap();
        assert_eq!(state.exited(), &[1]);
        assert_eq!(state.entered(), &[1]);
        // `current` resets only when something overlaps, so the previous
        // frame's membership stays stale on a no-overlap frame.
        assert_eq!(state.current(), &[1]);
    }

    #[test]
    fn test_two_tracks_same_frame_share_one_reset() {
        let mut tracker = one_zone_tracker();

        // Frame 1 puts track 1 inside so `current` is non-empty going in.
        tracker.update(
            1,
            &TestTrack {
                id: 1,
                bbox: Rect::new(2, 2, 5, 5),
            },
        );

        tracker.update(
            3,
            &TestTrack {
                id: 1,
                bbox: Rect::new(2, 2, 5, 5),
            },
        );
        tracker.update(
            3,
            &TestTrack {
                id: 2,
                bbox: Rect::new(6, 6, 9, 9),
            },
        );

        let state = tracker.state("A").unwrap();
        // The reset happened once, on the first object of frame 3.
        assert_eq!(state.current(), &[1, 2]);
        // Track 1 was already counted inside, so only track 2 adds an entry.
        assert_eq!(state.entered(), &[1, 2]);
    }

    #[test]
    fn test_zones_update_independently() {
        let mut tracker = ZoneOccupancyTracker::new(vec![
            Zone {
                name: "left".into(),
                rect: Rect::new(0, 0, 50, 100),
            },
            Zone {
                name: "right".into(),
                rect: Rect::new(60, 0, 100, 100),
            },
        ]);

        tracker.update(
            1,
            &TestTrack {
                id: 4,
                bbox: Rect::new(10, 10, 20, 20),
            },
        );

        assert_eq!(tracker.state("left").unwrap().entered(), &[4]);
        assert!(tracker.state("right").unwrap().entered().is_empty());
    }

    #[test]
    fn test_duplicate_zone_names_share_state() {
        let mut tracker = ZoneOccupancyTracker::new(vec![
            Zone {
                name: "A".into(),
                rect: Rect::new(0, 0, 10, 10),
            },
            Zone {
                name: "A".into(),
                rect: Rect::new(20, 0, 30, 10),
            },
        ]);

        // Overlaps only the first definition; both definitions fold into
        // the single state keyed by "A".
        tracker.update(
            1,
            &TestTrack {
                id: 1,
                bbox: Rect::new(2, 2, 5, 5),
            },
        );

        let state = tracker.state("A").unwrap();
        // First definition logs the entry, the second sees no overlap over
        // the now-positive entry count and logs an exit.
        assert_eq!(state.entered(), &[1]);
        assert_eq!(state.exited(), &[1]);
        assert_eq!(state.current(), &[1]);
    }

    #[test]
    fn test_from_config_keeps_order() {
        let config = ZonesConfig::from_toml(
            r#"
            [[zone]]
            name = "B"
            left = 0
            top = 0
            right = 5
            bottom = 5

            [[zone]]
            name = "A"
            left = 5
            top = 5
            right = 10
            bottom = 10
            "#,
        )
        .unwrap();

        let tracker = ZoneOccupancyTracker::from_config(&config);
        let names: Vec<&str> = tracker.zones().iter().map(|z| z.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
        assert!(tracker.state("A").is_some());
    }
}
