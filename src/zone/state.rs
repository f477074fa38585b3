//! Per-zone occupancy state.

/// Stable identifier assigned by the upstream multi-object tracker.
pub type TrackId = u64;

/// Transition observed for one track against one zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    Entered,
    Exited,
}

/// Mutable occupancy state for one zone.
///
/// `current` holds the identifiers overlapping the zone as of the most
/// recently processed frame. It is rebuilt lazily: the reset happens on the
/// first overlapping observation of a new frame, so a zone nothing overlaps
/// keeps its previous membership. `entered` and `exited` are append-only
/// transition logs, not sets: an identifier is appended once per transition,
/// so repeated enter/exit cycles repeat it, and neither log is ever pruned.
#[derive(Debug, Clone, Default)]
pub struct ZoneState {
    current: Vec<TrackId>,
    entered: Vec<TrackId>,
    exited: Vec<TrackId>,
}

impl ZoneState {
    /// Identifiers overlapping the zone in the latest processed frame.
    pub fn current(&self) -> &[TrackId] {
        &self.current
    }

    /// Append-only log of enter transitions.
    pub fn entered(&self) -> &[TrackId] {
        &self.entered
    }

    /// Append-only log of exit transitions.
    pub fn exited(&self) -> &[TrackId] {
        &self.exited
    }

    /// The count shown on the overlay: cumulative entries, not a live
    /// occupancy figure.
    pub fn occupancy(&self) -> usize {
        self.entered.len()
    }

    fn entered_count(&self, id: TrackId) -> i64 {
        self.entered.iter().filter(|&&t| t == id).count() as i64
    }

    fn exited_count(&self, id: TrackId) -> i64 {
        self.exited.iter().filter(|&&t| t == id).count() as i64
    }

    /// Fold one per-frame observation of a track into this zone's state.
    ///
    /// When the track overlaps the zone, `current` is cleared first on a
    /// frame boundary, the id is appended, and an enter transition is logged
    /// unless the id already has more enter than exit records. When it does
    /// not overlap, an exit transition is logged only while enters outnumber
    /// exits.
    pub(crate) fn observe(
        &mut self,
        id: TrackId,
        overlapping: bool,
        change_frame: bool,
    ) -> Option<Transition> {
        let in_count = self.entered_count(id);
        let out_count = self.exited_count(id);

        if overlapping {
            if change_frame {
                self.current.clear();
            }
            self.current.push(id);
            if in_count - out_count <= 0 {
                self.entered.push(id);
                return Some(Transition::Entered);
            }
        } else if in_count > out_count {
            self.exited.push(id);
            return Some(Transition::Exited);
        }
        None
    }
}
