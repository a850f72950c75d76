//! Single-slot modal state machine. At most one creature may hold a
//! `Prompt` or `Detail` at any time; the controller exclusively owns the
//! transitions, and each creature exclusively owns its `dismissed` flag
//! (the scan only reads it).

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CreatureId(pub u32);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Idle,
    Prompt(CreatureId),
    Detail(CreatureId),
}

/// Per-creature view of one proximity scan entry. Candidates must arrive
/// in a fixed order every tick; ties resolve to the first eligible one.
#[derive(Clone, Copy, Debug)]
pub struct ProximityCandidate {
    pub id: CreatureId,
    pub distance: f32,
    pub has_record: bool,
    pub dismissed: bool,
}

/// What a transition asks the app to do: mark a creature dismissed, play
/// the collected cue, open the detail view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalEffect {
    Prompted(CreatureId),
    Passed(CreatureId),
    Opened(CreatureId),
    Collected(CreatureId),
}

pub struct InteractionController {
    state: ModalState,
    /// Most recently closed creature; blocks an immediate re-prompt until
    /// the avatar leaves the cool-down radius.
    last_closed: Option<CreatureId>,
    /// Re-entrancy guard: set while any creature occupies the slot, checked
    /// before every new `Prompt` transition within a tick.
    locked: bool,
    d_in: f32,
}

impl InteractionController {
    pub fn new(interaction_distance: f32) -> Self {
        Self {
            state: ModalState::Idle,
            last_closed: None,
            locked: false,
            d_in: interaction_distance.max(0.0),
        }
    }

    #[inline]
    pub fn state(&self) -> ModalState {
        self.state
    }

    #[inline]
    pub fn current(&self) -> Option<CreatureId> {
        match self.state {
            ModalState::Idle => None,
            ModalState::Prompt(c) | ModalState::Detail(c) => Some(c),
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self.state, ModalState::Idle)
    }

    #[inline]
    pub fn interaction_distance(&self) -> f32 {
        self.d_in
    }

    /// Cool-down radius: the last-closed memo clears once the creature is
    /// this far away.
    #[inline]
    pub fn release_distance(&self) -> f32 {
        self.d_in * 1.5
    }

    /// One proximity scan over this tick's candidates, in fixed order.
    /// Clears stale last-closed memos, then (if the slot is free) promotes
    /// the first eligible candidate to `Prompt`. First eligible wins;
    /// nothing pre-empts an occupied slot.
    pub fn scan<I>(&mut self, candidates: I) -> Option<ModalEffect>
    where
        I: IntoIterator<Item = ProximityCandidate>,
    {
        let mut effect = None;
        for c in candidates {
            if self.last_closed == Some(c.id) && c.distance > self.release_distance() && !c.dismissed
            {
                log::debug!(target: "modal", "re-armed creature {:?} (left cool-down radius)", c.id);
                self.last_closed = None;
            }
            if effect.is_none()
                && !self.locked
                && self.is_idle()
                && c.distance < self.d_in
                && c.has_record
                && !c.dismissed
                && self.last_closed != Some(c.id)
            {
                self.state = ModalState::Prompt(c.id);
                self.locked = true;
                log::info!(target: "modal", "Idle -> Prompt({:?}) at distance {:.1}", c.id, c.distance);
                effect = Some(ModalEffect::Prompted(c.id));
            }
        }
        effect
    }

    /// "View more": promotes the prompt to the detail view.
    pub fn confirm(&mut self) -> Option<ModalEffect> {
        match self.state {
            ModalState::Prompt(c) => {
                self.state = ModalState::Detail(c);
                log::info!(target: "modal", "Prompt({c:?}) -> Detail({c:?})");
                Some(ModalEffect::Opened(c))
            }
            _ => None,
        }
    }

    /// "Pass": closes the prompt. The creature is reported `Passed` so the
    /// app marks it dismissed; it never prompts again this session.
    pub fn cancel(&mut self) -> Option<ModalEffect> {
        match self.state {
            ModalState::Prompt(c) => {
                self.release(c);
                log::info!(target: "modal", "Prompt({c:?}) -> Idle (passed)");
                Some(ModalEffect::Passed(c))
            }
            _ => None,
        }
    }

    /// Close affordance on an open detail view. Reported `Collected` so the
    /// app marks the creature dismissed and plays the one-shot cue.
    pub fn close_detail(&mut self) -> Option<ModalEffect> {
        match self.state {
            ModalState::Detail(c) => {
                self.release(c);
                log::info!(target: "modal", "Detail({c:?}) -> Idle (collected)");
                Some(ModalEffect::Collected(c))
            }
            _ => None,
        }
    }

    fn release(&mut self, c: CreatureId) {
        self.state = ModalState::Idle;
        self.last_closed = Some(c);
        self.locked = false;
    }
}
