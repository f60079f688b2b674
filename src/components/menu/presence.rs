// Whether the panel is mounted, as opposed to whether it is open.
//
// Closing leaves the panel mounted while the exit animation plays,
// the owner schedules `finish_exit` with the returned generation.
// Reopening bumps the generation so a stale timer is a no-op.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Absent,
    Present,
    Exiting,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Presence {
    phase: Phase,
    generation: u32,
}

impl Default for Presence {
    fn default() -> Self {
        Self {
            phase: Phase::Absent,
            generation: 0,
        }
    }
}

impl Presence {
    pub fn show(&mut self) {
        if self.phase != Phase::Present {
            self.generation = self.generation.wrapping_add(1);
            self.phase = Phase::Present;
        }
    }

    /// Starts the exit, returns the generation to finish it with.
    pub fn hide(&mut self) -> Option<u32> {
        match self.phase {
            Phase::Present => {
                self.phase = Phase::Exiting;
                Some(self.generation)
            }
            Phase::Absent | Phase::Exiting => None,
        }
    }

    /// Returns true if the panel got unmounted.
    pub fn finish_exit(&mut self, generation: u32) -> bool {
        if self.phase == Phase::Exiting && self.generation == generation {
            self.phase = Phase::Absent;
            true
        } else {
            false
        }
    }

    pub fn sync(&mut self, visible: bool) -> Option<u32> {
        if visible {
            self.show();
            None
        } else {
            self.hide()
        }
    }

    pub fn mounted(&self) -> bool {
        self.phase != Phase::Absent
    }

    pub fn exiting(&self) -> bool {
        self.phase == Phase::Exiting
    }
}
