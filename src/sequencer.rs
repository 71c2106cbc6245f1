/// Pagination state. There is no terminal state; the cycle repeats for every page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Idle,
    Fetching,
}

/// Gate that keeps at most one page request in flight.
#[derive(Debug, Default)]
pub struct Sequencer {
    state: FetchState,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FetchState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == FetchState::Fetching
    }

    /// `Idle -> Fetching`. Returns false, and changes nothing, if a fetch is already pending.
    pub fn try_begin(&mut self) -> bool {
        match self.state {
            FetchState::Idle => {
                self.state = FetchState::Fetching;
                true
            }
            FetchState::Fetching => false,
        }
    }

    /// `Fetching -> Idle`, on success and on failure alike.
    pub fn finish(&mut self) {
        self.state = FetchState::Idle;
    }
}
