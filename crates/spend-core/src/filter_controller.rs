use spend_domain::{FilterState, FilterUpdate};

/// Sole owner of the active [`FilterState`]; changes go through `update`/`reset`.
#[derive(Debug, Clone, Default)]
pub struct FilterController {
    state: FilterState,
}

impl FilterController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: FilterState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Shallow-merges `update` into the current state, replacing whole fields.
    pub fn update(&mut self, update: FilterUpdate) -> &FilterState {
        self.state = self.state.merged(update);
        tracing::debug!(
            active = self.state.active_filter_count(),
            "filters updated"
        );
        &self.state
    }

    /// Restores the default state: no date bounds and empty selections.
    pub fn reset(&mut self) -> &FilterState {
        self.state = FilterState::default();
        tracing::debug!("filters reset");
        &self.state
    }
}
