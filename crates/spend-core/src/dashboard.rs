//! Dashboard session: owns the loaded snapshot, the active user's records, the
//! filter controller, and the derived aggregates.

use spend_domain::{
    DataSnapshot, FilterState, FilterUpdate, GroupedData, Record, SummaryData, User, UserId,
};

use crate::{
    filter_controller::FilterController, filter_service::FilterService,
    grouping_service::GroupingService, options_service::FilterOptions,
    record_store::{LoadTicket, RecordStore},
    storage::SnapshotSource,
    summary_service::SummaryService,
    CoreError,
};

#[derive(Debug, Default)]
pub struct Dashboard {
    snapshot: DataSnapshot,
    store: RecordStore,
    filters: FilterController,
    grouped: GroupedData,
    summary: SummaryData,
    filtered_count: usize,
}

impl Dashboard {
    /// An empty dashboard: no users, no records, default filters.
    pub fn new() -> Self {
        let mut dashboard = Self::default();
        dashboard.recompute();
        dashboard
    }

    /// Performs the one-time fetch from `source`.
    ///
    /// A failed fetch is logged and leaves the dashboard empty; it is not fatal.
    pub fn load(source: &dyn SnapshotSource) -> Self {
        let mut dashboard = Self::new();
        match source.load_snapshot() {
            Ok(snapshot) => dashboard.set_snapshot(snapshot),
            Err(err) => {
                tracing::error!(
                    source = %source.describe(),
                    error = %err,
                    "failed to load spend data"
                );
            }
        }
        dashboard
    }

    /// Replaces the loaded data. Selects the first user when none is active,
    /// and reloads the active user's records otherwise.
    pub fn set_snapshot(&mut self, snapshot: DataSnapshot) {
        tracing::info!(
            users = snapshot.users.len(),
            records = snapshot.record_count(),
            "spend data loaded"
        );
        self.snapshot = snapshot;
        let target = self
            .store
            .user_id()
            .filter(|id| self.snapshot.user(*id).is_some())
            .or_else(|| self.snapshot.users.first().map(|user| user.id));
        match target {
            Some(id) => {
                let ticket = self.store.begin_load(id);
                let records = self.snapshot.records_for(id).to_vec();
                self.store.complete_load(ticket, records);
            }
            None => self.store.clear(),
        }
        self.recompute();
    }

    pub fn users(&self) -> &[User] {
        &self.snapshot.users
    }

    pub fn current_user(&self) -> Option<&User> {
        self.store.user_id().and_then(|id| self.snapshot.user(id))
    }

    /// Switches to `id`, replacing the record store wholesale.
    pub fn select_user(&mut self, id: UserId) -> Result<&User, CoreError> {
        if self.snapshot.user(id).is_none() {
            return Err(CoreError::UserNotFound(id));
        }
        let ticket = self.store.begin_load(id);
        let records = self.snapshot.records_for(id).to_vec();
        self.store.complete_load(ticket, records);
        self.recompute();
        self.snapshot.user(id).ok_or(CoreError::UserNotFound(id))
    }

    /// Starts an externally driven record load for `id`.
    pub fn begin_user_load(&mut self, id: UserId) -> LoadTicket {
        self.store.begin_load(id)
    }

    /// Applies records from an external load unless a newer load superseded it.
    pub fn complete_user_load(&mut self, ticket: LoadTicket, records: Vec<Record>) -> bool {
        let applied = self.store.complete_load(ticket, records);
        if applied {
            self.recompute();
        }
        applied
    }

    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    pub fn filters(&self) -> &FilterState {
        self.filters.state()
    }

    pub fn update_filters(&mut self, update: FilterUpdate) -> &FilterState {
        self.filters.update(update);
        self.recompute();
        self.filters.state()
    }

    pub fn reset_filters(&mut self) -> &FilterState {
        self.filters.reset();
        self.recompute();
        self.filters.state()
    }

    pub fn grouped(&self) -> &GroupedData {
        &self.grouped
    }

    pub fn summary(&self) -> &SummaryData {
        &self.summary
    }

    /// Number of records that passed the active filters.
    pub fn filtered_count(&self) -> usize {
        self.filtered_count
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_records(self.store.records())
    }

    fn recompute(&mut self) {
        let state = self.filters.state();
        let filtered = FilterService::apply(self.store.records(), state);
        self.grouped = GroupingService::group(
            filtered.iter().copied(),
            &state.attributes,
            &state.metrics,
        );
        self.summary = SummaryService::summarize(filtered.iter().copied(), &state.metrics);
        self.filtered_count = filtered.len();
        tracing::debug!(
            records = self.store.records().len(),
            filtered = self.filtered_count,
            groups = self.grouped.len(),
            "aggregates recomputed"
        );
    }
}
