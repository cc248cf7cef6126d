use spend_domain::{Record, UserId};

/// Handle for an in-flight record load. Only the most recently issued ticket
/// may populate the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub user_id: UserId,
    generation: u64,
}

/// Records of the active user. Replaced wholesale on every user change.
#[derive(Debug, Default)]
pub struct RecordStore {
    user_id: Option<UserId>,
    records: Vec<Record>,
    generation: u64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Starts loading records for `user_id`, superseding any earlier ticket.
    pub fn begin_load(&mut self, user_id: UserId) -> LoadTicket {
        self.generation += 1;
        LoadTicket {
            user_id,
            generation: self.generation,
        }
    }

    /// Installs `records` if `ticket` is still current. Returns whether they were applied.
    pub fn complete_load(&mut self, ticket: LoadTicket, records: Vec<Record>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                user_id = ticket.user_id,
                "discarding stale record load"
            );
            return false;
        }
        self.user_id = Some(ticket.user_id);
        self.records = records;
        true
    }

    pub fn clear(&mut self) {
        self.generation += 1;
        self.user_id = None;
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use spend_domain::Location;

    fn one_record() -> Vec<Record> {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        vec![Record::new(
            Location::new("USA", "Utah", "Provo"),
            "Retail",
            "Books",
            day,
            day,
        )]
    }

    #[test]
    fn stale_ticket_does_not_overwrite_newer_user() {
        let mut store = RecordStore::new();
        let for_a = store.begin_load(1);
        let for_b = store.begin_load(2);

        assert!(store.complete_load(for_b, Vec::new()));
        assert!(!store.complete_load(for_a, one_record()));
        assert_eq!(store.user_id(), Some(2));
        assert!(store.is_empty());
    }

    #[test]
    fn current_ticket_replaces_records() {
        let mut store = RecordStore::new();
        let ticket = store.begin_load(7);
        assert!(store.complete_load(ticket, one_record()));
        assert_eq!(store.records().len(), 1);

        let ticket = store.begin_load(8);
        assert!(store.complete_load(ticket, Vec::new()));
        assert!(store.is_empty());
        assert_eq!(store.user_id(), Some(8));
    }
}
