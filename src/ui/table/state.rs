use crate::domain::entities::page::{PageEnvelope, PageState};
use crate::usecase::ports::data_source::TableRecord;

/// Row storage plus pagination, owned by one table instance. Loads are
/// stamped with a generation so that overlapping requests cannot clobber
/// each other: only the most recently issued load may apply its outcome or
/// clear the loading flag.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState<T> {
    pub rows: Vec<T>,
    pub page: PageState,
    pub loading: bool,
    generation: u64,
}

impl<T: TableRecord> TableState<T> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            page: PageState::default(),
            loading: false,
            generation: 0,
        }
    }

    /// Marks a load as in flight and returns its generation stamp.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Applies the outcome of the load stamped `generation`. Stale outcomes
    /// are dropped entirely. A failure keeps rows and pagination untouched
    /// and is only logged; the caller never sees it.
    pub fn apply(&mut self, generation: u64, outcome: anyhow::Result<PageEnvelope<T>>) {
        if generation != self.generation {
            return;
        }
        self.loading = false;
        match outcome {
            Ok(envelope) => {
                self.page = PageState::from_envelope(&envelope);
                self.rows = envelope.list.unwrap_or_default();
            }
            Err(err) => {
                log::error!("table load failed: {err:#}");
            }
        }
    }
}

impl<T: TableRecord> Default for TableState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::ports::data_source::JsonRow;

    fn row(id: u64) -> JsonRow {
        let mut row = JsonRow::new();
        row.insert("id".to_string(), serde_json::json!(id));
        row
    }

    fn envelope(ids: &[u64], total: u64, page: u64, page_size: u64) -> PageEnvelope<JsonRow> {
        PageEnvelope {
            list: Some(ids.iter().copied().map(row).collect()),
            total: Some(total),
            page: Some(page),
            page_size: Some(page_size),
        }
    }

    #[test]
    fn successful_load_replaces_rows_and_pagination() {
        let mut state = TableState::<JsonRow>::new();
        let generation = state.begin_load();
        assert!(state.loading);

        state.apply(generation, Ok(envelope(&[1], 1, 1, 10)));

        assert!(!state.loading);
        assert_eq!(state.rows, vec![row(1)]);
        assert_eq!(
            state.page,
            PageState {
                current_page: 1,
                page_size: 10,
                total: 1,
            }
        );
    }

    #[test]
    fn missing_envelope_fields_fall_back_to_defaults() {
        let mut state = TableState::<JsonRow>::new();
        let generation = state.begin_load();

        state.apply(
            generation,
            Ok(PageEnvelope {
                list: Some(vec![row(1)]),
                total: None,
                page: None,
                page_size: None,
            }),
        );

        assert_eq!(state.rows.len(), 1);
        assert_eq!(state.page, PageState::default());
    }

    #[test]
    fn failed_load_preserves_rows_and_pagination() {
        let mut state = TableState::<JsonRow>::new();
        let generation = state.begin_load();
        state.apply(generation, Ok(envelope(&[1, 2], 2, 1, 10)));
        let before_rows = state.rows.clone();
        let before_page = state.page;

        let generation = state.begin_load();
        assert!(state.loading);
        state.apply(generation, Err(anyhow::anyhow!("connection refused")));

        assert!(!state.loading, "loading must clear even on failure");
        assert_eq!(state.rows, before_rows);
        assert_eq!(state.page, before_page);
    }

    #[test]
    fn stale_outcome_cannot_overwrite_a_newer_load() {
        let mut state = TableState::<JsonRow>::new();
        let first = state.begin_load();
        let second = state.begin_load();

        // The second (newer) load resolves first.
        state.apply(second, Ok(envelope(&[2], 1, 2, 10)));
        assert!(!state.loading);
        assert_eq!(state.page.current_page, 2);

        // The first load resolves late; it must be dropped.
        state.apply(first, Ok(envelope(&[1], 1, 1, 10)));
        assert_eq!(state.rows, vec![row(2)]);
        assert_eq!(state.page.current_page, 2);
    }

    #[test]
    fn stale_failure_does_not_clear_loading_of_a_newer_load() {
        let mut state = TableState::<JsonRow>::new();
        let first = state.begin_load();
        let _second = state.begin_load();

        state.apply(first, Err(anyhow::anyhow!("timed out")));

        assert!(state.loading, "only the newest load may clear loading");
    }
}
