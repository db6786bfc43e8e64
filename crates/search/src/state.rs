//! Lifecycle of one search as seen by the presentation layer.
//!
//! ```text
//! Idle --begin--> Loading --finish(Ok)--> Succeeded
//!                         --finish(Err)-> Failed
//! ```
//! `Succeeded` with no restaurants is a normal outcome, distinct from `Failed`.

use data_loader::Candidate;
use rec_client::RecClientError;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Succeeded(Vec<Candidate>),
    /// Message suitable for showing to the user
    Failed(String),
}

impl SearchState {
    /// Enter `Loading`.
    ///
    /// Returns false, leaving the state untouched, if a search is already in
    /// flight. Callers that want at most one request outstanding check this.
    pub fn begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        *self = SearchState::Loading;
        true
    }

    /// Record the outcome of the in-flight search.
    ///
    /// Returns false and ignores `result` when no search is loading.
    pub fn finish(&mut self, result: Result<Vec<Candidate>, RecClientError>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = match result {
            Ok(restaurants) => SearchState::Succeeded(restaurants),
            Err(e) => SearchState::Failed(e.to_string()),
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    pub fn results(&self) -> Option<&[Candidate]> {
        match self {
            SearchState::Succeeded(restaurants) => Some(restaurants),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SearchState::Failed(message) => Some(message),
            _ => None,
        }
    }
    /// Consume a settled state. `None` while idle or still loading.
    pub fn into_result(self) -> Option<Result<Vec<Candidate>, String>> {
        match self {
            SearchState::Succeeded(restaurants) => Some(Ok(restaurants)),
            SearchState::Failed(message) => Some(Err(message)),
            SearchState::Idle | SearchState::Loading => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_path() {
        let mut state = SearchState::default();
        assert_eq!(state, SearchState::Idle);

        assert!(state.begin());
        assert!(state.is_loading());

        let restaurants = vec![Candidate::new("a", "A", 1.0)];
        assert!(state.finish(Ok(restaurants.clone())));
        assert_eq!(state.results(), Some(restaurants.as_slice()));
        assert!(state.error().is_none());
    }

    #[test]
    fn test_empty_success_is_not_failure() {
        let mut state = SearchState::Idle;
        state.begin();
        state.finish(Ok(Vec::new()));

        assert_eq!(state.results(), Some(&[][..]));
        assert!(state.error().is_none());
    }

    #[test]
    fn test_failure_path() {
        let mut state = SearchState::Idle;
        state.begin();
        state.finish(Err(RecClientError::Status { status: 503 }));

        assert!(state.results().is_none());
        assert_eq!(state.error(), Some("Recommendation service returned status 503"));
    }

    #[test]
    fn test_begin_while_loading_is_rejected() {
        let mut state = SearchState::Idle;
        assert!(state.begin());
        assert!(!state.begin());
        assert!(state.is_loading());
    }

    #[test]
    fn test_into_result_only_for_settled_states() {
        assert_eq!(SearchState::Idle.into_result(), None);

        let mut state = SearchState::Idle;
        state.begin();
        assert_eq!(state.clone().into_result(), None);

        state.finish(Err(RecClientError::Status { status: 500 }));
        assert_eq!(
            state.into_result(),
            Some(Err("Recommendation service returned status 500".to_string()))
        );
    }

    #[test]
    fn test_finish_without_begin_is_ignored() {
        let mut state = SearchState::Succeeded(Vec::new());
        assert!(!state.finish(Err(RecClientError::Status { status: 500 })));
        assert_eq!(state, SearchState::Succeeded(Vec::new()));

        // A new search may start from any settled state
        assert!(state.begin());
    }
}
