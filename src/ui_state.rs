//! Tri-state result container for asynchronous operations.
//!
//! Every gateway operation in this crate reports its progress as a stream of
//! [`UiState`] values: `Loading` while the remote call is in flight, then a
//! single terminal `Success` or `Error`. Standing subscriptions re-emit
//! `Success` for every remote change. `Idle` exists only as the initial
//! placeholder before any stream emission reaches a consumer.

/// Result of an asynchronous operation as observed by the UI.
///
/// Payload lives only on `Success` and `Error`, so an operation can never be
/// in an illegal "data and error at once" state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiState<T> {
    /// No operation has run yet.
    #[default]
    Idle,
    /// An operation is in flight.
    Loading,
    /// The operation completed with a payload.
    Success(T),
    /// The operation failed; the message is suitable for direct display.
    Error(String),
}

impl<T> UiState<T> {
    /// Whether this is the `Idle` variant.
    pub fn is_idle(&self) -> bool {
        matches!(self, UiState::Idle)
    }

    /// Whether an operation is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    /// Whether this is a terminal `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, UiState::Success(_))
    }

    /// Whether this is a terminal `Error`.
    pub fn is_error(&self) -> bool {
        matches!(self, UiState::Error(_))
    }

    /// Whether this is a terminal emission (`Success` or `Error`).
    pub fn is_terminal(&self) -> bool {
        self.is_success() || self.is_error()
    }

    /// The success payload, if any.
    pub fn success(&self) -> Option<&T> {
        match self {
            UiState::Success(data) => Some(data),
            _ => None,
        }
    }

    /// The error message, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            UiState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Consume the state, returning the success payload if any.
    pub fn into_success(self) -> Option<T> {
        match self {
            UiState::Success(data) => Some(data),
            _ => None,
        }
    }

    /// Map the success payload, leaving the other variants untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> UiState<U> {
        match self {
            UiState::Idle => UiState::Idle,
            UiState::Loading => UiState::Loading,
            UiState::Success(data) => UiState::Success(f(data)),
            UiState::Error(message) => UiState::Error(message),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for UiState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => UiState::Success(data),
            Err(err) => UiState::Error(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let state: UiState<i32> = UiState::default();
        assert!(state.is_idle());
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_variant_predicates() {
        assert!(UiState::<i32>::Loading.is_loading());
        assert!(UiState::Success(1).is_success());
        assert!(UiState::Success(1).is_terminal());
        assert!(UiState::<i32>::Error("boom".into()).is_error());
        assert!(UiState::<i32>::Error("boom".into()).is_terminal());
        assert!(!UiState::<i32>::Loading.is_terminal());
    }

    #[test]
    fn test_success_accessors() {
        let state = UiState::Success(vec![1, 2, 3]);
        assert_eq!(state.success(), Some(&vec![1, 2, 3]));
        assert_eq!(state.error_message(), None);
        assert_eq!(state.into_success(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_error_accessors() {
        let state: UiState<i32> = UiState::Error("failed".into());
        assert_eq!(state.error_message(), Some("failed"));
        assert_eq!(state.success(), None);
        assert_eq!(state.into_success(), None);
    }

    #[test]
    fn test_map_transforms_only_success() {
        assert_eq!(UiState::Success(2).map(|n| n * 10), UiState::Success(20));
        assert_eq!(UiState::<i32>::Loading.map(|n| n * 10), UiState::Loading);
        assert_eq!(
            UiState::<i32>::Error("x".into()).map(|n| n * 10),
            UiState::Error("x".into())
        );
    }

    #[test]
    fn test_from_result() {
        let ok: UiState<i32> = Ok::<_, std::io::Error>(5).into();
        assert_eq!(ok, UiState::Success(5));

        let err: UiState<i32> =
            Err::<i32, _>(std::io::Error::new(std::io::ErrorKind::Other, "down")).into();
        assert_eq!(err, UiState::Error("down".into()));
    }

    #[test]
    fn test_variant_equality_for_pass_through() {
        // The composer forwards Loading/Error unchanged; equality on the
        // variant is what its pass-through logic relies on.
        assert_eq!(UiState::<Vec<i32>>::Loading, UiState::Loading);
        assert_ne!(UiState::Success(vec![1]), UiState::Success(vec![2]));
    }
}
