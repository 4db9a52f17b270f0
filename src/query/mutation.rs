use crate::api::NoteError;

/// Lifecycle of one mutation call site (the create form).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum MutationState {
    #[default]
    Idle,
    Pending,
    Success,
    Error(NoteError),
}

impl MutationState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Enter `Pending`. Refuses while a previous call is still in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = Self::Pending;
        true
    }

    pub fn settle<T>(&mut self, result: &Result<T, NoteError>) {
        *self = match result {
            Ok(_) => Self::Success,
            Err(e) => Self::Error(e.clone()),
        };
    }

    pub fn error(&self) -> Option<&NoteError> {
        match self {
            Self::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_refuses_while_pending() {
        let mut m = MutationState::default();
        assert!(m.begin());
        assert!(m.is_pending());
        assert!(!m.begin());
    }

    #[test]
    fn test_settle_records_outcome() {
        let mut m = MutationState::default();
        m.begin();
        m.settle::<()>(&Err(NoteError::Network("offline".to_string())));
        assert_eq!(m.error(), Some(&NoteError::Network("offline".to_string())));
        assert!(m.begin());
        m.settle(&Ok(()));
        assert_eq!(m, MutationState::Success);
        m.reset();
        assert_eq!(m, MutationState::Idle);
    }
}
