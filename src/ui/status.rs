/// What a view shows for one resource. Exactly one applies at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewStatus<T> {
    /// Nothing requested yet, or the query is disabled.
    Idle,
    Loading,
    Ready(T),
    /// Settled successfully with zero items.
    Empty,
    /// Settled with an error; holds the message to display.
    Failed(String),
}

impl<T> Default for ViewStatus<T> {
    fn default() -> Self {
        ViewStatus::Idle
    }
}

impl<T> ViewStatus<T> {
    pub fn as_ref(&self) -> ViewStatus<&T> {
        match self {
            ViewStatus::Idle => ViewStatus::Idle,
            ViewStatus::Loading => ViewStatus::Loading,
            ViewStatus::Ready(value) => ViewStatus::Ready(value),
            ViewStatus::Empty => ViewStatus::Empty,
            ViewStatus::Failed(message) => ViewStatus::Failed(message.clone()),
        }
    }

    /// Map the ready value. `None` from `f` turns into `Empty`.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Option<U>) -> ViewStatus<U> {
        match self {
            ViewStatus::Idle => ViewStatus::Idle,
            ViewStatus::Loading => ViewStatus::Loading,
            ViewStatus::Ready(value) => f(value).map_or(ViewStatus::Empty, ViewStatus::Ready),
            ViewStatus::Empty => ViewStatus::Empty,
            ViewStatus::Failed(message) => ViewStatus::Failed(message),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewStatus::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewStatus::Loading)
    }

    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            ViewStatus::Ready(_) | ViewStatus::Empty | ViewStatus::Failed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn and_then_maps_missing_value_to_empty() {
        let status: ViewStatus<Option<u8>> = ViewStatus::Ready(None);
        assert_eq!(status.and_then(|v| v), ViewStatus::Empty);

        let status: ViewStatus<u8> = ViewStatus::Failed("boom".to_string());
        assert_eq!(
            status.and_then(|v| Some(v + 1)),
            ViewStatus::Failed("boom".to_string())
        );
    }

    #[test]
    fn only_terminal_states_are_settled() {
        assert!(!ViewStatus::<u8>::Idle.is_settled());
        assert!(!ViewStatus::<u8>::Loading.is_settled());
        assert!(ViewStatus::<u8>::Empty.is_settled());
        assert!(ViewStatus::Ready(1).is_settled());
    }
}
