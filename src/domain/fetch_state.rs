// Fetch lifecycle state
use super::street::StreetRecord;

/// Lifecycle of the single street collection request.
///
/// Starts as `Pending` and moves exactly once to `Ready` or `Failed`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Pending,
    Ready(Vec<StreetRecord>),
    Failed(String),
}

impl FetchState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FetchState::Pending)
    }
}
