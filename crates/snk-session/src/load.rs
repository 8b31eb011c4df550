use serde::Serialize;
use snk_client::BackendError;

/// Which load-time fetch failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadSource {
    Catalog,
    Rooms,
}

impl LoadSource {
    pub fn as_str(self) -> &'static str {
        match self {
            LoadSource::Catalog => "catalog",
            LoadSource::Rooms => "rooms",
        }
    }
}

/// A fetch that failed while the session loaded. The matching collection is
/// empty; the session is otherwise usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadNotice {
    pub source: LoadSource,
    pub detail: String,
}

impl LoadNotice {
    pub(crate) fn new(source: LoadSource, error: &BackendError) -> Self {
        Self {
            source,
            detail: error.to_string(),
        }
    }
}

impl std::fmt::Display for LoadNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "could not load {}: {}", self.source.as_str(), self.detail)
    }
}
