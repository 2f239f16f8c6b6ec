/// Lifecycle of one fetched slice of page data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Idle,
    /// In flight; `stale` keeps the last good data on screen while reloading.
    Loading { stale: Option<T> },
    Loaded(T),
    LoadError(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    pub fn begin(&mut self) {
        let stale = match std::mem::take(self) {
            LoadState::Loaded(data) => Some(data),
            LoadState::Loading { stale } => stale,
            LoadState::Idle | LoadState::LoadError(_) => None,
        };
        *self = LoadState::Loading { stale };
    }

    pub fn succeed(&mut self, data: T) {
        *self = LoadState::Loaded(data);
    }

    /// Records a failed load. When earlier data exists it stays displayed and
    /// the message is handed back so the page can raise a banner instead.
    pub fn fail(&mut self, message: String) -> Option<String> {
        match std::mem::take(self) {
            LoadState::Loaded(data) | LoadState::Loading { stale: Some(data) } => {
                *self = LoadState::Loaded(data);
                Some(message)
            }
            _ => {
                *self = LoadState::LoadError(message);
                None
            }
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            LoadState::Loading { stale } => stale.as_ref(),
            LoadState::Idle | LoadState::LoadError(_) => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::LoadError(message) => Some(message),
            _ => None,
        }
    }
}
