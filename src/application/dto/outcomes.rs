/// How `fetch_all` populated the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The backend already had rows.
    Loaded { count: usize },
    /// The backend was empty; the seed dataset was inserted and read back.
    Seeded { inserted: usize, count: usize },
}

impl FetchOutcome {
    pub fn count(&self) -> usize {
        match self {
            Self::Loaded { count } | Self::Seeded { count, .. } => *count,
        }
    }

    pub fn was_seeded(&self) -> bool {
        matches!(self, Self::Seeded { .. })
    }
}
