//! First-sighting tracking for patients within one mapping run.

use std::collections::HashSet;

/// Patient ids already emitted into the bundle during the current run.
#[derive(Debug, Default)]
pub struct SeenPatients {
    ids: HashSet<String>,
}

impl SeenPatients {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id`, returning `true` only the first time it is seen.
    pub fn insert_first(&mut self, id: &str) -> bool {
        if self.ids.contains(id) {
            return false;
        }
        self.ids.insert(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_first_sighting_is_reported() {
        let mut seen = SeenPatients::new();
        assert!(seen.insert_first("clinic1-1"));
        assert!(!seen.insert_first("clinic1-1"));
        assert!(seen.insert_first("clinic1-2"));
        assert!(!seen.insert_first("clinic1-2"));
    }
}
