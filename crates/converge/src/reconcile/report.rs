use std::fmt;

use tracing::debug;

/// Ordered record of every DDL action taken during one reconciliation.
///
/// An empty report means the live table already matched the declared
/// shape. On failure the caller receives the error instead; actions
/// applied before the failure stay applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    actions: Vec<String>,
}

impl Report {
    pub fn new() -> Report {
        Report { actions: vec![] }
    }

    pub(crate) fn record(&mut self, action: String) {
        debug!(action = %action, "schema action");
        self.actions.push(action);
    }

    /// True when no DDL was needed.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Number of actions taken.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// The recorded actions, oldest first.
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    /// Iterates the actions, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().map(String::as_str)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for action in &self.actions {
            writeln!(f, "{}", action)?;
        }
        Ok(())
    }
}
