//! Action registry with lookup by name and insertion-ordered iteration.

use std::sync::Arc;

use dcommon::Registry;

use crate::Action;

/// Named actions, keyed by `Action::name`. Iteration order is registration
/// order, which is the order actions are exported to the external protocol.
#[derive(Default)]
pub struct Actions {
    actions: Registry<String, Arc<Action>>,
}

impl Actions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an action under its name, replacing any previous action
    /// with the same name in place.
    pub fn register(&mut self, action: Action) {
        let name = action.name().to_string();
        self.actions.insert(name, Arc::new(action));
    }

    pub fn get(&self, name: &str) -> Option<Arc<Action>> {
        self.actions.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Arc<Action>> {
        self.actions.remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<Action>)> {
        self.actions.iter().map(|(name, action)| (name.as_str(), action))
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
