use crate::ast::Exp;
use std::collections::HashMap;

/// The binding environment: an unordered mapping from names to lists of
/// alternatives.
///
/// The environment never maps a name to an empty list; binding an empty
/// list or draining one through draws removes the key instead, so "absent"
/// and "empty" stay the same observable state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: HashMap<String, Vec<Exp>>,
}

impl Environment {
    /// Creates a new, empty environment.
    pub fn new() -> Self {
        Environment {
            bindings: HashMap::new(),
        }
    }

    /// Binds `name` to `items`, replacing any previous binding. An empty
    /// item list removes the binding.
    pub fn define(&mut self, name: String, items: Vec<Exp>) {
        if items.is_empty() {
            self.bindings.remove(&name);
        } else {
            self.bindings.insert(name, items);
        }
    }

    /// Looks up the alternatives bound to `name`.
    pub fn get(&self, name: &str) -> Option<&[Exp]> {
        self.bindings.get(name).map(|items| items.as_slice())
    }

    /// Removes every item structurally equal to `item` from the list bound
    /// to `name`; drops the key if the list becomes empty.
    pub fn remove_equal(&mut self, name: &str, item: &Exp) {
        if let Some(items) = self.bindings.get_mut(name) {
            items.retain(|candidate| candidate != item);
            if items.is_empty() {
                self.bindings.remove(name);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// A sorted snapshot of the bound names.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.bindings.keys().cloned().collect();
        names.sort();
        names
    }
}
