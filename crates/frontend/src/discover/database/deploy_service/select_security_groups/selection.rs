use std::collections::HashSet;

/// Security group ids picked for the agent deployment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityGroupSelection {
    ids: HashSet<String>,
}

impl SecurityGroupSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checkbox handler: checked adds the id, unchecked removes it
    pub fn toggle(&mut self, id: &str, checked: bool) {
        if checked {
            self.ids.insert(id.to_string());
        } else {
            self.ids.remove(id);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Sorted ids, stable for display and request payloads
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.ids.iter().cloned().collect();
        ids.sort();
        ids
    }
}
