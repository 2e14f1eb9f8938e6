use std::collections::BTreeMap;

use crate::content::TabGroup;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSelection {
    pub active_key: String,
    keys: Vec<String>,
}

impl TabSelection {
    #[cfg(test)]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

#[derive(Debug, Clone, Default)]
pub struct Tabs {
    groups: BTreeMap<String, TabSelection>,
}

impl Tabs {
    pub fn new(groups: impl IntoIterator<Item = TabGroup>) -> Self {
        let mut selections = BTreeMap::new();
        for group in groups {
            // a group without tabs could never hold a valid active key
            let Some(first) = group.tabs.first().cloned() else {
                log::warn!("tab group {} has no tabs, skipping", group.key);
                continue;
            };
            selections.insert(
                group.key,
                TabSelection {
                    active_key: first,
                    keys: group.tabs,
                },
            );
        }
        Self { groups: selections }
    }

    /// Returns true only when the active tab actually changed.
    pub fn select(&mut self, group: &str, tab: &str) -> bool {
        let Some(selection) = self.groups.get_mut(group) else {
            return false;
        };
        if selection.active_key == tab || !selection.keys.iter().any(|k| k == tab) {
            return false;
        }
        selection.active_key = tab.to_string();
        true
    }

    /// Moves the group back to its first declared tab.
    pub fn reset(&mut self, group: &str) -> bool {
        let Some(first) = self
            .groups
            .get(group)
            .and_then(|s| s.keys.first().cloned())
        else {
            return false;
        };
        self.select(group, &first)
    }

    pub fn active(&self, group: &str) -> Option<&str> {
        self.groups.get(group).map(|s| s.active_key.as_str())
    }

    #[cfg(test)]
    pub fn get(&self, group: &str) -> Option<&TabSelection> {
        self.groups.get(group)
    }

    pub fn active_keys(&self) -> BTreeMap<String, String> {
        self.groups
            .iter()
            .map(|(group, s)| (group.clone(), s.active_key.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> Tabs {
        Tabs::new(vec![
            TabGroup {
                key: "skills".to_string(),
                tabs: ["cloud", "devops", "monitoring"].map(String::from).to_vec(),
            },
            TabGroup {
                key: "empty".to_string(),
                tabs: vec![],
            },
        ])
    }

    #[test]
    fn test_first_tab_active_initially() {
        let tabs = tabs();
        assert_eq!(tabs.active("skills"), Some("cloud"));
        assert_eq!(tabs.active("empty"), None);
        assert_eq!(tabs.get("skills").map(|s| s.keys().len()), Some(3));
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut tabs = tabs();
        assert!(tabs.select("skills", "devops"));
        assert!(!tabs.select("skills", "devops"));
        assert_eq!(tabs.active("skills"), Some("devops"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut tabs = tabs();
        assert!(!tabs.select("skills", "nope"));
        assert!(!tabs.select("nope", "cloud"));
        assert_eq!(tabs.active("skills"), Some("cloud"));
    }

    #[test]
    fn test_reset() {
        let mut tabs = tabs();
        tabs.select("skills", "monitoring");
        assert!(tabs.reset("skills"));
        assert_eq!(tabs.active("skills"), Some("cloud"));
        assert!(!tabs.reset("skills"));
        assert_eq!(
            tabs.active_keys().get("skills").map(String::as_str),
            Some("cloud")
        );
    }
}
