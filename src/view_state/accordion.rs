use serde::{Deserialize, Serialize};

use super::config::AccordionPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandableItem {
    pub id: String,
    pub is_expanded: bool,
}

#[derive(Debug, Clone)]
pub struct Accordion {
    policy: AccordionPolicy,
    items: Vec<ExpandableItem>,
}

impl Accordion {
    pub fn new(ids: impl IntoIterator<Item = String>, policy: AccordionPolicy) -> Self {
        let items = ids
            .into_iter()
            .map(|id| ExpandableItem {
                id,
                is_expanded: false,
            })
            .collect();
        Self { policy, items }
    }

    /// Flips the item with `id`. Returns false (and changes nothing) for unknown ids.
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            return false;
        };
        let expand = !self.items[index].is_expanded;
        if expand && self.policy == AccordionPolicy::SingleSelect {
            for item in self.items.iter_mut() {
                item.is_expanded = false;
            }
        }
        self.items[index].is_expanded = expand;
        true
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.id == id && item.is_expanded)
    }

    pub fn items(&self) -> &[ExpandableItem] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accordion(policy: AccordionPolicy) -> Accordion {
        Accordion::new(
            ["exp-1", "exp-2", "exp-3"].map(String::from),
            policy,
        )
    }

    fn expanded(acc: &Accordion) -> Vec<&str> {
        acc.items()
            .iter()
            .filter(|i| i.is_expanded)
            .map(|i| i.id.as_str())
            .collect()
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut acc = accordion(AccordionPolicy::SingleSelect);
        assert!(acc.toggle("exp-1"));
        assert!(acc.is_expanded("exp-1"));
        assert!(acc.toggle("exp-1"));
        assert!(!acc.is_expanded("exp-1"));
        assert!(expanded(&acc).is_empty());
    }

    #[test]
    fn test_single_select_collapses_others() {
        let mut acc = accordion(AccordionPolicy::SingleSelect);
        acc.toggle("exp-1");
        acc.toggle("exp-2");
        assert_eq!(expanded(&acc), vec!["exp-2"]);
        acc.toggle("exp-3");
        assert_eq!(expanded(&acc), vec!["exp-3"]);
    }

    #[test]
    fn test_independent_keeps_others() {
        let mut acc = accordion(AccordionPolicy::Independent);
        acc.toggle("exp-1");
        acc.toggle("exp-3");
        assert_eq!(expanded(&acc), vec!["exp-1", "exp-3"]);
        acc.toggle("exp-1");
        assert_eq!(expanded(&acc), vec!["exp-3"]);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut acc = accordion(AccordionPolicy::SingleSelect);
        acc.toggle("exp-2");
        assert!(!acc.toggle("exp-99"));
        assert_eq!(expanded(&acc), vec!["exp-2"]);
    }
}
