/// Pure data for one selectable menu entry
///
/// Immutable once constructed; the menu holds an ordered sequence of these
/// and replaces it wholesale, never item by item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MenuItem<T> {
    label: String,
    value: T,
    enabled: bool,
}

impl<T> MenuItem<T> {
    /// Create an enabled item.
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
            enabled: true,
        }
    }

    // === Builder API ===

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    // === Getters ===

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = MenuItem::new("Copy", 1);
        assert_eq!(item.label(), "Copy");
        assert_eq!(*item.value(), 1);
        assert!(item.is_enabled());
    }

    #[test]
    fn test_disabled_item() {
        let item = MenuItem::new("Paste", 2).disabled();
        assert!(!item.is_enabled());
    }
}
