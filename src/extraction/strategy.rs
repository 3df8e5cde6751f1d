/// A rule for locating candidate ranking rows: a CSS selector plus the number
/// of matches it must exceed before the page is considered to hold rankings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strategy {
    pub selector: String,
    pub min_count: usize,
}

impl Strategy {
    pub fn new(selector: impl Into<String>, min_count: usize) -> Self {
        Self {
            selector: selector.into(),
            min_count,
        }
    }

    pub fn is_plausible(&self, count: usize) -> bool {
        count > self.min_count
    }
}

/// Build a strategy table sharing one threshold
pub fn strategies(selectors: &[&str], min_count: usize) -> Vec<Strategy> {
    selectors
        .iter()
        .map(|selector| Strategy::new(*selector, min_count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        let strategy = Strategy::new("table tbody tr", 5);

        assert!(!strategy.is_plausible(5));
        assert!(strategy.is_plausible(6));
    }

    #[test]
    fn test_strategies_keep_order() {
        let table = strategies(&[".a", ".b"], 10);

        assert_eq!(table, vec![Strategy::new(".a", 10), Strategy::new(".b", 10)]);
    }
}
