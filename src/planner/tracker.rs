use std::collections::{HashMap, HashSet};

use crate::models::MenuItem;
use crate::planner::constants::{REPEAT_WINDOW_DAYS, SIGNATURE_SEPARATOR};

/// Order-independent key for a main/side/drink triple.
pub fn combo_signature(main: &str, side: &str, drink: &str) -> String {
    let mut names = [main, side, drink];
    names.sort_unstable();
    names.join(SIGNATURE_SEPARATOR)
}

/// Repetition bookkeeping for one plan-generation run.
///
/// Tracks items used on the first day, items used on the day currently being
/// generated, and the last day each exact triple was accepted.
#[derive(Debug, Clone)]
pub struct UniquenessTracker {
    first_day_items: HashSet<String>,
    current_day_items: HashSet<String>,
    signature_last_day: HashMap<String, usize>,
    repeat_window: usize,
}

impl Default for UniquenessTracker {
    fn default() -> Self {
        Self::new(REPEAT_WINDOW_DAYS)
    }
}

impl UniquenessTracker {
    pub fn new(repeat_window: usize) -> Self {
        Self {
            first_day_items: HashSet::new(),
            current_day_items: HashSet::new(),
            signature_last_day: HashMap::new(),
            repeat_window,
        }
    }

    /// Forget the items of the previous day. Cross-day state is kept.
    pub fn start_day(&mut self) {
        self.current_day_items.clear();
    }

    /// Whether a triple may be accepted on `day_index`.
    pub fn is_available(
        &self,
        main: &MenuItem,
        side: &MenuItem,
        drink: &MenuItem,
        day_index: usize,
    ) -> bool {
        let names = [&main.name, &side.name, &drink.name];

        if names.iter().any(|n| self.current_day_items.contains(*n)) {
            return false;
        }

        // First-day exclusivity is a one-time rule.
        if day_index == 0 && names.iter().any(|n| self.first_day_items.contains(*n)) {
            return false;
        }

        let signature = combo_signature(&main.name, &side.name, &drink.name);
        !self.used_within_window(&signature, day_index)
    }

    /// Record an accepted triple.
    pub fn reserve(&mut self, main: &MenuItem, side: &MenuItem, drink: &MenuItem, day_index: usize) {
        for name in [&main.name, &side.name, &drink.name] {
            self.current_day_items.insert(name.clone());
            if day_index == 0 {
                self.first_day_items.insert(name.clone());
            }
        }

        let signature = combo_signature(&main.name, &side.name, &drink.name);
        self.signature_last_day.insert(signature, day_index);
    }

    /// Last day a signature was accepted, if ever.
    pub fn last_day_for(&self, signature: &str) -> Option<usize> {
        self.signature_last_day.get(signature).copied()
    }

    pub fn first_day_items(&self) -> &HashSet<String> {
        &self.first_day_items
    }

    pub fn current_day_items(&self) -> &HashSet<String> {
        &self.current_day_items
    }

    fn used_within_window(&self, signature: &str, day_index: usize) -> bool {
        match self.signature_last_day.get(signature) {
            Some(&last) => day_index
                .checked_sub(last)
                .is_none_or(|gap| gap < self.repeat_window),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn triple() -> (MenuItem, MenuItem, MenuItem) {
        (
            MenuItem::new("Burger", Category::Main, 500, "savory", 8.0),
            MenuItem::new("Fries", Category::Side, 150, "savory", 8.0),
            MenuItem::new("Water", Category::Drink, 0, "fresh", 8.0),
        )
    }

    #[test]
    fn test_signature_is_order_independent() {
        assert_eq!(combo_signature("b", "a", "c"), "a_b_c");
        assert_eq!(
            combo_signature("Water", "Burger", "Fries"),
            combo_signature("Fries", "Water", "Burger")
        );
    }

    #[test]
    fn test_same_day_items_blocked() {
        let (main, side, drink) = triple();
        let mut tracker = UniquenessTracker::default();
        tracker.start_day();
        assert!(tracker.is_available(&main, &side, &drink, 1));

        tracker.reserve(&main, &side, &drink, 1);
        let other_main = MenuItem::new("Wrap", Category::Main, 400, "fresh", 8.0);
        let other_drink = MenuItem::new("Tea", Category::Drink, 0, "fresh", 8.0);
        // Fries already used today
        assert!(!tracker.is_available(&other_main, &side, &other_drink, 1));
    }

    #[test]
    fn test_first_day_set_only_recorded_on_day_zero() {
        let (main, side, drink) = triple();
        let mut tracker = UniquenessTracker::default();

        tracker.reserve(&main, &side, &drink, 0);
        assert!(tracker.first_day_items().contains("Burger"));

        let mut later = UniquenessTracker::default();
        later.reserve(&main, &side, &drink, 1);
        assert!(later.first_day_items().is_empty());
    }

    #[test]
    fn test_repeat_window() {
        let (main, side, drink) = triple();
        let mut tracker = UniquenessTracker::default();
        tracker.reserve(&main, &side, &drink, 0);

        for day in 1..3 {
            tracker.start_day();
            assert!(!tracker.is_available(&main, &side, &drink, day));
        }

        tracker.start_day();
        assert!(tracker.is_available(&main, &side, &drink, 3));

        tracker.reserve(&main, &side, &drink, 3);
        assert_eq!(tracker.last_day_for("Burger_Fries_Water"), Some(3));
    }

    #[test]
    fn test_start_day_keeps_signatures() {
        let (main, side, drink) = triple();
        let mut tracker = UniquenessTracker::default();
        tracker.reserve(&main, &side, &drink, 0);
        tracker.start_day();

        assert!(tracker.current_day_items().is_empty());
        assert!(tracker.last_day_for("Burger_Fries_Water").is_some());
    }
}
