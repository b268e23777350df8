use strsim::jaro_winkler;

use crate::models::{Category, MenuItem};

/// Borrowed view of the master menu grouped by role.
#[derive(Debug, Clone, Default)]
pub struct CategorizedMenu<'a> {
    pub mains: Vec<&'a MenuItem>,
    pub sides: Vec<&'a MenuItem>,
    pub drinks: Vec<&'a MenuItem>,
    /// Items whose category is not main, side or drink.
    pub uncategorized: Vec<&'a MenuItem>,
}

impl<'a> CategorizedMenu<'a> {
    pub fn pool(&self, category: Category) -> &[&'a MenuItem] {
        match category {
            Category::Main => &self.mains,
            Category::Side => &self.sides,
            Category::Drink => &self.drinks,
        }
    }

    /// Roles with no items, in main/side/drink order.
    pub fn missing_roles(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.pool(*c).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_roles().is_empty()
    }
}

/// Closest known role for a misspelled category, if any is reasonably close.
pub fn suggest_category(raw: &str) -> Option<Category> {
    let raw = raw.trim().to_lowercase();
    Category::ALL
        .into_iter()
        .map(|c| (c, jaro_winkler(c.as_str(), &raw)))
        .filter(|(_, score)| *score > 0.7)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(c, _)| c)
}

/// Group menu items by role, preserving catalog order within each role.
pub fn categorize_menu(items: &[MenuItem]) -> CategorizedMenu<'_> {
    let mut menu = CategorizedMenu::default();

    for item in items {
        match item.role() {
            Some(Category::Main) => menu.mains.push(item),
            Some(Category::Side) => menu.sides.push(item),
            Some(Category::Drink) => menu.drinks.push(item),
            None => {
                match suggest_category(&item.category) {
                    Some(guess) => tracing::warn!(
                        item = %item.name,
                        category = %item.category,
                        "Unknown category, did you mean '{}'? Item skipped",
                        guess
                    ),
                    None => tracing::warn!(
                        item = %item.name,
                        category = %item.category,
                        "Unknown category, item skipped"
                    ),
                }
                menu.uncategorized.push(item);
            }
        }
    }

    tracing::debug!(
        mains = menu.mains.len(),
        sides = menu.sides.len(),
        drinks = menu.drinks.len(),
        "Categorized master menu"
    );

    menu
}
