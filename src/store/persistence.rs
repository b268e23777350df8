use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{PlannerError, Result};
use crate::models::{MenuItem, MenuPlan};

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

fn read_csv_items(path: &Path) -> Result<Vec<MenuItem>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut items = Vec::new();
    for record in rdr.deserialize() {
        let item: MenuItem = record?;
        items.push(item);
    }
    Ok(items)
}

/// Deduplicate by role and lowercase name.
///
/// The last occurrence wins but keeps the slot of the first, so catalog order
/// (and with it seeded generation) stays stable.
fn dedupe(items: Vec<MenuItem>) -> Vec<MenuItem> {
    let mut positions: HashMap<(String, String), usize> = HashMap::new();
    let mut deduped: Vec<MenuItem> = Vec::with_capacity(items.len());

    for item in items {
        let key = item.key();
        if let Some(&idx) = positions.get(&key) {
            deduped[idx] = item;
        } else {
            positions.insert(key, deduped.len());
            deduped.push(item);
        }
    }

    deduped
}

/// Load the master menu from a JSON (or `.csv`) file.
pub fn load_menu<P: AsRef<Path>>(path: P) -> Result<Vec<MenuItem>> {
    let path = path.as_ref();
    let items: Vec<MenuItem> = if is_csv(path) {
        read_csv_items(path)?
    } else {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)?
    };

    if let Some(bad) = items.iter().find(|i| !i.is_valid()) {
        return Err(PlannerError::InvalidInput(format!(
            "menu item '{}' has an invalid name or popularity score ({})",
            bad.name, bad.popularity
        )));
    }

    let loaded = items.len();
    let items = dedupe(items);
    if items.len() < loaded {
        tracing::warn!(
            duplicates = loaded - items.len(),
            "Dropped duplicate menu entries"
        );
    }

    tracing::debug!(path = %path.display(), items = items.len(), "Loaded master menu");
    Ok(items)
}

/// Load the master menu and fail when it has no items.
pub fn load_menu_checked<P: AsRef<Path>>(path: P) -> Result<Vec<MenuItem>> {
    let items = load_menu(path)?;
    if items.is_empty() {
        return Err(PlannerError::EmptyCatalog);
    }
    Ok(items)
}

/// Save a generated plan as pretty JSON.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &MenuPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    #[test]
    fn test_load_json_menu() {
        let json = r#"[
            {"item_name": "Veggie Burger", "category": "main", "calories": 500, "taste_profile": "savory", "popularity_score": 8.0},
            {"item_name": "Fries", "category": "side", "calories": 150, "taste_profile": "savory", "popularity_score": 7.5}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let items = load_menu(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Veggie Burger");
        assert_eq!(items[1].calories, 150);
    }

    #[test]
    fn test_deduplication_keeps_first_position() {
        let json = r#"[
            {"item_name": "Soda", "category": "drink", "calories": 100, "taste_profile": "sweet", "popularity_score": 6.0},
            {"item_name": "Fries", "category": "side", "calories": 150, "taste_profile": "savory", "popularity_score": 7.5},
            {"item_name": "soda", "category": "drink", "calories": 120, "taste_profile": "sweet", "popularity_score": 6.5}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let items = load_menu(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        // Last occurrence wins, first position kept
        assert_eq!(items[0].name, "soda");
        assert_eq!(items[0].calories, 120);
        assert_eq!(items[1].name, "Fries");
    }

    #[test]
    fn test_same_name_in_different_roles_is_kept() {
        let json = r#"[
            {"item_name": "Chili", "category": "main", "calories": 500, "taste_profile": "spicy", "popularity_score": 8.0},
            {"item_name": "Chili", "category": "side", "calories": 150, "taste_profile": "spicy", "popularity_score": 8.0}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert_eq!(load_menu(file.path()).unwrap().len(), 2);
    }

    #[test]
    fn test_load_csv_menu() {
        let csv = "item_name,category,calories,taste_profile,popularity_score\n\
                   Water,drink,0,fresh,7.9\n\
                   Fries,side,150,savory,7.5\n";

        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let items = load_menu(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Water");
        assert_eq!(items[0].calories, 0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_menu("does/not/exist.json");
        assert!(matches!(result, Err(PlannerError::Io(_))));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        assert!(matches!(load_menu(file.path()), Err(PlannerError::Json(_))));
    }

    #[test]
    fn test_negative_popularity_rejected() {
        let json = r#"[{"item_name": "Soda", "category": "drink", "calories": 100, "taste_profile": "sweet", "popularity_score": -2.0}]"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(
            load_menu(file.path()),
            Err(PlannerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_menu_checked() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[]").unwrap();

        assert!(load_menu(file.path()).unwrap().is_empty());
        assert!(matches!(
            load_menu_checked(file.path()),
            Err(PlannerError::EmptyCatalog)
        ));
    }
}
