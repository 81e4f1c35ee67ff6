//! Filter button labels.

/// Keys renamed before the `-Free` suffix is appended.
const RENAMES: [(&str, &str); 3] = [("Milk", "Dairy"), ("Nuts", "Nut"), ("Eggs", "Egg")];

/// Derive the upper-cased button label for a filter key.
///
/// `Vegan` and `Healthy` keep their name, `Veggie` reads as `Vegetarian`, and every other
/// key names an allergen the item is free of (`Nuts` becomes `NUT-FREE`).
pub fn display_name(key: &str) -> String {
    let label = match key {
        "Vegan" | "Healthy" => key.to_string(),
        "Veggie" => "Vegetarian".to_string(),
        _ => {
            let base = RENAMES
                .iter()
                .find_map(|(from, to)| (*from == key).then_some(*to))
                .unwrap_or(key);

            format!("{base}-Free")
        }
    };

    label.to_uppercase()
}
