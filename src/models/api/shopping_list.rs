use std::fmt;

use indexmap::IndexMap;

/// Total quantity of one ingredient across the weekly list
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedIngredient {
    pub name: String,
    pub quantity: f64,
    pub unit_label: String,
}

impl fmt::Display for AggregatedIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {}",
            self.name,
            format_quantity(self.quantity),
            self.unit_label
        )
    }
}

/// Shortest round-trip form of a quantity: `500`, `2.5`, `NaN`, `Infinity`.
/// Magnitudes from 1e21 up and below 1e-6 use exponent notation with an explicit sign (`1e+21`).
pub fn format_quantity(quantity: f64) -> String {
    if quantity.is_nan() {
        return "NaN".to_string();
    }
    if quantity.is_infinite() {
        return if quantity > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if quantity == 0.0 {
        // Covers -0
        return "0".to_string();
    }

    let magnitude = quantity.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return quantity.to_string();
    }

    let exponent = format!("{:e}", quantity);
    match exponent.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exponent,
    }
}

/// Aggregated ingredients keyed by name, in first-encounter order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingList {
    items: IndexMap<String, AggregatedIngredient>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a quantity for `name`.
    ///
    /// A new name is appended at the end. A known name keeps its position,
    /// its quantity becomes the sum and its label is replaced by `unit_label`.
    /// Labels are not compared, so `100 g` plus `1 cup` is `101 cup`.
    pub fn add(&mut self, name: &str, quantity: f64, unit_label: &str) {
        match self.items.get_mut(name) {
            Some(existing) => {
                existing.quantity += quantity;
                existing.unit_label = unit_label.to_string();
            }
            None => {
                self.items.insert(
                    name.to_string(),
                    AggregatedIngredient {
                        name: name.to_string(),
                        quantity,
                        unit_label: unit_label.to_string(),
                    },
                );
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&AggregatedIngredient> {
        self.items.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AggregatedIngredient> {
        self.items.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// Display lines, one `"<name>: <quantity> <unit label>"` per ingredient
    pub fn lines(&self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }

    /// Names whose quantity is not a number because a unit string had no numeric prefix
    pub fn malformed(&self) -> Vec<&str> {
        self.iter()
            .filter(|item| item.quantity.is_nan())
            .map(|item| item.name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
