//! Catalog model: packages and their line items.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// A single part/price/quantity record within a package block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Part number, from column A.
    pub part_num: String,
    /// Human-readable description, from column B.
    pub desc: String,
    /// Unit list price, from column C.
    pub cost: f64,
    /// Quantity, from column D.
    pub qty: f64,
}

impl LineItem {
    /// Extended price of this line (`cost × qty`).
    pub fn extended(&self) -> f64 {
        self.cost * self.qty
    }
}

/// A named package and its line items, in source row order.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    name: String,
    items: Vec<LineItem>,
}

impl Package {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Package name, as it appears in the header row.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Line items in accumulation order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when no items were accumulated.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of extended prices over the package's items.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(LineItem::extended).sum()
    }

    fn push(&mut self, item: LineItem) {
        self.items.push(item);
    }
}

/// The complete mapping from package name to ordered line items.
///
/// Package names form a closed set declared up front; every declared
/// name is present in the catalog (and in its JSON form) even when no
/// items were ever assigned to it. Declaration order is preserved and
/// is the key order of the serialized document.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    packages: Vec<Package>,
}

impl Catalog {
    /// Create a catalog with one empty package per declared name.
    ///
    /// Duplicate names collapse into the first occurrence.
    pub fn with_packages(names: &[impl AsRef<str>]) -> Self {
        let mut packages: Vec<Package> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            if !packages.iter().any(|p| p.name == name) {
                packages.push(Package::new(name));
            }
        }
        Self { packages }
    }

    /// Index of a declared package by exact name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.packages.iter().position(|p| p.name == name)
    }

    /// Look up a package by exact name.
    pub fn get(&self, name: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.name == name)
    }

    /// The packages, in declaration order.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// Number of declared packages.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// True when no packages were declared.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Total number of accumulated line items across all packages.
    pub fn item_count(&self) -> usize {
        self.packages.iter().map(Package::len).sum()
    }

    /// Sum of all package subtotals.
    pub fn grand_total(&self) -> f64 {
        self.packages.iter().map(Package::subtotal).sum()
    }

    pub(crate) fn push_item(&mut self, index: usize, item: LineItem) {
        self.packages[index].push(item);
    }
}

impl Serialize for Catalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // A JSON map keyed by package name, keys in declaration order.
        let mut map = serializer.serialize_map(Some(self.packages.len()))?;
        for package in &self.packages {
            map.serialize_entry(&package.name, &package.items)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(part: &str, cost: f64, qty: f64) -> LineItem {
        LineItem {
            part_num: part.to_string(),
            desc: format!("{} description", part),
            cost,
            qty,
        }
    }

    #[test]
    fn test_all_declared_packages_present() {
        let catalog = Catalog::with_packages(&["Tank Equipment", "Forecourt Island Equipment"]);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("Tank Equipment").unwrap().is_empty());
        assert!(catalog.get("Forecourt Island Equipment").unwrap().is_empty());
        assert!(catalog.get("Unknown").is_none());
    }

    #[test]
    fn test_duplicate_names_collapse() {
        let catalog = Catalog::with_packages(&["A", "B", "A"]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.position("A"), Some(0));
        assert_eq!(catalog.position("B"), Some(1));
    }

    #[test]
    fn test_subtotals() {
        let mut catalog = Catalog::with_packages(&["A", "B"]);
        catalog.push_item(0, item("P1", 100.0, 2.0));
        catalog.push_item(0, item("P2", 0.5, 10.0));
        catalog.push_item(1, item("P3", 7.0, 1.0));

        assert_eq!(catalog.get("A").unwrap().subtotal(), 205.0);
        assert_eq!(catalog.get("B").unwrap().subtotal(), 7.0);
        assert_eq!(catalog.grand_total(), 212.0);
        assert_eq!(catalog.item_count(), 3);
    }

    #[test]
    fn test_serialize_key_order_is_declaration_order() {
        let mut catalog = Catalog::with_packages(&["Zebra", "Apple", "Mango"]);
        catalog.push_item(1, item("P1", 1.0, 1.0));

        let json = serde_json::to_string(&catalog).unwrap();
        let zebra = json.find("\"Zebra\"").unwrap();
        let apple = json.find("\"Apple\"").unwrap();
        let mango = json.find("\"Mango\"").unwrap();
        assert!(zebra < apple && apple < mango);
    }

    #[test]
    fn test_line_item_field_names() {
        let json = serde_json::to_string(&item("P1", 100.5, 2.0)).unwrap();
        assert!(json.contains("\"partNum\":\"P1\""));
        assert!(json.contains("\"desc\":\"P1 description\""));
        assert!(json.contains("\"cost\":100.5"));
        assert!(json.contains("\"qty\":2.0"));
    }
}
