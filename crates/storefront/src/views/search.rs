//! Search filter options.

use crate::catalog::{Brand, ProductType};

/// One `<option>` of a filter `<select>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Brand options, preceded by "All Brands".
#[must_use]
pub fn brand_options(selected: Option<Brand>) -> Vec<FilterOption> {
    let mut options = vec![FilterOption {
        value: "",
        label: "All Brands",
        selected: selected.is_none(),
    }];
    options.extend(Brand::ALL.into_iter().map(|brand| FilterOption {
        value: brand.value(),
        label: brand.label(),
        selected: selected == Some(brand),
    }));
    options
}

/// Product type options, preceded by "All Types".
#[must_use]
pub fn product_type_options(selected: Option<ProductType>) -> Vec<FilterOption> {
    let mut options = vec![FilterOption {
        value: "",
        label: "All Types",
        selected: selected.is_none(),
    }];
    options.extend(ProductType::ALL.into_iter().map(|kind| FilterOption {
        value: kind.value(),
        label: kind.label(),
        selected: selected == Some(kind),
    }));
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_options() {
        let options = brand_options(Some(Brand::Nyx));
        assert_eq!(options.len(), 9);
        assert_eq!(options[0].label, "All Brands");
        assert!(!options[0].selected);
        assert!(options.iter().any(|o| o.value == "nyx" && o.selected));
        assert_eq!(options.iter().filter(|o| o.selected).count(), 1);
    }

    #[test]
    fn test_product_type_options_default_to_all() {
        let options = product_type_options(None);
        assert_eq!(options.len(), 10);
        assert!(options[0].selected);
        assert_eq!(options[2].value, "lip_liner");
        assert_eq!(options[2].label, "Lip Liner");
    }
}
