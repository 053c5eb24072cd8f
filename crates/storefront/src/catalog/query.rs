//! Catalog search filters.

use serde::{Deserialize, Serialize};

/// Brands offered in the search filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brand {
    Maybelline,
    CoverGirl,
    Nyx,
    Revlon,
    LOreal,
    Essence,
    WetNWild,
    Milani,
}

impl Brand {
    /// Every brand, in filter display order.
    pub const ALL: [Self; 8] = [
        Self::Maybelline,
        Self::CoverGirl,
        Self::Nyx,
        Self::Revlon,
        Self::LOreal,
        Self::Essence,
        Self::WetNWild,
        Self::Milani,
    ];

    /// Value sent to the catalog as `brand=`.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Maybelline => "maybelline",
            Self::CoverGirl => "covergirl",
            Self::Nyx => "nyx",
            Self::Revlon => "revlon",
            Self::LOreal => "l'oreal",
            Self::Essence => "essence",
            Self::WetNWild => "wet n wild",
            Self::Milani => "milani",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Maybelline => "Maybelline",
            Self::CoverGirl => "CoverGirl",
            Self::Nyx => "NYX",
            Self::Revlon => "Revlon",
            Self::LOreal => "L'Oreal",
            Self::Essence => "Essence",
            Self::WetNWild => "Wet n Wild",
            Self::Milani => "Milani",
        }
    }

    /// Look up a brand by its catalog value.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|brand| brand.value() == value)
    }
}

/// Product types offered in the search filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductType {
    Lipstick,
    LipLiner,
    Foundation,
    Eyeliner,
    Eyeshadow,
    Mascara,
    Blush,
    Bronzer,
    NailPolish,
}

impl ProductType {
    /// Every product type, in filter display order.
    pub const ALL: [Self; 9] = [
        Self::Lipstick,
        Self::LipLiner,
        Self::Foundation,
        Self::Eyeliner,
        Self::Eyeshadow,
        Self::Mascara,
        Self::Blush,
        Self::Bronzer,
        Self::NailPolish,
    ];

    /// Value sent to the catalog as `product_type=`.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Lipstick => "lipstick",
            Self::LipLiner => "lip_liner",
            Self::Foundation => "foundation",
            Self::Eyeliner => "eyeliner",
            Self::Eyeshadow => "eyeshadow",
            Self::Mascara => "mascara",
            Self::Blush => "blush",
            Self::Bronzer => "bronzer",
            Self::NailPolish => "nail_polish",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lipstick => "Lipstick",
            Self::LipLiner => "Lip Liner",
            Self::Foundation => "Foundation",
            Self::Eyeliner => "Eyeliner",
            Self::Eyeshadow => "Eyeshadow",
            Self::Mascara => "Mascara",
            Self::Blush => "Blush",
            Self::Bronzer => "Bronzer",
            Self::NailPolish => "Nail Polish",
        }
    }

    /// Look up a product type by its catalog value.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.value() == value)
    }
}

/// Filters for `products.json`.
///
/// Empty filters are omitted from the request; with none set the whole
/// catalog is returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuery {
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub product_type: Option<String>,
}

impl ProductQuery {
    /// Query for a single brand.
    #[must_use]
    pub fn for_brand(brand: impl Into<String>) -> Self {
        Self::default().with_brand(brand)
    }

    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = non_empty(brand.into());
        self
    }

    #[must_use]
    pub fn with_product_type(mut self, product_type: impl Into<String>) -> Self {
        self.product_type = non_empty(product_type.into());
        self
    }

    /// Query parameters in request order.
    pub(crate) fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(brand) = self.brand.as_deref().filter(|b| !b.is_empty()) {
            pairs.push(("brand", brand));
        }
        if let Some(kind) = self.product_type.as_deref().filter(|t| !t.is_empty()) {
            pairs.push(("product_type", kind));
        }
        pairs
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
