use serde::{Deserialize, Serialize};

/// A hair-color shade shown in the palette viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorShade {
    pub id: String,
    pub name: String,
    pub code: String,
    /// CSS color, e.g. `#a67c4f`.
    pub hex: String,
    pub category: String,
    pub brand: String,
}

impl ColorShade {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        hex: impl Into<String>,
        category: impl Into<String>,
        brand: impl Into<String>,
    ) -> Self {
        let code = code.into();
        Self {
            id: code.clone(),
            name: name.into(),
            code,
            hex: hex.into(),
            category: category.into(),
            brand: brand.into(),
        }
    }
}
