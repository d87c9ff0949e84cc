use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Top-level page sections a shopper can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    About,
    Reviews,
    Promotions,
    Training,
    Palettes,
    Contacts,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Reviews,
        Section::Promotions,
        Section::Training,
        Section::Palettes,
        Section::Contacts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Reviews => "reviews",
            Section::Promotions => "promotions",
            Section::Training => "training",
            Section::Palettes => "palettes",
            Section::Contacts => "contacts",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == wanted)
            .ok_or_else(|| format!("Unknown section: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Palettes".parse::<Section>(), Ok(Section::Palettes));
        assert_eq!(" training ".parse::<Section>(), Ok(Section::Training));
        assert!("checkout".parse::<Section>().is_err());
    }

    #[test]
    fn test_default_is_home() {
        assert_eq!(Section::default(), Section::Home);
    }
}
