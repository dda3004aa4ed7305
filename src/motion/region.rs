use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Which chapter of the journey the page is framed around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Nepal,
    #[default]
    Us,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::Nepal, Region::Us];

    pub fn label(&self) -> &'static str {
        match self {
            Region::Nepal => "Nepal",
            Region::Us => "US",
        }
    }

    pub fn other(&self) -> Region {
        match self {
            Region::Nepal => Region::Us,
            Region::Us => Region::Nepal,
        }
    }

    /// Accent CSS custom properties for this region.
    pub fn tokens(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Region::Nepal => &NEPAL_TOKENS,
            Region::Us => &US_TOKENS,
        }
    }

    /// Colour of the globe's rim light.
    pub fn light_color(&self) -> &'static str {
        match self {
            Region::Nepal => "#DC143C",
            Region::Us => "#60A5FA",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const NEPAL_TOKENS: [(&str, &str); 5] = [
    ("--color-accent", "#DC143C"),
    ("--color-accent-hover", "#A01030"),
    ("--color-accent-soft", "rgba(220, 20, 60, 0.14)"),
    ("--color-accent-glow", "rgba(220, 20, 60, 0.35)"),
    (
        "--shadow-glow-accent",
        "0 0 20px rgba(220,20,60,0.25), 0 0 60px rgba(220,20,60,0.08)",
    ),
];

const US_TOKENS: [(&str, &str); 5] = [
    ("--color-accent", "#60A5FA"),
    ("--color-accent-hover", "#3B82F6"),
    ("--color-accent-soft", "rgba(96, 165, 250, 0.14)"),
    ("--color-accent-glow", "rgba(96, 165, 250, 0.35)"),
    (
        "--shadow-glow-accent",
        "0 0 20px rgba(96,165,250,0.25), 0 0 60px rgba(96,165,250,0.08)",
    ),
];

/// Destination for theme tokens. The browser implementation writes CSS
/// custom properties on the document root.
pub trait ThemeSink {
    fn set_property(&mut self, name: &str, value: &str);
}

impl ThemeSink for HashMap<String, String> {
    fn set_property(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}

pub fn apply_theme_tokens(region: Region, sink: &mut impl ThemeSink) {
    for (name, value) in region.tokens() {
        sink.set_property(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_region_is_us() {
        assert_eq!(Region::default(), Region::Us);
        assert_eq!(Region::Us.other(), Region::Nepal);
    }

    #[test]
    fn test_apply_tokens_overwrites() {
        let mut sink = HashMap::new();
        apply_theme_tokens(Region::Nepal, &mut sink);
        assert_eq!(sink.len(), 5);
        assert_eq!(sink["--color-accent"], "#DC143C");

        apply_theme_tokens(Region::Us, &mut sink);
        assert_eq!(sink.len(), 5);
        assert_eq!(sink["--color-accent"], "#60A5FA");
        assert_eq!(sink["--color-accent-hover"], "#3B82F6");
    }

    #[test]
    fn test_regions_define_same_tokens() {
        let names = |r: Region| r.tokens().iter().map(|(n, _)| *n).collect::<Vec<_>>();
        assert_eq!(names(Region::Nepal), names(Region::Us));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Region::Nepal).unwrap(), "\"nepal\"");
        let region: Region = serde_json::from_str("\"us\"").unwrap();
        assert_eq!(region, Region::Us);
    }
}
