//! Page copy, links and images, decoded from the manifest embedded at build
//! time.

use serde::Deserialize;

use crate::config::EffectSettings;
use crate::error::Result;
use crate::icons::Icon;

pub const MANIFEST: &str = include_str!("../content/site.json");

/// Highlight colour used by project rows and inline emphasis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Amber,
    Indigo,
}

impl Accent {
    pub fn text(self) -> &'static str {
        match self {
            Self::Amber => "text-amber-400",
            Self::Indigo => "text-indigo-400",
        }
    }

    pub fn hover_text(self) -> &'static str {
        match self {
            Self::Amber => "hover:text-amber-400",
            Self::Indigo => "hover:text-indigo-400",
        }
    }

    pub fn group_hover_text(self) -> &'static str {
        match self {
            Self::Amber => "group-hover:text-amber-300",
            Self::Indigo => "group-hover:text-indigo-300",
        }
    }

    pub fn glow(self) -> &'static str {
        match self {
            Self::Amber => "from-amber-500 to-orange-600",
            Self::Indigo => "from-indigo-600 to-purple-600",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub icon: Option<Icon>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Brand {
    pub prefix: String,
    pub suffix: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Hero {
    pub status: String,
    pub greeting: String,
    /// Scrambled on hover.
    pub name: String,
    pub lead: String,
    /// Cycled by the typewriter.
    pub phrases: Vec<String>,
    pub pitch: String,
    pub primary: Link,
    pub secondary: Link,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TechCard {
    pub icon: Icon,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FocusEntry {
    pub key: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Terminal {
    pub title: String,
    pub whoami: String,
    pub focus_command: String,
    pub focus: Vec<FocusEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Expertise {
    pub heading: String,
    pub cards: Vec<TechCard>,
    pub terminal: Terminal,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Project {
    pub category: String,
    pub category_icon: Icon,
    pub title: String,
    pub description: String,
    pub image: String,
    pub image_alt: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub accent: Accent,
    pub repo: String,
    pub demo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Projects {
    pub kicker: String,
    pub heading: String,
    pub items: Vec<Project>,
}

/// A run of text, optionally emphasised.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Span {
    pub text: String,
    #[serde(default)]
    pub accent: Option<Accent>,
    /// Force a line break after this span.
    #[serde(default)]
    pub line_break: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub pitch: Vec<Span>,
    pub cta: Link,
    pub socials: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Footer {
    pub marker: String,
    pub copyright: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav: Vec<Link>,
    pub hero: Hero,
    pub expertise: Expertise,
    pub projects: Projects,
    pub contact: Contact,
    pub footer: Footer,
    #[serde(default)]
    pub effects: EffectSettings,
}

impl SiteContent {
    pub fn from_json(raw: &str) -> Result<Self> {
        let mut content: Self = serde_json::from_str(raw)?;
        content.effects = content.effects.sanitized();
        Ok(content)
    }

    pub fn embedded() -> Result<Self> {
        Self::from_json(MANIFEST)
    }

    /// The embedded manifest, or an empty page if it cannot be decoded.
    pub fn load_or_default() -> Self {
        match Self::embedded() {
            Ok(content) => content,
            Err(err) => {
                log::error!("{err}; rendering without content");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn embedded_manifest_decodes() {
        let content = SiteContent::embedded().unwrap();
        assert_eq!(content.nav.len(), 4);
        assert_eq!(content.hero.name, "Eric Li");
        assert_eq!(content.hero.phrases.len(), 3);
        assert_eq!(content.expertise.cards.len(), 4);
        assert_eq!(content.projects.items.len(), 2);
        assert_eq!(content.projects.items[1].accent, Accent::Indigo);
        assert!(content.contact.cta.href.starts_with("mailto:"));
    }

    #[test]
    fn embedded_manifest_uses_default_effects() {
        let content = SiteContent::embedded().unwrap();
        assert_eq!(content.effects, EffectSettings::default());
    }

    #[test]
    fn effect_overrides_are_sanitized() {
        let mut value: serde_json::Value = serde_json::from_str(MANIFEST).unwrap();
        value["effects"] = serde_json::json!({ "scramble": { "tick_ms": 0 } });
        let content = SiteContent::from_json(&value.to_string()).unwrap();
        assert_eq!(content.effects.scramble.tick_ms, 10);
    }

    #[test]
    fn malformed_manifest_is_a_manifest_error() {
        let err = SiteContent::from_json("{ \"brand\": 3 }").unwrap_err();
        assert!(matches!(err, Error::Manifest(_)));
    }

    #[test]
    fn unknown_icon_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(MANIFEST).unwrap();
        value["expertise"]["cards"][0]["icon"] = serde_json::json!("rocket");
        assert!(SiteContent::from_json(&value.to_string()).is_err());
    }
}
