//! Outline icons (24x24, stroke based) referenced by name from the content
//! manifest.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    #[default]
    Code,
    Bot,
    Database,
    Terminal,
    Layers,
    Github,
    Twitter,
    Mail,
    ExternalLink,
    ChevronDown,
    Binary,
    ScanLine,
    Smartphone,
    Home,
}

impl Icon {
    pub const ALL: [Icon; 14] = [
        Icon::Code,
        Icon::Bot,
        Icon::Database,
        Icon::Terminal,
        Icon::Layers,
        Icon::Github,
        Icon::Twitter,
        Icon::Mail,
        Icon::ExternalLink,
        Icon::ChevronDown,
        Icon::Binary,
        Icon::ScanLine,
        Icon::Smartphone,
        Icon::Home,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Bot => "bot",
            Self::Database => "database",
            Self::Terminal => "terminal",
            Self::Layers => "layers",
            Self::Github => "github",
            Self::Twitter => "twitter",
            Self::Mail => "mail",
            Self::ExternalLink => "external-link",
            Self::ChevronDown => "chevron-down",
            Self::Binary => "binary",
            Self::ScanLine => "scan-line",
            Self::Smartphone => "smartphone",
            Self::Home => "home",
        }
    }

    /// SVG path data, one entry per `<path>`.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Code => &["m18 16 4-4-4-4", "m6 8-4 4 4 4", "m14.5 4-5 16"],
            Self::Bot => &[
                "M12 8V4H8",
                "M6 8h12a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2v-8a2 2 0 0 1 2-2z",
                "M2 14h2",
                "M20 14h2",
                "M15 13v2",
                "M9 13v2",
            ],
            Self::Database => &[
                "M21 5a9 3 0 1 1-18 0 9 3 0 1 1 18 0",
                "M3 5v14a9 3 0 0 0 18 0V5",
                "M3 12a9 3 0 0 0 18 0",
            ],
            Self::Terminal => &["m4 17 6-6-6-6", "M12 19h8"],
            Self::Layers => &[
                "m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z",
                "m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65",
                "m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65",
            ],
            Self::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Self::Twitter => &[
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            ],
            Self::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            Self::ExternalLink => &[
                "M15 3h6v6",
                "M10 14 21 3",
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            ],
            Self::ChevronDown => &["m6 9 6 6 6-6"],
            Self::Binary => &[
                "M16 14h0a2 2 0 0 1 2 2v2a2 2 0 0 1-2 2h0a2 2 0 0 1-2-2v-2a2 2 0 0 1 2-2z",
                "M8 4h0a2 2 0 0 1 2 2v2a2 2 0 0 1-2 2h0a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M6 20h4",
                "M14 10h4",
                "M6 14h2v6",
                "M14 4h2v6",
            ],
            Self::ScanLine => &[
                "M3 7V5a2 2 0 0 1 2-2h2",
                "M17 3h2a2 2 0 0 1 2 2v2",
                "M21 17v2a2 2 0 0 1-2 2h-2",
                "M7 21H5a2 2 0 0 1-2-2v-2",
                "M7 12h10",
            ],
            Self::Smartphone => &[
                "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M12 18h.01",
            ],
            Self::Home => &["m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z", "M9 22V12h6v10"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_names_match_serde_names() {
        for icon in Icon::ALL {
            let parsed: Icon = serde_json::from_str(&format!("\"{}\"", icon.name())).unwrap();
            assert_eq!(parsed, icon);
        }
    }

    #[test]
    fn every_icon_has_path_data() {
        for icon in Icon::ALL {
            assert!(!icon.paths().is_empty(), "{} has no paths", icon.name());
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(serde_json::from_str::<Icon>("\"rocket\"").is_err());
    }
}
