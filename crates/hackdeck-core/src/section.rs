//! Page section identifiers.

use serde::{Deserialize, Serialize};

/// The page's named regions, in page order. Exactly one is active at a
/// time; the scroll spy starts at [`Section::Home`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Timeline,
    Problems,
    Prizes,
    Rules,
    Faqs,
    Contact,
}

impl Section {
    /// All sections, in page order.
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::About,
        Section::Timeline,
        Section::Problems,
        Section::Prizes,
        Section::Rules,
        Section::Faqs,
        Section::Contact,
    ];

    /// The anchor identifier used by the page markup.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Timeline => "timeline",
            Section::Problems => "problems",
            Section::Prizes => "prizes",
            Section::Rules => "rules",
            Section::Faqs => "faqs",
            Section::Contact => "contact",
        }
    }

    /// Human-readable navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Timeline => "Timeline",
            Section::Problems => "Problem Statements",
            Section::Prizes => "Prizes",
            Section::Rules => "Rules",
            Section::Faqs => "FAQs",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
