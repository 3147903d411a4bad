//! Section registry
//!
//! Every visually distinct block of the page, its in-page anchor, and the
//! reveal configuration it is mounted with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;
use crate::reveal::RevealConfig;

/// Identifier of one section of the single-page layout.
///
/// Serialized as its anchor id so host bridge messages can name targets
/// the same way the document does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionId {
    #[serde(rename = "home")]
    Home,
    #[serde(rename = "the-studio")]
    Studio,
    #[serde(rename = "services")]
    Services,
    #[serde(rename = "our-work")]
    OurWork,
    #[serde(rename = "our-approach")]
    OurApproach,
    #[serde(rename = "testimonials")]
    Testimonials,
    #[serde(rename = "contact")]
    Contact,
    #[serde(rename = "site-footer")]
    Footer,
}

impl SectionId {
    /// Top-to-bottom composition order of the page.
    pub const PAGE_ORDER: [SectionId; 8] = [
        SectionId::Home,
        SectionId::Studio,
        SectionId::Services,
        SectionId::OurWork,
        SectionId::OurApproach,
        SectionId::Testimonials,
        SectionId::Contact,
        SectionId::Footer,
    ];

    /// Element id, also the `#fragment` used for in-page navigation
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Studio => "the-studio",
            SectionId::Services => "services",
            SectionId::OurWork => "our-work",
            SectionId::OurApproach => "our-approach",
            SectionId::Testimonials => "testimonials",
            SectionId::Contact => "contact",
            SectionId::Footer => "site-footer",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }

    /// Reveal configuration for sections that latch on intersection.
    ///
    /// The hero fades with scroll instead and has none.
    pub fn reveal(&self) -> Option<RevealConfig> {
        match self {
            SectionId::Home => None,
            SectionId::Studio => Some(RevealConfig::new(0.2)),
            SectionId::Testimonials => Some(RevealConfig::new(0.1).with_root_margin_bottom(-100)),
            SectionId::Services
            | SectionId::OurWork
            | SectionId::OurApproach
            | SectionId::Contact
            | SectionId::Footer => Some(RevealConfig::new(0.1)),
        }
    }

    /// Sections that own a reveal latch, in page order
    pub fn revealing() -> impl Iterator<Item = SectionId> {
        Self::PAGE_ORDER
            .into_iter()
            .filter(|section| section.reveal().is_some())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for SectionId {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let anchor = s.strip_prefix('#').unwrap_or(s);
        Self::PAGE_ORDER
            .into_iter()
            .find(|section| section.anchor() == anchor)
            .ok_or_else(|| SiteError::UnknownSection(s.to_string()))
    }
}

/// Derive an anchor slug from a navigation label.
///
/// Lowercases the label and joins its first two words with a hyphen, so
/// "Our Work" becomes `our-work` and "The Studio" becomes `the-studio`.
pub fn anchor_slug(label: &str) -> String {
    label.to_lowercase().replacen(' ', "-", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchors_match_document_ids() {
        assert_eq!(SectionId::Studio.anchor(), "the-studio");
        assert_eq!(SectionId::Services.anchor(), "services");
        assert_eq!(SectionId::OurWork.anchor(), "our-work");
        assert_eq!(SectionId::OurApproach.anchor(), "our-approach");
        assert_eq!(SectionId::Testimonials.anchor(), "testimonials");
        assert_eq!(SectionId::Contact.anchor(), "contact");
        assert_eq!(SectionId::Contact.href(), "#contact");
        assert_eq!(SectionId::Home.href(), "#home");
    }

    #[test]
    fn test_parse_accepts_fragment_and_bare_id() {
        assert_eq!("#our-work".parse::<SectionId>().unwrap(), SectionId::OurWork);
        assert_eq!("the-studio".parse::<SectionId>().unwrap(), SectionId::Studio);
        assert!(matches!(
            "gallery".parse::<SectionId>(),
            Err(SiteError::UnknownSection(_))
        ));
    }

    #[test]
    fn test_serde_uses_anchor() {
        let json = serde_json::to_string(&SectionId::OurApproach).unwrap();
        assert_eq!(json, "\"our-approach\"");
        let back: SectionId = serde_json::from_str("\"site-footer\"").unwrap();
        assert_eq!(back, SectionId::Footer);
    }

    #[test]
    fn test_reveal_thresholds() {
        assert!(SectionId::Home.reveal().is_none());
        assert_eq!(SectionId::Studio.reveal().unwrap().threshold, 0.2);
        let testimonials = SectionId::Testimonials.reveal().unwrap();
        assert_eq!(testimonials.threshold, 0.1);
        assert_eq!(testimonials.root_margin_bottom_px, -100);
        assert_eq!(SectionId::revealing().count(), 7);
    }

    #[test]
    fn test_slug_replaces_first_space_only() {
        assert_eq!(anchor_slug("Our Work"), "our-work");
        assert_eq!(anchor_slug("The Studio"), "the-studio");
        assert_eq!(anchor_slug("Contact"), "contact");
        assert_eq!(anchor_slug("A B C"), "a-b c");
    }
}
