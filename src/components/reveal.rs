//! Reveal helpers shared by the page sections
//!
//! Sections render their hidden state until their latch flips; the CSS
//! transition between the two is driven purely by class names.

use dioxus::prelude::*;
use meraki_core::SectionId;

/// Direction a block travels while it reveals
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Motion {
    /// Opacity only
    Fade,
    /// Rises from below
    #[default]
    Rise,
    /// Slides in from the left
    FromLeft,
    /// Slides in from the right
    FromRight,
    /// Grows from slightly smaller
    Zoom,
    /// Rises from deep below with a slight tilt (testimonial cards)
    Float,
}

impl Motion {
    /// Returns the CSS class for this motion
    pub fn class(&self) -> &'static str {
        match self {
            Motion::Fade => "reveal-fade",
            Motion::Rise => "reveal-rise",
            Motion::FromLeft => "reveal-from-left",
            Motion::FromRight => "reveal-from-right",
            Motion::Zoom => "reveal-zoom",
            Motion::Float => "reveal-float",
        }
    }
}

/// Class list for a revealing block
pub fn reveal_class(base: &str, motion: Motion, visible: bool) -> String {
    let state = if visible { " is-visible" } else { "" };
    if base.is_empty() {
        format!("reveal {}{}", motion.class(), state)
    } else {
        format!("{} reveal {}{}", base, motion.class(), state)
    }
}

/// `data-reveal-threshold` value the host bridge observes with
pub fn threshold_attr(section: SectionId) -> String {
    section
        .reveal()
        .map(|config| config.threshold.to_string())
        .unwrap_or_default()
}

/// `data-reveal-margin` value the host bridge observes with
pub fn margin_attr(section: SectionId) -> String {
    section
        .reveal()
        .map(|config| config.root_margin())
        .unwrap_or_default()
}

/// Small uppercase label above a section heading
#[component]
pub fn SectionEyebrow(
    /// Label text
    label: String,
    /// Optional additional CSS classes
    #[props(default)]
    class: Option<String>,
) -> Element {
    let extra = class.as_deref().unwrap_or("");

    rsx! {
        span { class: "eyebrow breathe {extra}", "{label}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_class_toggles_visibility() {
        assert_eq!(
            reveal_class("card", Motion::Rise, false),
            "card reveal reveal-rise"
        );
        assert_eq!(
            reveal_class("card", Motion::Rise, true),
            "card reveal reveal-rise is-visible"
        );
        assert_eq!(reveal_class("", Motion::Fade, true), "reveal reveal-fade is-visible");
    }

    #[test]
    fn test_motion_default_is_rise() {
        assert_eq!(Motion::default(), Motion::Rise);
    }

    #[test]
    fn test_reveal_attrs_follow_section_config() {
        assert_eq!(threshold_attr(SectionId::Studio), "0.2");
        assert_eq!(margin_attr(SectionId::Testimonials), "0px 0px -100px 0px");
        assert_eq!(threshold_attr(SectionId::Home), "");
    }
}
