//! Happiness Meter Component
//!
//! Progress bar for the happiness level, with a mood label.

use dioxus::prelude::*;

/// Coarse mood shown next to the meter
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mood {
    Grumpy,
    Content,
    Happy,
    Purring,
}

impl Mood {
    pub fn from_level(level: u8) -> Self {
        match level {
            0..=24 => Mood::Grumpy,
            25..=59 => Mood::Content,
            60..=99 => Mood::Happy,
            _ => Mood::Purring,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Grumpy => "grumpy",
            Mood::Content => "content",
            Mood::Happy => "happy",
            Mood::Purring => "purring",
        }
    }
}

/// Properties for the HappinessMeter component
#[derive(Clone, PartialEq, Props)]
pub struct HappinessMeterProps {
    /// Happiness in `0..=100`
    pub level: u8,
}

#[component]
pub fn HappinessMeter(props: HappinessMeterProps) -> Element {
    let level = props.level.min(100);
    let mood = Mood::from_level(level);

    rsx! {
        div { class: "happiness-meter",
            div { class: "happiness-header",
                span { class: "happiness-title", "Cat happiness" }
                span { class: "happiness-mood mood-{mood.label()}", "{mood.label()} \u{00B7} {level}%" }
            }
            div {
                class: "happiness-track",
                role: "progressbar",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                "aria-valuenow": "{level}",
                div { class: "happiness-fill", style: "width: {level}%;" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_bands() {
        assert_eq!(Mood::from_level(0), Mood::Grumpy);
        assert_eq!(Mood::from_level(50), Mood::Content);
        assert_eq!(Mood::from_level(60), Mood::Happy);
        assert_eq!(Mood::from_level(100), Mood::Purring);
    }

    #[test]
    fn mood_labels() {
        assert_eq!(Mood::Grumpy.label(), "grumpy");
        assert_eq!(Mood::Purring.label(), "purring");
    }
}
