//! Entrance and exit animation timelines as data.
//!
//! Each [`AnimationSpec`] describes one visual property tweening from an
//! initial to a final value. The shell turns a spec into inline CSS custom
//! properties read by a matching `@keyframes` rule; nothing here depends on
//! an animation engine.

use crate::tabs::TabId;

/// What starts the animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Once, when the view first mounts
    Mount,
    /// Every time a panel becomes active
    PanelEnter(TabId),
    /// When the paw icon becomes visible
    PawShow,
    /// When the paw icon is hidden again
    PawHide,
}

impl Trigger {
    /// Exit triggers fade out instead of in
    pub fn is_exit(&self) -> bool {
        matches!(self, Trigger::PawHide)
    }
}

/// The property being tweened. Every entrance also fades opacity 0 -> 1 and
/// every exit fades 1 -> 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualProperty {
    Opacity,
    TranslateX,
    TranslateY,
    Scale,
}

impl VisualProperty {
    pub const ALL: [VisualProperty; 4] = [
        VisualProperty::Opacity,
        VisualProperty::TranslateX,
        VisualProperty::TranslateY,
        VisualProperty::Scale,
    ];

    /// Name of the `@keyframes` rule that brings this property in
    pub fn keyframes(&self) -> &'static str {
        match self {
            VisualProperty::Opacity => "enter-fade",
            VisualProperty::TranslateX => "enter-slide-x",
            VisualProperty::TranslateY => "enter-slide-y",
            VisualProperty::Scale => "enter-scale",
        }
    }

    /// Name of the `@keyframes` rule that takes this property out
    pub fn exit_keyframes(&self) -> &'static str {
        match self {
            VisualProperty::Opacity => "exit-fade",
            VisualProperty::TranslateX => "exit-slide-x",
            VisualProperty::TranslateY => "exit-slide-y",
            VisualProperty::Scale => "exit-scale",
        }
    }

    fn unit(&self) -> &'static str {
        match self {
            VisualProperty::TranslateX | VisualProperty::TranslateY => "px",
            VisualProperty::Opacity | VisualProperty::Scale => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub trigger: Trigger,
    pub property: VisualProperty,
    pub from: f32,
    pub to: f32,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

/// Default tween length for list items
const ITEM_DURATION_MS: u32 = 300;

impl AnimationSpec {
    pub fn hero_title() -> Self {
        Self {
            trigger: Trigger::Mount,
            property: VisualProperty::TranslateY,
            from: -50.0,
            to: 0.0,
            duration_ms: 1000,
            delay_ms: 0,
        }
    }

    pub fn hero_subtitle() -> Self {
        Self {
            trigger: Trigger::Mount,
            property: VisualProperty::Opacity,
            from: 0.0,
            to: 1.0,
            duration_ms: 1000,
            delay_ms: 500,
        }
    }

    pub fn hero_badge() -> Self {
        Self {
            trigger: Trigger::Mount,
            property: VisualProperty::Scale,
            from: 0.8,
            to: 1.0,
            duration_ms: 600,
            delay_ms: 1000,
        }
    }

    pub fn paw_show() -> Self {
        Self {
            trigger: Trigger::PawShow,
            property: VisualProperty::TranslateX,
            from: -100.0,
            to: 0.0,
            duration_ms: 500,
            delay_ms: 0,
        }
    }

    pub fn paw_hide() -> Self {
        Self {
            trigger: Trigger::PawHide,
            property: VisualProperty::TranslateX,
            from: 0.0,
            to: 100.0,
            duration_ms: 500,
            delay_ms: 0,
        }
    }

    /// Entrance for item `index` of a panel list, staggered by index.
    pub fn panel_item(tab: TabId, index: usize) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        let (property, from, to, stagger_ms) = match tab {
            TabId::Characteristics => (VisualProperty::TranslateX, -50.0, 0.0, 100),
            TabId::Breeds => (VisualProperty::Scale, 0.8, 1.0, 100),
            TabId::FunFacts => (VisualProperty::TranslateY, 20.0, 0.0, 200),
        };
        Self {
            trigger: Trigger::PanelEnter(tab),
            property,
            from,
            to,
            duration_ms: ITEM_DURATION_MS,
            delay_ms: index.saturating_mul(stagger_ms),
        }
    }

    pub fn keyframes(&self) -> &'static str {
        if self.trigger.is_exit() {
            self.property.exit_keyframes()
        } else {
            self.property.keyframes()
        }
    }

    /// Inline style driving the keyframes rule for this spec
    pub fn css(&self) -> String {
        let unit = self.property.unit();
        format!(
            "--anim-from: {}{unit}; --anim-to: {}{unit}; animation: {} {}ms ease-out {}ms both;",
            self.from,
            self.to,
            self.keyframes(),
            self.duration_ms,
            self.delay_ms
        )
    }
}
