//! Entrance and pointer animation model for list items.
//!
//! The browser does the actual tweening: the page ships CSS transitions and a
//! small observer script. This module owns the rules those assets follow, so
//! the state machine and the stagger timing can be reasoned about and tested
//! without a browser.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// What starts an item's entrance transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RevealTrigger {
    /// First intersection with the viewport.
    #[default]
    InView,
    /// Page load, regardless of scroll position.
    Mount,
}

impl RevealTrigger {
    pub fn as_attr(self) -> &'static str {
        match self {
            RevealTrigger::InView => "in-view",
            RevealTrigger::Mount => "mount",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

impl Visibility {
    /// Value of the `data-state` attribute the runtime flips.
    pub fn as_attr(self) -> &'static str {
        match self {
            Visibility::Hidden => "hidden",
            Visibility::Visible => "visible",
        }
    }
}

/// Per-item transient state. One instance per rendered item, never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationState {
    visibility: Visibility,
    hovered: bool,
    pressed: bool,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationState {
    pub fn new() -> Self {
        Self {
            visibility: Visibility::Hidden,
            hovered: false,
            pressed: false,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    /// Returns true only for the call that performed Hidden -> Visible.
    pub fn reveal(&mut self) -> bool {
        match self.visibility {
            Visibility::Hidden => {
                self.visibility = Visibility::Visible;
                true
            }
            Visibility::Visible => false,
        }
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    pub fn pointer_down(&mut self) {
        self.pressed = true;
    }

    pub fn pointer_up(&mut self) {
        self.pressed = false;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Scale under the given spec. Press wins over hover.
    pub fn scale(&self, spec: &RevealSpec) -> f32 {
        match (self.pressed, self.hovered) {
            (true, _) => spec.press_scale.unwrap_or(1.0),
            (false, true) => spec.hover_scale.unwrap_or(1.0),
            (false, false) => 1.0,
        }
    }

    pub fn opacity(&self) -> f32 {
        match self.visibility {
            Visibility::Hidden => 0.0,
            Visibility::Visible => 1.0,
        }
    }
}

/// Entrance and pointer rules for every item of one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealSpec {
    /// Starting offset in px; the item slides to (0, 0).
    pub offset_x: i32,
    pub offset_y: i32,
    /// Added per index to the entrance start.
    pub stagger_ms: u32,
    pub duration_ms: u32,
    pub trigger: RevealTrigger,
    pub hover_scale: Option<f32>,
    pub press_scale: Option<f32>,
}

impl RevealSpec {
    pub fn skills() -> Self {
        Self {
            offset_x: 0,
            offset_y: 30,
            stagger_ms: 50,
            duration_ms: 400,
            trigger: RevealTrigger::InView,
            hover_scale: Some(1.05),
            press_scale: Some(0.95),
        }
    }

    pub fn cards() -> Self {
        Self {
            offset_x: 0,
            offset_y: 40,
            stagger_ms: 100,
            duration_ms: 500,
            trigger: RevealTrigger::InView,
            hover_scale: None,
            press_scale: None,
        }
    }

    /// Single block sliding in horizontally, used by the about section.
    pub fn slide(offset_x: i32) -> Self {
        Self {
            offset_x,
            offset_y: 0,
            stagger_ms: 0,
            duration_ms: 600,
            trigger: RevealTrigger::InView,
            hover_scale: None,
            press_scale: None,
        }
    }

    pub fn delay_for(&self, index: usize) -> Duration {
        let index = u64::try_from(index).unwrap_or(u64::MAX);
        Duration::from_millis(index.saturating_mul(u64::from(self.stagger_ms)))
    }

    pub fn is_interactive(&self) -> bool {
        self.hover_scale.is_some() || self.press_scale.is_some()
    }

    pub(crate) fn apply(&mut self, over: &RevealOverride) {
        if let Some(ms) = over.stagger_ms {
            self.stagger_ms = ms;
        }
        if let Some(ms) = over.duration_ms {
            self.duration_ms = ms;
        }
        if let Some(trigger) = over.trigger {
            self.trigger = trigger;
        }
    }
}

/// Optional per-section tweaks read from the content file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stagger_ms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<RevealTrigger>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSettings {
    pub skills: RevealSpec,
    pub experience: RevealSpec,
    pub projects: RevealSpec,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            skills: RevealSpec::skills(),
            experience: RevealSpec::cards(),
            projects: RevealSpec::cards(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationOverrides {
    #[serde(default)]
    pub skills: RevealOverride,
    #[serde(default)]
    pub experience: RevealOverride,
    #[serde(default)]
    pub projects: RevealOverride,
}

impl AnimationOverrides {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl AnimationSettings {
    pub fn with_overrides(overrides: &AnimationOverrides) -> Self {
        let mut settings = Self::default();
        settings.skills.apply(&overrides.skills);
        settings.experience.apply(&overrides.experience);
        settings.projects.apply(&overrides.projects);
        settings
    }
}

/// Values the page ships for one item, read off `AnimationState`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemFrames {
    pub initial: Visibility,
    pub hidden_opacity: f32,
    pub visible_opacity: f32,
    pub hover_scale: f32,
    /// Pressed while hovered, the only way a pointer press happens.
    pub press_scale: f32,
}

impl ItemFrames {
    pub fn from_model(spec: &RevealSpec) -> Self {
        let initial = AnimationState::new();

        let mut revealed = initial.clone();
        revealed.reveal();

        let mut hovered = initial.clone();
        hovered.pointer_enter();

        let mut pressed = hovered.clone();
        pressed.pointer_down();

        Self {
            initial: initial.visibility(),
            hidden_opacity: initial.opacity(),
            visible_opacity: revealed.opacity(),
            hover_scale: hovered.scale(spec),
            press_scale: pressed.scale(spec),
        }
    }
}

/// Inline custom properties consumed by the stylesheet.
pub struct RevealStyle<'a> {
    pub spec: &'a RevealSpec,
    pub index: usize,
}

impl fmt::Display for RevealStyle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frames = ItemFrames::from_model(self.spec);
        write!(
            f,
            "--reveal-delay:{}ms;--reveal-duration:{}ms;--reveal-x:{}px;--reveal-y:{}px;\
             --hidden-opacity:{};--visible-opacity:{};--hover-scale:{};--press-scale:{}",
            self.spec.delay_for(self.index).as_millis(),
            self.spec.duration_ms,
            self.spec.offset_x,
            self.spec.offset_y,
            frames.hidden_opacity,
            frames.visible_opacity,
            frames.hover_scale,
            frames.press_scale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_happens_once() {
        let mut state = AnimationState::new();
        assert_eq!(state.visibility(), Visibility::Hidden);
        assert_eq!(state.opacity(), 0.0);

        assert!(state.reveal());
        assert!(state.is_visible());
        assert!(!state.reveal());
        assert!(!state.reveal());
        assert_eq!(state.visibility(), Visibility::Visible);
    }

    #[test]
    fn test_never_intersected_stays_hidden() {
        let mut state = AnimationState::new();
        state.pointer_enter();
        state.pointer_down();
        state.pointer_up();
        state.pointer_leave();
        assert_eq!(state.visibility(), Visibility::Hidden);
    }

    #[test]
    fn test_hover_is_reversible() {
        let spec = RevealSpec::skills();
        let mut state = AnimationState::new();
        state.reveal();
        let before = state.scale(&spec);

        state.pointer_enter();
        assert_eq!(state.scale(&spec), 1.05);
        state.pointer_enter();
        assert_eq!(state.scale(&spec), 1.05);
        state.pointer_leave();
        assert_eq!(state.scale(&spec), before);
        assert!(state.is_visible());
    }

    #[test]
    fn test_press_overrides_hover() {
        let spec = RevealSpec::skills();
        let mut state = AnimationState::new();
        state.pointer_enter();
        state.pointer_down();
        assert_eq!(state.scale(&spec), 0.95);
        state.pointer_up();
        assert_eq!(state.scale(&spec), 1.05);
        state.pointer_leave();
        assert_eq!(state.scale(&spec), 1.0);
    }

    #[test]
    fn test_cards_do_not_scale() {
        let spec = RevealSpec::cards();
        let mut state = AnimationState::new();
        state.pointer_enter();
        state.pointer_down();
        assert_eq!(state.scale(&spec), 1.0);
        assert!(!spec.is_interactive());
    }

    #[test]
    fn test_stagger_is_monotonic() {
        let spec = RevealSpec::cards();
        let delays: Vec<Duration> = (0..20).map(|i| spec.delay_for(i)).collect();
        assert_eq!(delays[0], Duration::ZERO);
        assert_eq!(delays[2], Duration::from_millis(200));
        assert!(delays.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_stagger_saturates() {
        let spec = RevealSpec::skills();
        assert!(spec.delay_for(usize::MAX) >= spec.delay_for(usize::MAX - 1));
    }

    #[test]
    fn test_overrides_only_touch_named_fields() {
        let overrides = AnimationOverrides {
            skills: RevealOverride {
                stagger_ms: Some(80),
                trigger: Some(RevealTrigger::Mount),
                ..Default::default()
            },
            ..Default::default()
        };
        let settings = AnimationSettings::with_overrides(&overrides);
        assert_eq!(settings.skills.stagger_ms, 80);
        assert_eq!(settings.skills.trigger, RevealTrigger::Mount);
        assert_eq!(settings.skills.offset_y, 30);
        assert_eq!(settings.experience, RevealSpec::cards());
    }

    #[test]
    fn test_reveal_style() {
        let spec = RevealSpec::skills();
        let style = RevealStyle { spec: &spec, index: 3 }.to_string();
        assert!(style.starts_with("--reveal-delay:150ms;"));
        assert!(style.contains("--reveal-y:30px"));
        assert!(style.contains("--hover-scale:1.05"));
        assert!(style.contains("--press-scale:0.95"));
        assert!(style.contains("--hidden-opacity:0;--visible-opacity:1;"));
    }

    #[test]
    fn test_frames_follow_state_machine() {
        let frames = ItemFrames::from_model(&RevealSpec::skills());
        assert_eq!(frames.initial, Visibility::Hidden);
        assert_eq!(frames.hidden_opacity, 0.0);
        assert_eq!(frames.visible_opacity, 1.0);
        assert_eq!(frames.hover_scale, 1.05);
        assert_eq!(frames.press_scale, 0.95);

        let cards = ItemFrames::from_model(&RevealSpec::cards());
        assert_eq!(cards.hover_scale, 1.0);
        assert_eq!(cards.press_scale, 1.0);
    }
}
