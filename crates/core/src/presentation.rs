//! Cosmetic timing configuration.
//!
//! Splash reveals and toast lifetimes never gate state; they are plain data
//! handed to templates and turned into CSS animation delays.

/// What a splash step reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEffect {
    /// App name and slogan fade in.
    Text,
    /// The "enter" button appears.
    EnterButton,
    /// A toast notice fades out.
    ToastDismiss,
}

impl RevealEffect {
    /// CSS hook for the revealed element.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Text => "reveal-text",
            Self::EnterButton => "reveal-button",
            Self::ToastDismiss => "toast-dismiss",
        }
    }
}

/// One entry of a reveal sequence: `effect` starts after `delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    pub delay_ms: u32,
    pub effect: RevealEffect,
}

impl RevealStep {
    /// Delay formatted for CSS, e.g. `2.5s`.
    #[must_use]
    pub fn delay_css(&self) -> String {
        let secs = self.delay_ms / 1000;
        let tenths = (self.delay_ms % 1000) / 100;
        if tenths == 0 {
            format!("{secs}s")
        } else {
            format!("{secs}.{tenths}s")
        }
    }
}

/// Splash screen order of reveals, earliest first.
pub const SPLASH_SEQUENCE: [RevealStep; 2] = [
    RevealStep {
        delay_ms: 2500,
        effect: RevealEffect::Text,
    },
    RevealStep {
        delay_ms: 4000,
        effect: RevealEffect::EnterButton,
    },
];

/// How long the "liked" confirmation notice stays visible.
pub const TOAST_DURATION_MS: u32 = 2000;

/// The toast lifetime as a step, rendered with the same delay helper.
#[must_use]
pub const fn toast_step() -> RevealStep {
    RevealStep {
        delay_ms: TOAST_DURATION_MS,
        effect: RevealEffect::ToastDismiss,
    }
}
