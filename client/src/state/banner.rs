//! Rotating quote banner and the daily wellness tip.
//!
//! DESIGN
//! ======
//! [`QuoteRotation`] decides *what* is shown and whether auto-rotation should
//! be running; the component owns the actual interval and timeout handles
//! and asks this type after every event. Reduced motion disables automatic
//! rotation entirely but leaves manual navigation working.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use crate::error::ValidationError;
use crate::util::i18n::{FallbackTable, Translations};

/// Auto-rotation period.
pub const ROTATE_INTERVAL_MS: u32 = 12_000;
/// Delay before auto-rotation resumes after manual navigation.
pub const RESUME_AFTER_MS: u32 = 5_000;
/// Fade-out duration before the text swaps.
pub const FADE_MS: u32 = 500;

// =============================================================================
// QUOTES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quote {
    pub text_key: &'static str,
    pub author_key: &'static str,
}

pub const QUOTES: [Quote; 7] = [
    Quote { text_key: "quote_1_text", author_key: "quote_1_author" },
    Quote { text_key: "quote_2_text", author_key: "quote_2_author" },
    Quote { text_key: "quote_3_text", author_key: "quote_3_author" },
    Quote { text_key: "quote_4_text", author_key: "quote_4_author" },
    Quote { text_key: "quote_5_text", author_key: "quote_5_author" },
    Quote { text_key: "quote_6_text", author_key: "quote_6_author" },
    Quote { text_key: "quote_7_text", author_key: "quote_7_author" },
];

pub const QUOTE_FALLBACKS: FallbackTable = &[
    (
        "quote_1_text",
        "You don't have to control your thoughts. You just have to stop letting them control you.",
    ),
    ("quote_1_author", "Dan Millman"),
    (
        "quote_2_text",
        "Mental health is not a destination, but a process. It's about how you drive, not where you're going.",
    ),
    ("quote_2_author", "Noam Shpancer"),
    ("quote_3_text", "There is hope, even when your brain tells you there isn't."),
    ("quote_3_author", "John Green"),
    ("quote_4_text", "Self-care is how you take your power back."),
    ("quote_4_author", "Lalah Delia"),
    (
        "quote_5_text",
        "You are not your illness. You have an individual story to tell. You have a name, a history, a personality.",
    ),
    ("quote_5_author", "Julian Seifter"),
    ("quote_6_text", "Healing takes time, and asking for help is a courageous step."),
    ("quote_6_author", "Mariska Hargitay"),
    ("quote_7_text", "Be patient with yourself. Self-growth is tender; it's holy ground."),
    ("quote_7_author", "Stephen Covey"),
];

/// Resolved, display-ready quote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuoteView {
    pub index: usize,
    pub text: String,
    /// Already prefixed with an em dash.
    pub author: String,
}

#[must_use]
pub fn quote_view(index: usize, translations: &Translations) -> QuoteView {
    let quote = QUOTES[index % QUOTES.len()];
    QuoteView {
        index: index % QUOTES.len(),
        text: translations.t(quote.text_key, &[QUOTE_FALLBACKS]),
        author: format!("— {}", translations.t(quote.author_key, &[QUOTE_FALLBACKS])),
    }
}

#[must_use]
pub fn dot_label(index: usize) -> String {
    format!("Quote {} of {}", index + 1, QUOTES.len())
}

// =============================================================================
// ROTATION STATE
// =============================================================================

/// What the component must do with its timers after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationCommand {
    /// Leave timers as they are.
    Keep,
    /// Start (or restart) the rotation interval.
    Start,
    /// Stop the rotation interval.
    Stop,
    /// Stop now and start again after [`RESUME_AFTER_MS`].
    StopThenResume,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuoteRotation {
    current: usize,
    rotating: bool,
    reduced_motion: bool,
    hovered: bool,
    focused: bool,
}

impl QuoteRotation {
    /// Start at the first quote; rotation starts unless motion is reduced.
    #[must_use]
    pub fn new(reduced_motion: bool) -> (Self, RotationCommand) {
        let rotation = Self { current: 0, rotating: !reduced_motion, reduced_motion, hovered: false, focused: false };
        let command = if reduced_motion { RotationCommand::Keep } else { RotationCommand::Start };
        (rotation, command)
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Interval tick: advance, wrapping after the last quote.
    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % QUOTES.len();
        self.current
    }

    /// Manual navigation from a dot.
    ///
    /// # Errors
    ///
    /// [`ValidationError::QuoteOutOfRange`] if `index` has no quote.
    pub fn go_to(&mut self, index: usize) -> Result<RotationCommand, ValidationError> {
        if index >= QUOTES.len() {
            return Err(ValidationError::QuoteOutOfRange { index, len: QUOTES.len() });
        }
        self.current = index;
        self.rotating = false;
        if self.reduced_motion {
            Ok(RotationCommand::Stop)
        } else {
            Ok(RotationCommand::StopThenResume)
        }
    }

    /// The delayed resume after manual navigation fired.
    pub fn resume(&mut self) -> RotationCommand {
        self.start_unless_paused()
    }

    pub fn pointer_enter(&mut self) -> RotationCommand {
        self.hovered = true;
        self.stop()
    }

    pub fn pointer_leave(&mut self) -> RotationCommand {
        self.hovered = false;
        self.start_unless_paused()
    }

    pub fn focus_in(&mut self) -> RotationCommand {
        self.focused = true;
        self.stop()
    }

    /// Focus moved; `still_inside` is true when it moved to another element
    /// of the banner.
    pub fn focus_out(&mut self, still_inside: bool) -> RotationCommand {
        if still_inside {
            return RotationCommand::Keep;
        }
        self.focused = false;
        self.start_unless_paused()
    }

    fn stop(&mut self) -> RotationCommand {
        self.rotating = false;
        RotationCommand::Stop
    }

    fn start_unless_paused(&mut self) -> RotationCommand {
        if self.reduced_motion || self.hovered || self.focused {
            return RotationCommand::Keep;
        }
        self.rotating = true;
        RotationCommand::Start
    }
}

// =============================================================================
// WELLNESS TIP
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WellnessTip {
    pub title_key: &'static str,
    pub text_key: &'static str,
    pub icon: &'static str,
    pub link: &'static str,
}

/// Indexed by weekday, Sunday first.
pub const WELLNESS_TIPS: [WellnessTip; 7] = [
    WellnessTip { title_key: "tip_sunday_title", text_key: "tip_sunday_text", icon: "🌅", link: "/articles/mindfulness.html" },
    WellnessTip { title_key: "tip_monday_title", text_key: "tip_monday_text", icon: "🎯", link: "/support/" },
    WellnessTip { title_key: "tip_tuesday_title", text_key: "tip_tuesday_text", icon: "💬", link: "/community/" },
    WellnessTip { title_key: "tip_wednesday_title", text_key: "tip_wednesday_text", icon: "🌿", link: "/articles/stress.html" },
    WellnessTip { title_key: "tip_thursday_title", text_key: "tip_thursday_text", icon: "📝", link: "/support/#tools" },
    WellnessTip { title_key: "tip_friday_title", text_key: "tip_friday_text", icon: "🎉", link: "/resourcelib/" },
    WellnessTip { title_key: "tip_saturday_title", text_key: "tip_saturday_text", icon: "💤", link: "/articles/sleep.html" },
];

pub const TIP_FALLBACKS: FallbackTable = &[
    ("tip_sunday_title", "Start Fresh"),
    (
        "tip_sunday_text",
        "Begin your week with intention. Take 5 minutes to set a simple wellness goal for the week ahead.",
    ),
    ("tip_monday_title", "Mindful Monday"),
    (
        "tip_monday_text",
        "Try a 2-minute breathing exercise before starting work. Inhale for 4 counts, hold for 4, exhale for 6.",
    ),
    ("tip_tuesday_title", "Connect Today"),
    (
        "tip_tuesday_text",
        "Reach out to someone you care about. A simple message can strengthen bonds and boost mood.",
    ),
    ("tip_wednesday_title", "Midweek Reset"),
    (
        "tip_wednesday_text",
        "Take a short walk outside if possible. Even 10 minutes of movement can reduce stress significantly.",
    ),
    ("tip_thursday_title", "Gratitude Practice"),
    (
        "tip_thursday_text",
        "Write down three things you're grateful for today. This simple habit rewires your brain for positivity.",
    ),
    ("tip_friday_title", "Celebrate Wins"),
    (
        "tip_friday_text",
        "Acknowledge what you accomplished this week, no matter how small. Every step forward counts.",
    ),
    ("tip_saturday_title", "Rest & Recharge"),
    (
        "tip_saturday_text",
        "Give yourself permission to rest today. Quality sleep is essential for mental wellness.",
    ),
    ("tip_day_label", "Today's Wellness Tip"),
];

const WEEKDAYS: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TipView {
    pub title: String,
    pub text: String,
    pub icon: &'static str,
    pub link: &'static str,
    pub day_label: String,
}

/// Tip for `weekday` (0 = Sunday; values wrap).
#[must_use]
pub fn tip_for_weekday(weekday: u32, translations: &Translations) -> TipView {
    let day = weekday as usize % WELLNESS_TIPS.len();
    let tip = WELLNESS_TIPS[day];
    TipView {
        title: translations.t(tip.title_key, &[TIP_FALLBACKS]),
        text: translations.t(tip.text_key, &[TIP_FALLBACKS]),
        icon: tip.icon,
        link: tip.link,
        day_label: format!("{}'s wellness focus", WEEKDAYS[day]),
    }
}
