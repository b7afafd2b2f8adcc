//! Support-page motion: reveal-on-scroll, card tilt, and button ripples.
//!
//! Everything here is arithmetic and lookup tables; the hydrate component
//! wires it to observers and pointer events. All effects switch off under
//! `prefers-reduced-motion`, where revealable sections are shown at once.

#[cfg(test)]
#[path = "support_test.rs"]
mod support_test;

/// Class added to a revealable element once it scrolls into view.
pub const VISIBLE_CLASS: &str = "is-visible";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -80px 0px";

/// Elements that start hidden and reveal on intersection.
pub const REVEAL_SELECTOR: &str =
    ".animate-section, .animate-stagger, .animate-slide-left, .animate-slide-right, .animate-scale";

/// `(selector, class)` assignments applied before observers attach. A
/// selector matching several elements tags all of them.
pub const ANIMATION_CLASSES: [(&str, &str); 9] = [
    (".crisis-cards", "animate-stagger"),
    (".crisis-banner", "animate-section"),
    (".quicklinks-grid", "animate-stagger"),
    (".helplines-grid", "animate-stagger"),
    (".selfhelp-cards", "animate-stagger"),
    (".faq-list", "animate-stagger"),
    (".section-header", "animate-section"),
    (".appointment-form", "animate-scale"),
    (".resources-grid", "animate-stagger"),
];

pub const TILT_SELECTOR: &str = ".crisis-card, .quicklink-card, .helpline-card, .selfhelp-card";
pub const TILT_TRANSITION: &str = "transform 0.3s ease, box-shadow 0.3s ease";
/// Pointer offset from centre is divided by this to get degrees.
pub const TILT_DIVISOR: f64 = 20.0;

pub const RIPPLE_SELECTOR: &str = ".crisis-btn, .helpline-contact";
pub const RIPPLE_CLASS: &str = "ripple-effect";
pub const RIPPLE_LIFETIME_MS: u32 = 600;

/// Pointer position relative to an element's bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalPoint {
    pub x: f64,
    pub y: f64,
}

impl LocalPoint {
    /// Translate client coordinates into the box whose top-left corner is
    /// at `(left, top)`.
    #[must_use]
    pub fn from_client(client_x: f64, client_y: f64, left: f64, top: f64) -> Self {
        Self { x: client_x - left, y: client_y - top }
    }
}

/// Tilt angles in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    #[must_use]
    pub fn at(point: LocalPoint, width: f64, height: f64) -> Self {
        Self {
            rotate_x: (point.y - height / 2.0) / TILT_DIVISOR,
            rotate_y: (width / 2.0 - point.x) / TILT_DIVISOR,
        }
    }

    /// CSS `transform` value for this tilt.
    #[must_use]
    pub fn transform(self) -> String {
        format!(
            "translateY(-8px) scale(1.02) perspective(1000px) rotateX({}deg) rotateY({}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// `left`/`top` style values for a ripple spawned at `point`.
#[must_use]
pub fn ripple_position(point: LocalPoint) -> (String, String) {
    (format!("{}px", point.x), format!("{}px", point.y))
}
