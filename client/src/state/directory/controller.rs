//! Responsive view-mode controller for the helpline directory.
//!
//! DESIGN
//! ======
//! Two presentation modes: `Flat` (one filterable grid or list) and
//! `Grouped` (collapsible per-category sections, used on narrow viewports).
//! The mode is a pure function of viewport width against the breakpoint.
//! Transitions rebuild only when the mode actually changes, so the resize
//! handler can call [`ViewModeController::on_viewport_change`] on every
//! debounced tick.
//!
//! The filter and sort mode survive a round trip through grouped mode
//! untouched, and expanded sections survive a round trip through flat mode.
//! Rendering is a separate projection (see `render`), which keeps this type
//! testable without a DOM.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::collections::BTreeSet;
use std::future::Future;
use std::rc::Rc;
use std::str::FromStr;

use super::entry::{Category, CategoryDescriptor, DEFAULT_CATEGORIES, Entry, EntryId};
use super::index::CategoryIndex;
use super::store::CardStore;
use crate::error::{DirectoryError, ValidationError};
use crate::util::clipboard::{Clipboard, copy_with_fallback};
use crate::util::prefs::{PreferenceStore, VIEW_MODE_KEY};
use crate::util::transient::TransientSet;

/// Widths at or below this are grouped.
pub const DEFAULT_BREAKPOINT: u32 = 768;
/// Minimum resize quiescence before the mode is re-evaluated.
pub const RESIZE_DEBOUNCE_MS: u32 = 150;
/// How long a "copied" or "copy failed" acknowledgement stays visible.
pub const COPY_ACK_MS: u32 = 2000;

// =============================================================================
// VIEW STATE
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Flat,
    Grouped,
}

impl Mode {
    #[must_use]
    pub fn for_width(width: u32, breakpoint: u32) -> Self {
        if width <= breakpoint { Self::Grouped } else { Self::Flat }
    }
}

/// Flat-mode category filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    #[must_use]
    pub fn admits(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => c == category,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(c) => c.as_str(),
        }
    }
}

impl FromStr for Filter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        Category::parse(s)
            .map(Self::Only)
            .ok_or_else(|| ValidationError::InvalidFilter(s.to_owned()))
    }
}

/// Card layout; persisted under [`VIEW_MODE_KEY`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMode {
    #[default]
    Grid,
    List,
}

impl SortMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

impl FromStr for SortMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(Self::Grid),
            "list" => Ok(Self::List),
            other => Err(ValidationError::InvalidSortMode(other.to_owned())),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub mode: Mode,
    pub active_filter: Filter,
    pub sort_mode: SortMode,
    pub expanded_categories: BTreeSet<Category>,
}

/// Outcome of a viewport evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    EnteredGrouped,
    RestoredFlat,
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// Construction knobs; [`Default`] gives the production values.
#[derive(Clone, Debug)]
pub struct ControllerOptions {
    pub breakpoint: u32,
    pub categories: Vec<CategoryDescriptor>,
    pub priority: Category,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self { breakpoint: DEFAULT_BREAKPOINT, categories: DEFAULT_CATEGORIES.to_vec(), priority: Category::PRIORITY }
    }
}

/// Owns one directory widget's entries, grouping and view state.
pub struct ViewModeController {
    store: CardStore,
    categories: Vec<CategoryDescriptor>,
    index: Option<CategoryIndex>,
    state: ViewState,
    breakpoint: u32,
    priority: Category,
    priority_seeded: bool,
    rebuilds: u64,
    copied: TransientSet<EntryId>,
    copy_failed: TransientSet<EntryId>,
    prefs: Rc<dyn PreferenceStore>,
}

impl ViewModeController {
    /// Build a controller with the default breakpoint and categories.
    ///
    /// # Errors
    ///
    /// Propagates [`CardStore::load`] validation failures.
    pub fn new(entries: Vec<Entry>, width: u32, prefs: Rc<dyn PreferenceStore>) -> Result<Self, ValidationError> {
        Self::with_options(entries, width, prefs, ControllerOptions::default())
    }

    /// Build a controller; the initial mode comes from `width` and the
    /// sort mode from the stored preference.
    ///
    /// # Errors
    ///
    /// Propagates [`CardStore::load`] validation failures.
    pub fn with_options(
        entries: Vec<Entry>,
        width: u32,
        prefs: Rc<dyn PreferenceStore>,
        options: ControllerOptions,
    ) -> Result<Self, ValidationError> {
        let mut store = CardStore::new();
        store.load(entries)?;

        let sort_mode = prefs
            .get(VIEW_MODE_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();

        let mut controller = Self {
            store,
            categories: options.categories,
            index: None,
            state: ViewState { sort_mode, ..ViewState::default() },
            breakpoint: options.breakpoint,
            priority: options.priority,
            priority_seeded: false,
            rebuilds: 0,
            copied: TransientSet::default(),
            copy_failed: TransientSet::default(),
            prefs,
        };
        if Mode::for_width(width, controller.breakpoint) == Mode::Grouped {
            controller.enter_grouped();
        }
        Ok(controller)
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    #[must_use]
    pub fn store(&self) -> &CardStore {
        &self.store
    }

    #[must_use]
    pub fn categories(&self) -> &[CategoryDescriptor] {
        &self.categories
    }

    /// Current grouping; `None` in flat mode.
    #[must_use]
    pub fn index(&self) -> Option<&CategoryIndex> {
        self.index.as_ref()
    }

    #[must_use]
    pub fn breakpoint(&self) -> u32 {
        self.breakpoint
    }

    /// Number of mode transitions performed, including the initial one.
    #[must_use]
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// Re-evaluate the mode for `width`. No-op when the mode is unchanged.
    pub fn on_viewport_change(&mut self, width: u32) -> Transition {
        match (self.state.mode, Mode::for_width(width, self.breakpoint)) {
            (Mode::Flat, Mode::Grouped) => {
                self.enter_grouped();
                Transition::EnteredGrouped
            }
            (Mode::Grouped, Mode::Flat) => {
                self.restore_flat();
                Transition::RestoredFlat
            }
            _ => Transition::Unchanged,
        }
    }

    fn enter_grouped(&mut self) {
        self.index = Some(CategoryIndex::build(self.store.all(), &self.categories));
        if !self.priority_seeded {
            self.state.expanded_categories.insert(self.priority);
            self.priority_seeded = true;
        }
        self.state.mode = Mode::Grouped;
        self.rebuilds += 1;
        log::debug!("directory grouped into {} sections", self.index.as_ref().map_or(0, CategoryIndex::len));
    }

    fn restore_flat(&mut self) {
        self.index = None;
        self.state.mode = Mode::Flat;
        self.rebuilds += 1;
        log::debug!("directory restored to flat view");
    }

    /// Set the flat-mode filter. Silently ignored in grouped mode, which
    /// always shows every category.
    pub fn set_filter(&mut self, filter: Filter) {
        if self.state.mode == Mode::Flat {
            self.state.active_filter = filter;
        }
    }

    /// Parse and apply a `data-filter` value.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidFilter`] for anything but `all` or a known
    /// category; state is left unchanged.
    pub fn set_filter_tag(&mut self, tag: &str) -> Result<(), ValidationError> {
        let filter = tag.parse()?;
        self.set_filter(filter);
        Ok(())
    }

    /// Change and persist the layout. Never changes the mode.
    pub fn set_sort_mode(&mut self, sort_mode: SortMode) {
        self.state.sort_mode = sort_mode;
        self.prefs.set(VIEW_MODE_KEY, sort_mode.as_str());
    }

    /// Flip a section open or closed. Returns the new expansion state, or
    /// `None` outside grouped mode.
    pub fn toggle_category_expansion(&mut self, category: Category) -> Option<bool> {
        if self.state.mode != Mode::Grouped {
            return None;
        }
        let expanded = &mut self.state.expanded_categories;
        if expanded.remove(&category) {
            Some(false)
        } else {
            expanded.insert(category);
            Some(true)
        }
    }

    #[must_use]
    pub fn is_expanded(&self, category: Category) -> bool {
        self.state.expanded_categories.contains(&category)
    }

    /// Whether the entry is shown. Grouped mode shows everything.
    #[must_use]
    pub fn is_visible(&self, entry: &Entry) -> bool {
        match self.state.mode {
            Mode::Grouped => true,
            Mode::Flat => self.state.active_filter.admits(entry.resolved_category()),
        }
    }

    /// Visible entry ids in canonical order.
    #[must_use]
    pub fn visible_ids(&self) -> Vec<&EntryId> {
        self.store
            .all()
            .iter()
            .filter(|e| self.is_visible(e))
            .map(|e| &e.id)
            .collect()
    }

    /// Resolve a payload field for copying.
    ///
    /// # Errors
    ///
    /// [`ValidationError::UnknownId`] or [`ValidationError::UnknownField`].
    pub fn entry_field(&self, id: &EntryId, field: &str) -> Result<&str, ValidationError> {
        let entry = self
            .store
            .get(id)
            .ok_or_else(|| ValidationError::UnknownId(id.to_string()))?;
        entry.field(field).ok_or_else(|| ValidationError::UnknownField {
            id: id.to_string(),
            field: field.to_owned(),
        })
    }

    /// Copy an entry field to the clipboard, falling back to the secondary
    /// mechanism. Lookup happens before the returned future is polled, so an
    /// unknown id never touches the clipboard and the future does not borrow
    /// the controller.
    pub fn copy_entry_field<C: Clipboard>(
        &self,
        id: &EntryId,
        field: &str,
        clipboard: C,
    ) -> impl Future<Output = Result<String, DirectoryError>> + use<C> {
        let lookup = self.entry_field(id, field).map(str::to_owned);
        async move {
            let text = lookup?;
            copy_with_fallback(&clipboard, &text).await?;
            Ok::<String, DirectoryError>(text)
        }
    }

    /// Record a successful copy; the acknowledgement reverts after
    /// [`COPY_ACK_MS`].
    pub fn mark_copied(&mut self, id: &EntryId, now_ms: f64) {
        self.copied.prune(now_ms);
        self.copy_failed.clear(id);
        self.copied.show(id.clone(), now_ms, f64::from(COPY_ACK_MS));
    }

    /// Record a failed copy; shown for the same window as a success and
    /// replacing any success still showing for `id`.
    pub fn mark_copy_failed(&mut self, id: &EntryId, now_ms: f64) {
        self.copy_failed.prune(now_ms);
        self.copied.clear(id);
        self.copy_failed.show(id.clone(), now_ms, f64::from(COPY_ACK_MS));
    }

    #[must_use]
    pub fn is_copied(&self, id: &EntryId, now_ms: f64) -> bool {
        self.copied.is_active(id, now_ms)
    }

    #[must_use]
    pub fn is_copy_failed(&self, id: &EntryId, now_ms: f64) -> bool {
        self.copy_failed.is_active(id, now_ms)
    }
}
