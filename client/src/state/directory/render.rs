//! Pure projection of controller state into a render model.
//!
//! The DOM applier compares successive models and only touches the page
//! when the model changed, so resize ticks that leave the mode alone never
//! cause flicker.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use super::controller::{Filter, Mode, SortMode, ViewModeController};
use super::entry::{Category, EntryId};
use crate::util::i18n::Translations;

/// Per-card stagger when cards (re)appear in the flat grid.
pub const STAGGER_STEP_MS: u32 = 50;
/// Length of the filter fade-out; hidden cards leave the flow after it.
pub const FILTER_FADE_MS: u32 = 300;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub id: EntryId,
    pub visible: bool,
    /// Entrance animation delay; zero for hidden cards.
    pub stagger_delay_ms: u32,
    /// Delay before a hidden card is taken out of the flow; `None` while
    /// visible.
    pub collapse_after_ms: Option<u32>,
    pub copied: bool,
    pub copy_failed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupView {
    pub category: Category,
    pub title: String,
    pub title_key: &'static str,
    pub icon: &'static str,
    pub count: usize,
    pub expanded: bool,
    pub cards: Vec<CardView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderModel {
    Flat { layout: SortMode, filter: Filter, cards: Vec<CardView> },
    Grouped { groups: Vec<GroupView> },
}

impl RenderModel {
    #[must_use]
    pub fn mode(&self) -> Mode {
        match self {
            Self::Flat { .. } => Mode::Flat,
            Self::Grouped { .. } => Mode::Grouped,
        }
    }
}

impl ViewModeController {
    /// Project the current state at `now_ms` (used for copy acknowledgements).
    #[must_use]
    pub fn project(&self, translations: &Translations, now_ms: f64) -> RenderModel {
        let state = self.state();
        match (state.mode, self.index()) {
            (Mode::Grouped, Some(index)) => {
                let groups = index
                    .groups()
                    .iter()
                    .filter_map(|group| {
                        let descriptor = self
                            .categories()
                            .iter()
                            .find(|d| d.category == group.category)?;
                        let cards = group
                            .entries
                            .iter()
                            .map(|id| CardView {
                                id: id.clone(),
                                visible: true,
                                stagger_delay_ms: 0,
                                collapse_after_ms: None,
                                copied: self.is_copied(id, now_ms),
                                copy_failed: self.is_copy_failed(id, now_ms),
                            })
                            .collect::<Vec<_>>();
                        Some(GroupView {
                            category: group.category,
                            title: translations.or(descriptor.name_key, descriptor.fallback_name),
                            title_key: descriptor.name_key,
                            icon: descriptor.icon,
                            count: cards.len(),
                            expanded: self.is_expanded(group.category),
                            cards,
                        })
                    })
                    .collect();
                RenderModel::Grouped { groups }
            }
            _ => {
                let cards = self
                    .store()
                    .all()
                    .iter()
                    .enumerate()
                    .map(|(position, entry)| {
                        let visible = self.is_visible(entry);
                        let position = u32::try_from(position).unwrap_or(u32::MAX);
                        CardView {
                            id: entry.id.clone(),
                            visible,
                            stagger_delay_ms: if visible { position.saturating_mul(STAGGER_STEP_MS) } else { 0 },
                            collapse_after_ms: (!visible).then_some(FILTER_FADE_MS),
                            copied: self.is_copied(&entry.id, now_ms),
                            copy_failed: self.is_copy_failed(&entry.id, now_ms),
                        }
                    })
                    .collect();
                RenderModel::Flat { layout: state.sort_mode, filter: state.active_filter, cards }
            }
        }
    }
}
