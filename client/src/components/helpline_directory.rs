//! Helpline directory: filter pills, grid/list toggle, copy buttons, and the
//! narrow-viewport grouped sections.
//!
//! DESIGN
//! ======
//! Cards are read from the page once and the original elements are moved
//! between the flat grid and the section containers, so listeners attached
//! at mount survive every transition. Each render projects the controller
//! into a [`RenderModel`] and compares it with the last one applied: an
//! identical model touches nothing, and section containers are rebuilt only
//! when the grouped structure itself changed.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::Element;

use super::TranslationHub;
use crate::state::directory::controller::{COPY_ACK_MS, RESIZE_DEBOUNCE_MS};
use crate::state::directory::render::{CardView, GroupView};
use crate::state::directory::{Category, Entry, EntryId, Filter, RenderModel, SortMode, ViewModeController};
use crate::util::clipboard::BrowserClipboard;
use crate::util::debounce::TimerSlot;
use crate::util::dom;
use crate::util::i18n::Translations;
use crate::util::prefs::PreferenceStore;

const GRID: &str = ".helplines-grid";
const CARD: &str = ".helpline-card";
const PILL: &str = ".helplines-filter-pill";
const VIEW_TOGGLE: &str = ".view-toggle-btn";
const COPY_BUTTON: &str = ".helpline-copy-btn";
const NAME: &str = ".helpline-name";

const ENTRY_ATTR: &str = "data-entry-id";
const HIDDEN_CLASS: &str = "filter-hidden";
const PHONE_FIELD: &str = "phone";

struct Directory {
    controller: ViewModeController,
    translations: Translations,
    grid: Element,
    cards: HashMap<EntryId, Element>,
    pills: Vec<Element>,
    toggles: Vec<Element>,
    last: Option<RenderModel>,
    resize: TimerSlot,
}

type Handle = Rc<RefCell<Directory>>;

/// Mount on the page's `.helplines-grid`, if present.
pub fn mount(hub: &TranslationHub, prefs: Rc<dyn PreferenceStore>) {
    let Some(grid) = dom::query(GRID) else {
        return;
    };
    let card_elements = dom::query_all_in(&grid, CARD);
    if card_elements.is_empty() {
        return;
    }
    let (entries, cards) = read_entries(&card_elements);
    let controller = match ViewModeController::new(entries, dom::viewport_width(), prefs) {
        Ok(controller) => controller,
        Err(err) => {
            log::error!("helpline directory not mounted: {err}");
            return;
        }
    };

    let handle: Handle = Rc::new(RefCell::new(Directory {
        controller,
        translations: hub.current(),
        grid,
        cards,
        pills: dom::query_all(PILL),
        toggles: dom::query_all(VIEW_TOGGLE),
        last: None,
        resize: TimerSlot::default(),
    }));

    wire_pills(&handle);
    wire_view_toggle(&handle);
    wire_copy_buttons(&handle);
    wire_resize(&handle);
    {
        let handle = Rc::clone(&handle);
        hub.subscribe(move |table| {
            handle.borrow_mut().translations = table.clone();
            render(&handle);
        });
    }
    render(&handle);
    log::info!("helpline directory mounted in {:?} mode", handle.borrow().controller.mode());
}

fn read_entries(elements: &[Element]) -> (Vec<Entry>, HashMap<EntryId, Element>) {
    let mut entries = Vec::with_capacity(elements.len());
    let mut cards = HashMap::with_capacity(elements.len());
    for (position, el) in elements.iter().enumerate() {
        let id = dom::data(el, "id").unwrap_or_else(|| format!("helpline-{position}"));
        let tag = dom::data(el, "category").unwrap_or_else(|| Category::DEFAULT.as_str().to_owned());
        let category = if Category::parse(&tag).is_some() {
            tag
        } else {
            log::warn!("helpline {id} has unknown category {tag:?}; filing under general");
            Category::DEFAULT.as_str().to_owned()
        };

        let mut entry = Entry::new(id.as_str(), &category);
        let phone = dom::data(el, PHONE_FIELD)
            .or_else(|| dom::query_in(el, COPY_BUTTON).and_then(|btn| dom::data(&btn, PHONE_FIELD)));
        if let Some(phone) = phone {
            entry = entry.with_field(PHONE_FIELD, &phone);
        }
        if let Some(name) = dom::query_in(el, NAME).and_then(|n| n.text_content()) {
            entry = entry.with_field("name", name.trim());
        }

        let _ = el.set_attribute(ENTRY_ATTR, &id);
        cards.insert(EntryId::from(id), el.clone());
        entries.push(entry);
    }
    (entries, cards)
}

// =============================================================================
// EVENTS
// =============================================================================

fn wire_pills(handle: &Handle) {
    let pills = handle.borrow().pills.clone();
    for pill in pills {
        let handle = Rc::clone(handle);
        let target = pill.clone();
        dom::listen(pill.as_ref(), "click", move |_| {
            let tag = dom::data(&target, "filter").unwrap_or_else(|| Filter::All.as_str().to_owned());
            let result = handle.borrow_mut().controller.set_filter_tag(&tag);
            match result {
                Ok(()) => render(&handle),
                Err(err) => log::warn!("ignoring filter pill: {err}"),
            }
        });
    }
}

fn wire_view_toggle(handle: &Handle) {
    let toggles = handle.borrow().toggles.clone();
    for toggle in toggles {
        let handle = Rc::clone(handle);
        let target = toggle.clone();
        dom::listen(toggle.as_ref(), "click", move |_| {
            let Some(sort_mode) = dom::data(&target, "view").and_then(|v| v.parse::<SortMode>().ok()) else {
                return;
            };
            handle.borrow_mut().controller.set_sort_mode(sort_mode);
            let grid = handle.borrow().grid.clone();
            dom::set_style(&grid, "opacity", "0");
            render(&handle);
            gloo_timers::callback::Timeout::new(RESIZE_DEBOUNCE_MS, move || dom::set_style(&grid, "opacity", "1")).forget();
        });
    }
}

fn wire_copy_buttons(handle: &Handle) {
    let cards: Vec<(EntryId, Element)> = handle
        .borrow()
        .cards
        .iter()
        .map(|(id, el)| (id.clone(), el.clone()))
        .collect();
    for (id, card) in cards {
        let Some(button) = dom::query_in(&card, COPY_BUTTON) else {
            continue;
        };
        let handle = Rc::clone(handle);
        dom::listen(button.as_ref(), "click", move |event| {
            event.prevent_default();
            event.stop_propagation();
            let copy = handle.borrow().controller.copy_entry_field(&id, PHONE_FIELD, BrowserClipboard);
            let handle = Rc::clone(&handle);
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match copy.await {
                    Ok(_) => handle.borrow_mut().controller.mark_copied(&id, dom::now_ms()),
                    Err(err) => {
                        log::error!("copy for {id} failed: {err}");
                        handle.borrow_mut().controller.mark_copy_failed(&id, dom::now_ms());
                    }
                }
                render(&handle);
                let handle = Rc::clone(&handle);
                gloo_timers::callback::Timeout::new(COPY_ACK_MS, move || render(&handle)).forget();
            });
        });
    }
}

fn wire_resize(handle: &Handle) {
    let Some(window) = dom::window() else {
        return;
    };
    let handle = Rc::clone(handle);
    dom::listen(window.as_ref(), "resize", move |_| {
        let tick = Rc::clone(&handle);
        handle.borrow_mut().resize.replace(RESIZE_DEBOUNCE_MS, move || {
            let transition = tick.borrow_mut().controller.on_viewport_change(dom::viewport_width());
            log::debug!("viewport settled: {transition:?}");
            render(&tick);
        });
    });
}

// =============================================================================
// RENDER
// =============================================================================

fn render(handle: &Handle) {
    let mut dir = handle.borrow_mut();
    let model = dir.controller.project(&dir.translations, dom::now_ms());
    if dir.last.as_ref() == Some(&model) {
        return;
    }
    match &model {
        RenderModel::Flat { layout, filter, cards } => {
            let rebuild = !matches!(dir.last, Some(RenderModel::Flat { .. }));
            apply_flat(&dir, *layout, *filter, cards, rebuild);
        }
        RenderModel::Grouped { groups } => {
            let rebuild = match &dir.last {
                Some(RenderModel::Grouped { groups: previous }) => !same_structure(previous, groups),
                _ => true,
            };
            apply_grouped(handle, &dir, groups, rebuild);
        }
    }
    dir.last = Some(model);
}

fn apply_flat(dir: &Directory, layout: SortMode, filter: Filter, cards: &[CardView], rebuild: bool) {
    if rebuild {
        dir.grid.set_inner_html("");
        dom::set_class(&dir.grid, "mobile-grouped", false);
        for card in cards {
            if let Some(el) = dir.cards.get(&card.id) {
                let _ = dir.grid.append_child(el);
            }
        }
    }
    dom::set_class(&dir.grid, "list-view", layout == SortMode::List);

    for card in cards {
        let Some(el) = dir.cards.get(&card.id) else {
            continue;
        };
        dom::set_class(el, HIDDEN_CLASS, !card.visible);
        dom::set_class(el, "filter-visible", card.visible);
        if card.visible {
            dom::clear_style(el, "position");
            dom::clear_style(el, "visibility");
            dom::set_style(el, "animation-delay", &format!("{}ms", card.stagger_delay_ms));
        } else if let Some(delay_ms) = card.collapse_after_ms {
            collapse_after_fade(el, delay_ms);
        }
        apply_copied(el, card);
    }

    for pill in &dir.pills {
        dom::set_class(pill, "active", dom::data(pill, "filter").as_deref() == Some(filter.as_str()));
    }
    for toggle in &dir.toggles {
        dom::set_class(toggle, "active", dom::data(toggle, "view").as_deref() == Some(layout.as_str()));
    }
}

/// Take a hidden card out of the flow once its fade has run, unless a later
/// filter showed it again in the meantime.
fn collapse_after_fade(el: &Element, delay_ms: u32) {
    let el = el.clone();
    gloo_timers::callback::Timeout::new(delay_ms, move || {
        if dom::has_class(&el, HIDDEN_CLASS) {
            dom::set_style(&el, "position", "absolute");
            dom::set_style(&el, "visibility", "hidden");
        }
    })
    .forget();
}

fn apply_grouped(handle: &Handle, dir: &Directory, groups: &[GroupView], rebuild: bool) {
    dom::set_class(&dir.grid, "list-view", false);
    if rebuild {
        dir.grid.set_inner_html("");
        dom::set_class(&dir.grid, "mobile-grouped", true);
        for group in groups {
            if let Some(section) = build_section(handle, dir, group) {
                let _ = dir.grid.append_child(&section);
            }
        }
    }

    for group in groups {
        let selector = format!(".mobile-category-group[data-category=\"{}\"]", group.category.as_str());
        let Some(section) = dom::query_in(&dir.grid, &selector) else {
            continue;
        };
        dom::set_class(&section, "expanded", group.expanded);
        if let Some(header) = dom::query_in(&section, ".mobile-category-header") {
            let _ = header.set_attribute("aria-expanded", if group.expanded { "true" } else { "false" });
        }
        if let Some(title) = dom::query_in(&section, ".mobile-category-header__title") {
            dom::set_text(&title, &group.title);
        }
        for card in &group.cards {
            if let Some(el) = dir.cards.get(&card.id) {
                dom::set_class(el, HIDDEN_CLASS, false);
                dom::clear_style(el, "position");
                dom::clear_style(el, "visibility");
                apply_copied(el, card);
            }
        }
    }
}

fn build_section(handle: &Handle, dir: &Directory, group: &GroupView) -> Option<Element> {
    let category = group.category.as_str();
    let section = dom::create("div", "mobile-category-group")?;
    let _ = section.set_attribute("data-category", category);

    let header = dom::create("button", "mobile-category-header")?;
    let left = dom::create("div", "mobile-category-header__left")?;
    let icon_box = dom::create(
        "div",
        &format!("mobile-category-header__icon mobile-category-header__icon--{category}"),
    )?;
    let icon = dom::create("ion-icon", "")?;
    let _ = icon.set_attribute("name", group.icon);
    let _ = icon_box.append_child(&icon);
    let title = dom::create("h3", "mobile-category-header__title")?;
    let _ = title.set_attribute("data-translate", group.title_key);
    dom::set_text(&title, &group.title);
    let count = dom::create("span", "mobile-category-header__count")?;
    dom::set_text(&count, &group.count.to_string());
    let chevron = dom::create("ion-icon", "mobile-category-header__chevron")?;
    let _ = chevron.set_attribute("name", "chevron-down");

    let _ = left.append_child(&icon_box);
    let _ = left.append_child(&title);
    let _ = left.append_child(&count);
    let _ = header.append_child(&left);
    let _ = header.append_child(&chevron);

    let content = dom::create("div", "mobile-category-content")?;
    for card in &group.cards {
        if let Some(el) = dir.cards.get(&card.id) {
            let _ = content.append_child(el);
        }
    }

    let _ = section.append_child(&header);
    let _ = section.append_child(&content);

    let handle = Rc::clone(handle);
    let target = group.category;
    dom::listen(header.as_ref(), "click", move |_| {
        let toggled = handle.borrow_mut().controller.toggle_category_expansion(target);
        if toggled.is_some() {
            render(&handle);
        }
    });
    Some(section)
}

fn apply_copied(el: &Element, card: &CardView) {
    let Some(button) = dom::query_in(el, COPY_BUTTON) else {
        return;
    };
    dom::set_class(&button, "copied", card.copied);
    dom::set_class(&button, "copy-failed", card.copy_failed);
    let icon_name = if card.copied {
        "checkmark-outline"
    } else if card.copy_failed {
        "alert-circle-outline"
    } else {
        "copy-outline"
    };
    if let Some(icon) = dom::query_in(&button, "ion-icon") {
        let _ = icon.set_attribute("name", icon_name);
    }
}

/// Same sections, titles, and membership; only expansion or copy flags moved.
fn same_structure(a: &[GroupView], b: &[GroupView]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(x, y)| {
            x.category == y.category
                && x.title == y.title
                && x.cards.len() == y.cards.len()
                && x.cards.iter().zip(&y.cards).all(|(c, d)| c.id == d.id)
        })
}
