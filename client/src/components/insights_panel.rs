//! Profile page AI panel: insight, mood trend, and goal suggestion.
//!
//! The profile's own loader announces its data with a `wellnessDataReady`
//! window event whose `detail` is a [`WellnessSnapshot`]. The first one is
//! published through [`Readiness`]; loads triggered before that simply wait.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::net::api::HttpWellnessApi;
use crate::state::insights::{
    FALLBACK_MESSAGES, GoalSuggestion, InsightView, InsightsSession, MoodInsight, WellnessSnapshot, resolve_goal,
    resolve_insight, resolve_mood,
};
use crate::util::dom;
use crate::util::ready::{Publisher, Readiness, readiness};

pub const WELLNESS_READY_EVENT: &str = "wellnessDataReady";
pub const GOAL_ACCEPTED_EVENT: &str = "suggestedGoalAccepted";

/// Delay after the wellness tab is clicked, letting its panel become active.
const TAB_SETTLE_MS: u32 = 300;

struct Panel {
    session: InsightsSession,
    ready: Readiness<WellnessSnapshot>,
}

type Handle = Rc<RefCell<Panel>>;

pub fn mount() {
    let Some(content) = dom::query("#aiInsightsContent") else {
        return;
    };
    let (publisher, ready) = readiness::<WellnessSnapshot>();
    listen_for_snapshot(publisher);

    let handle: Handle = Rc::new(RefCell::new(Panel { session: InsightsSession::init(), ready }));

    if let Some(tab) = dom::query("[data-tab=\"wellness\"]") {
        let handle = Rc::clone(&handle);
        let content = content.clone();
        dom::listen(tab.as_ref(), "click", move |_| {
            let (handle, content) = (Rc::clone(&handle), content.clone());
            Timeout::new(TAB_SETTLE_MS, move || load(&handle, &content)).forget();
        });
    }
    if dom::query("#wellnessPanel").is_some_and(|panel| dom::has_class(&panel, "is-active")) {
        load(&handle, &content);
    }
}

fn listen_for_snapshot(publisher: Publisher<WellnessSnapshot>) {
    let Some(window) = dom::window() else {
        return;
    };
    let mut publisher = Some(publisher);
    dom::listen(window.as_ref(), WELLNESS_READY_EVENT, move |event| {
        let Some(detail) = event.dyn_ref::<web_sys::CustomEvent>().map(web_sys::CustomEvent::detail) else {
            return;
        };
        let snapshot = match parse_snapshot(&detail) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                log::warn!("ignoring malformed wellness data: {err}");
                return;
            }
        };
        if let Some(publisher) = publisher.take() {
            publisher.publish(snapshot);
        }
    });
}

fn parse_snapshot(detail: &JsValue) -> Result<WellnessSnapshot, String> {
    let raw = js_sys::JSON::stringify(detail)
        .map_err(|e| format!("{e:?}"))?
        .as_string()
        .ok_or_else(|| "detail is not serializable".to_owned())?;
    serde_json::from_str(&raw).map_err(|e| e.to_string())
}

fn load(handle: &Handle, content: &Element) {
    let (ticket, ready) = {
        let mut panel = handle.borrow_mut();
        let Some(ticket) = panel.session.begin() else {
            return;
        };
        (ticket, panel.ready.clone())
    };
    let (handle, content) = (Rc::clone(handle), content.clone());
    wasm_bindgen_futures::spawn_local(async move {
        let snapshot = ready.wait().await;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let seed = (js_sys::Math::random() * FALLBACK_MESSAGES.len() as f64) as usize;
        let api = HttpWellnessApi;
        let view = resolve_insight(&api, snapshot.as_ref(), seed).await;
        if !handle.borrow_mut().session.finish(ticket, view.clone()) {
            log::debug!("discarding insight from a reset session");
            return;
        }
        render_insight(&content, &view);

        let Some(snapshot) = snapshot else {
            return;
        };
        if let Some(mood) = resolve_mood(&api, &snapshot).await {
            render_mood(&mood);
        }
        if let Some(goal) = resolve_goal(&api, &snapshot).await {
            render_goal(&goal);
        }
    });
}

// =============================================================================
// RENDER
// =============================================================================

fn render_insight(content: &Element, view: &InsightView) {
    content.set_inner_html("");
    if let Some(p) = dom::create("p", "") {
        dom::set_text(&p, &view.message);
        let _ = content.append_child(&p);
    }
    if let (Some(affirmation), Some(el)) = (&view.affirmation, dom::query("#aiAffirmation")) {
        dom::set_text(&el, affirmation);
        dom::set_style(&el, "display", "block");
    }
}

fn render_mood(mood: &MoodInsight) {
    if let (Some(trend), Some(el)) = (&mood.trend, dom::query("#moodTrendValue")) {
        dom::set_text(&el, &trend.label);
        let _ = el.set_attribute("title", &trend.tooltip);
    }
    let (Some(suggestion), Some(container)) = (&mood.suggestion, dom::query("#moodInsights")) else {
        return;
    };
    if dom::query_in(&container, ".ai-mood-suggestion").is_some() {
        return;
    }
    let (Some(wrapper), Some(icon), Some(span)) =
        (dom::create("div", "ai-mood-suggestion"), dom::create("ion-icon", ""), dom::create("span", ""))
    else {
        return;
    };
    let _ = icon.set_attribute("name", "bulb-outline");
    dom::set_text(&span, suggestion);
    let _ = wrapper.append_child(&icon);
    let _ = wrapper.append_child(&span);
    let _ = container.append_child(&wrapper);
}

fn render_goal(goal: &GoalSuggestion) {
    let Some(section) = dom::query(".mb-profile__goals-section") else {
        return;
    };
    if dom::query_in(&section, ".ai-goal-suggestion").is_some() {
        return;
    }
    let Some(card) = build_goal_card(goal) else {
        return;
    };
    match dom::query_in(&section, "h3").and_then(|h| h.next_sibling()) {
        Some(after_header) => {
            let _ = section.insert_before(&card, Some(&after_header));
        }
        None => {
            let _ = section.append_child(&card);
        }
    }
}

fn build_goal_card(goal: &GoalSuggestion) -> Option<Element> {
    let card = dom::create("div", "ai-goal-suggestion glass-card")?;

    let header = dom::create("div", "ai-goal-suggestion__header")?;
    let sparkle = dom::create("ion-icon", "")?;
    let _ = sparkle.set_attribute("name", "sparkles");
    let label = dom::create("span", "")?;
    dom::set_text(&label, "AI Suggestion");
    let _ = header.append_child(&sparkle);
    let _ = header.append_child(&label);

    let text = dom::create("p", "ai-goal-suggestion__text")?;
    dom::set_text(&text, &goal.goal);
    let reason = dom::create("p", "ai-goal-suggestion__reason")?;
    dom::set_text(&reason, &goal.why);

    let add = dom::create("button", "ai-goal-suggestion__add")?;
    let plus = dom::create("ion-icon", "")?;
    let _ = plus.set_attribute("name", "add-outline");
    let _ = add.append_child(&plus);
    let _ = add.append_child(&dom::document()?.create_text_node(" Add This Goal"));

    let (title, category, target) = (goal.goal.clone(), goal.category.clone(), card.clone());
    dom::listen(add.as_ref(), "click", move |_| {
        accept_goal(&title, &category);
        target.remove();
    });

    for child in [&header, &text, &reason, &add] {
        let _ = card.append_child(child);
    }
    Some(card)
}

/// Hand the accepted goal to the profile script, which owns persistence.
fn accept_goal(title: &str, category: &str) {
    let Some(window) = dom::window() else {
        return;
    };
    let detail = serde_json::json!({ "title": title, "category": category }).to_string();
    let Ok(detail) = js_sys::JSON::parse(&detail) else {
        return;
    };
    let init = web_sys::CustomEventInit::new();
    init.set_detail(&detail);
    if let Ok(event) = web_sys::CustomEvent::new_with_event_init_dict(GOAL_ACCEPTED_EVENT, &init) {
        let _ = window.dispatch_event(&event);
    }
}
