//! Count-up readouts that start the first time they scroll into view.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use morph_core::AnimatedCounter;
use morph_types::{StatDef, builtin_stats};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{IntersectionObserver, IntersectionObserverEntry};

/// Animate from zero to `target` once the element with `anchor_id` becomes
/// visible. The returned signal holds the current display value.
///
/// Ticks run on a task owned by the calling component, so unmounting stops
/// them. Browsers without `IntersectionObserver` start the run immediately.
pub fn use_counter(target: f64, duration_ms: u32, anchor_id: String) -> Signal<f64> {
    let mut display = use_signal(|| 0.0);
    let mut counter = use_signal(|| match AnimatedCounter::new(target, duration_ms) {
        Ok(c) => Some(c),
        Err(e) => {
            tracing::warn!(error = %e, target_value = target, "Counter disabled");
            None
        }
    });
    let mut visible = use_signal(|| false);
    let mut observer = use_signal(|| None::<IntersectionObserver>);

    use_effect(move || match observe_visibility(&anchor_id, visible) {
        Some(o) => observer.set(Some(o)),
        None => visible.set(true),
    });

    use_effect(move || {
        if !visible() {
            return;
        }
        let armed = counter.write().as_mut().is_some_and(|c| c.mark_visible());
        if !armed {
            return;
        }
        let interval = counter.peek().as_ref().map_or(1, |c| c.step_interval_ms());
        spawn(async move {
            loop {
                TimeoutFuture::new(interval).await;
                let Some(value) = counter.write().as_mut().and_then(|c| c.tick()) else {
                    break;
                };
                display.set(value);
            }
        });
    });

    use_drop(move || {
        if let Ok(mut c) = counter.try_write()
            && let Some(c) = c.as_mut()
        {
            c.cancel();
        }
        if let Ok(o) = observer.try_peek()
            && let Some(o) = o.as_ref()
        {
            o.disconnect();
        }
    });

    display
}

/// Flip `visible` the first time the element intersects the viewport.
fn observe_visibility(element_id: &str, mut visible: Signal<bool>) -> Option<IntersectionObserver> {
    let element = web_sys::window()?
        .document()?
        .get_element_by_id(element_id)?;

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let seen = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .is_ok_and(|e| e.is_intersecting())
            });
            if seen {
                let _ = visible.try_write().map(|mut v| *v = true);
                observer.disconnect();
            }
        },
    );
    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref()).ok()?;
    observer.observe(&element);
    callback.forget();
    Some(observer)
}

/// One stat rendered through its own counter.
#[component]
pub fn CounterReadout(id: String, stat: StatDef, class: String) -> Element {
    let value = use_counter(stat.value, stat.duration_ms, id.clone());
    let text = stat.display(value());

    rsx! {
        div { id: "{id}", class: "{class}",
            span { class: "stat-value", "{text}" }
            span { class: "stat-label", "{stat.label}" }
            if let Some(growth) = &stat.growth {
                span { class: "stat-growth", "{growth}" }
            }
        }
    }
}

/// Hero row of headline network numbers.
#[component]
pub fn StatsBar() -> Element {
    let stats = use_hook(builtin_stats);

    rsx! {
        section { class: "stats-bar",
            for (i, stat) in stats.into_iter().enumerate() {
                CounterReadout {
                    key: "{i}",
                    id: format!("hero-stat-{i}"),
                    stat,
                    class: "stat-card".to_string(),
                }
            }
        }
    }
}
