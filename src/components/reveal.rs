use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::motion;
use crate::state::{RevealAction, RevealState};

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Live `IntersectionObserver` subscription on one element. Dropping it
/// disconnects the observer and frees the callback.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl ViewportObserver {
    /// Calls `on_change(intersecting, ratio)` for every entry the browser
    /// reports. Watching stops once `on_change` returns `false`.
    pub fn watch<F>(target: &Element, threshold: f64, mut on_change: F) -> Result<Self, JsValue>
    where
        F: FnMut(bool, f64) -> bool + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !on_change(entry.is_intersecting(), entry.intersection_ratio()) {
                    observer.disconnect();
                    break;
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let mut options = IntersectionObserverInit::new();
        options.threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(target);

        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    /// Seconds to wait after the element comes into view.
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// Keeps its children transparent and shifted down until the wrapper first
/// scrolls into view, then fades them into place once.
#[function_component(RevealOnScroll)]
pub fn reveal_on_scroll(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let reveal = use_reducer(RevealState::default);

    {
        let node = node.clone();
        let dispatcher = reveal.dispatcher();
        use_effect_with_deps(
            move |_| {
                let watcher = match node.cast::<Element>() {
                    Some(element) => {
                        let forward = dispatcher.clone();
                        let on_change = move |intersecting: bool, ratio: f64| {
                            let action = RevealAction::Observed { intersecting, ratio };
                            forward.dispatch(action);
                            !RevealState::Hidden.apply(action).is_revealed()
                        };
                        match ViewportObserver::watch(&element, config::REVEAL_THRESHOLD, on_change) {
                            Ok(watcher) => Some(watcher),
                            Err(err) => {
                                warn!("cannot observe viewport, showing content: {:?}", err);
                                dispatcher.dispatch(RevealAction::Unobservable);
                                None
                            }
                        }
                    }
                    None => {
                        warn!("reveal wrapper has no element to observe");
                        dispatcher.dispatch(RevealAction::Unobservable);
                        None
                    }
                };

                move || {
                    if watcher.is_some() {
                        debug!("reveal observer torn down");
                    }
                    drop(watcher);
                }
            },
            (),
        );
    }

    let style = motion::fade_in_up(reveal.is_revealed(), props.delay).style();

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone())} style={style}>
            { for props.children.iter() }
        </div>
    }
}
