use std::future::Future;

use gloo_timers::callback::Interval;
use restartup::api::{ApiError, ApiResult};
use restartup::poll::Poller;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;

/// What a polled view knows about its resource.
#[derive(Clone, Debug, PartialEq)]
pub struct Polled<T> {
    /// Latest applied result. Kept through failed ticks.
    pub data: Option<T>,
    /// The service reported the resource as unknown.
    pub not_found: bool,
    /// Local time of the last applied result.
    pub updated_at: Option<String>,
}

impl<T> Default for Polled<T> {
    fn default() -> Self {
        Self {
            data: None,
            not_found: false,
            updated_at: None,
        }
    }
}

impl<T> Polled<T> {
    pub fn is_loading(&self) -> bool {
        self.data.is_none() && !self.not_found
    }
}

fn local_time() -> String {
    js_sys::Date::new_0()
        .to_locale_time_string("en-GB")
        .into()
}

/// Polls `fetch` while the calling component is mounted: once right away,
/// then every [`config::POLL_INTERVAL`]. Changing `deps` stops the current
/// poller and starts a fresh one with cleared state.
///
/// Fetches are not sequenced. A slow response may land after a newer one
/// and overwrite it until the next tick.
#[hook]
pub fn use_polling<T, D, F, Fut>(label: &'static str, deps: D, fetch: F) -> Polled<T>
where
    T: Clone + 'static,
    D: Clone + PartialEq + 'static,
    F: Fn(D) -> Fut + 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
{
    let state = use_state(Polled::<T>::default);

    {
        let state = state.clone();
        use_effect_with(deps, move |deps: &D| {
            state.set(Polled::default());

            let (poller, handle) = {
                let state = state.clone();
                Poller::new(label, move |data: T| {
                    state.set(Polled {
                        data: Some(data),
                        not_found: false,
                        updated_at: Some(local_time()),
                    })
                })
            };
            let poller = poller.with_error_sink(move |err: &ApiError| {
                if err.is_not_found() {
                    state.set(Polled {
                        data: None,
                        not_found: true,
                        updated_at: None,
                    });
                }
            });

            let deps = deps.clone();
            let tick = move || {
                let poller = poller.clone();
                let request = fetch(deps.clone());
                spawn_local(async move {
                    poller.tick(request).await;
                });
            };

            tick();
            let interval = Interval::new(config::poll_interval_millis(), tick);

            move || {
                drop(interval);
                handle.stop();
            }
        });
    }

    (*state).clone()
}
