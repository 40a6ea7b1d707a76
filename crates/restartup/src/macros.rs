#[macro_export]
/// Builds a Yew [`Callback`] that runs an async block on the local executor.
///
/// Every listed variable is cloned once into the callback and again into
/// each spawned task, so handles such as `UseStateHandle` or the API
/// provider can be used freely inside the block.
///
/// Without an event parameter, e.g. the admin panel's pause button:
/// ```compile_fail
/// let on_toggle_pause = async_callback!([api, game_id, paused] {
///     match api.set_paused(&game_id, !*paused).await {
///         Ok(update) => paused.set(update == GameUpdate::Paused),
///         Err(err) => warn!("Failed to toggle pause: {}", err),
///     }
/// });
/// ```
///
/// With an event parameter, optionally typed. The admin panel's assist
/// buttons share one callback and `reform` it with the player's name:
/// ```compile_fail
/// let on_assist = async_callback!([api, game_id] |name: String| {
///     if let Err(err) = api.assist_player(&game_id, &name).await {
///         warn!("Assisting {} failed: {}", name, err);
///     }
/// });
/// let onclick = on_assist.reform(move |_: MouseEvent| name.clone());
/// ```
///
/// The body runs after the handler has returned, so browser defaults such
/// as form submission cannot be prevented from inside it.
///
/// The manual equivalent clones each handle twice by hand before calling
/// `wasm_bindgen_futures::spawn_local`.
///
/// [`Callback`]: https://docs.rs/yew/latest/yew/callback/struct.Callback.html
macro_rules! async_callback {
    // Matched first so the closure-like form is not taken as an expression
    ([$($var:ident),* $(,)?] |$event:ident $(: $event_ty:ty)?| $body:expr) => {
        {
            $(let $var = $var.clone();)*
            ::yew::Callback::from(move |$event $(: $event_ty)?| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };

    ([$($var:ident),* $(,)?] $body:expr) => {
        {
            $(let $var = $var.clone();)*
            ::yew::Callback::from(move |_| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };
}
