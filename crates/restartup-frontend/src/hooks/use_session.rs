use restartup::id::GameId;
use restartup::log::{debug, warn};
use restartup::poll::CancelToken;
use restartup::session::{ResolvedRole, Role};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::providers::use_api;

type Navigation = (GameId, Option<String>);

/// Resolves the viewer's role for `game_id`, once per navigation.
///
/// Returns `None` until the answer for the current navigation arrives, so a
/// role resolved for the previous page is never applied to the next one. A
/// failed lookup falls back to [`Role::Anonymous`].
#[hook]
pub fn use_session(game_id: &GameId) -> Option<Role> {
    let api = use_api();
    let resolved = use_state(|| None::<ResolvedRole<Navigation>>);
    let path = use_location().map(|location| location.path().to_string());
    let navigation: Navigation = (game_id.clone(), path);

    {
        let resolved = resolved.clone();
        use_effect_with(navigation.clone(), move |navigation: &Navigation| {
            resolved.set(None);
            let token = CancelToken::new();
            let navigation = navigation.clone();
            {
                let token = token.clone();
                spawn_local(async move {
                    let game_id = &navigation.0;
                    let role = match api.resolve_session(game_id).await {
                        Ok(role) => role,
                        Err(err) => {
                            warn!("Resolving session for game {} failed: {}", game_id, err);
                            Role::Anonymous
                        }
                    };
                    if !token.is_cancelled() {
                        debug!("Viewer of game {} is {:?}", game_id, role);
                        resolved.set(Some(ResolvedRole::new(navigation, role)));
                    }
                });
            }
            move || token.cancel()
        });
    }

    resolved
        .as_ref()
        .and_then(|resolved| resolved.role_for(&navigation))
        .cloned()
}
