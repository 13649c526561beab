//! Runs view commands on the browser event loop.

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::{execute, Command, Screen};

use super::api::GlooApi;

/// Run `command`, feed the event back into `view`, and keep going while the
/// view asks for follow-ups. A view disposed mid-flight drops the rest.
pub fn dispatch<S>(api: GlooApi, view: RwSignal<S>, command: Command)
where
    S: Screen + Send + Sync + 'static,
{
    spawn_local(async move {
        let mut next = Some(command);
        while let Some(command) = next {
            let event = execute(&api, command).await;
            next = view.try_update(|screen| screen.apply(event)).flatten();
        }
    });
}

/// Apply a user action to `view` and dispatch whatever command it returns.
pub fn act<S, F>(api: GlooApi, view: RwSignal<S>, action: F)
where
    S: Screen + Send + Sync + 'static,
    F: FnOnce(&mut S) -> Option<Command>,
{
    if let Some(command) = view.try_update(action).flatten() {
        dispatch(api, view, command);
    }
}
