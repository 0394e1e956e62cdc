//! Notice-surface presentation helper.
//!
//! Thin, forgiving wrappers around the surface object: every operation
//! degrades to a no-op plus a log line when a member is missing or a call
//! fails. The container is faded, never deactivated, so the next popup
//! reuses it without a host-side rebuild.

use tracing::{debug, warn};

use crate::error::Result;
use crate::object::{HostObject, ObjectRef};
use crate::value::HostValue;

pub const DISPLAY_METHOD: &str = "display";
const TEXT_FIELD: &str = "noticeText";
const BACKGROUND_FIELD: &str = "noticeBackground";
const NATIVE_HIDE_FIELD: &str = "autoHideTask";
const FADE_FIELD: &str = "fadeControl";
const ATTACH_FADE_METHOD: &str = "attachFadeControl";
const ACTIVE: &str = "active";
const OPACITY: &str = "opacity";
const TEXT: &str = "text";
const CANCEL_METHOD: &str = "cancel";

/// Make the surface's container active and fully opaque before a display
/// call, attaching a fade control if the container has none.
pub fn prepare_for_show(surface: &ObjectRef) {
    let Some(container) = background_container(surface) else {
        warn!("notice surface has no background container");
        return;
    };

    if container.get(ACTIVE).and_then(|v| v.as_bool()) == Some(false)
        && !container.set(ACTIVE, HostValue::Bool(true))
    {
        warn!("failed to activate the notice container");
    }
    if let Some(fade) = ensure_fade_control(&container) {
        fade.set(OPACITY, HostValue::Num(1.0));
    }
    if let Some(text) = text_display(surface) {
        text.set(OPACITY, HostValue::Num(1.0));
    }
}

/// Invoke the surface's display call.
pub fn display(surface: &ObjectRef, body: &str) -> Result<()> {
    surface
        .invoke(DISPLAY_METHOD, &[HostValue::Str(body.to_string())])
        .map(|_| ())
}

/// Hide the popup: clear the text, stop the host's own auto-hide task so
/// two hide mechanisms never race, and fade the container out without
/// deactivating it.
pub fn hide(surface: &ObjectRef) {
    stop_native_auto_hide(surface);

    if let Some(text) = text_display(surface) {
        text.set(TEXT, HostValue::Str(String::new()));
    }
    if let Some(container) = background_container(surface)
        && let Some(fade) = ensure_fade_control(&container)
    {
        fade.set(OPACITY, HostValue::Num(0.0));
    }
}

/// The background container, falling back to the text display's parent
/// when the surface has no container member.
pub fn background_container(surface: &ObjectRef) -> Option<ObjectRef> {
    if let Some(container) = surface
        .get(BACKGROUND_FIELD)
        .and_then(|v| v.as_obj())
        .filter(|o| !o.is_dead())
    {
        return Some(container);
    }
    text_display(surface)?.parent().filter(|o| !o.is_dead())
}

pub fn text_display(surface: &ObjectRef) -> Option<ObjectRef> {
    surface
        .get(TEXT_FIELD)
        .and_then(|v| v.as_obj())
        .filter(|o| !o.is_dead())
}

/// The container's fade control, attached on demand when absent.
fn ensure_fade_control(container: &ObjectRef) -> Option<ObjectRef> {
    if let Some(fade) = container
        .get(FADE_FIELD)
        .and_then(|v| v.as_obj())
        .filter(|o| !o.is_dead())
    {
        return Some(fade);
    }
    match container.invoke(ATTACH_FADE_METHOD, &[]) {
        Ok(value) => value.as_obj(),
        Err(e) => {
            warn!(error = %e, "failed to attach a fade control");
            None
        }
    }
}

/// Cancel the host's own pending hide task, if one is tracked.
fn stop_native_auto_hide(surface: &ObjectRef) {
    let Some(task) = surface
        .get(NATIVE_HIDE_FIELD)
        .and_then(|v| v.as_obj())
        .filter(|o| !o.is_dead())
    else {
        return;
    };
    if let Err(e) = task.invoke(CANCEL_METHOD, &[]) {
        debug!(error = %e, "native auto-hide task refused to cancel");
    }
    surface.set(NATIVE_HIDE_FIELD, HostValue::Nil);
}
