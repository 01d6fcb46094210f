//! Browser-side helpers for the registry dashboard: toasts, confirmation
//! prompts and today's date for the enrollment form.

use common::sync::{Notice, NoticeLevel};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

const TOAST_STACK_ID: &str = "toast-stack";
const TOAST_MILLIS: u32 = 3000;

/// Displays a notice as a temporary toast in the bottom-right corner.
///
/// Toasts stack in a shared fixed container and each removes itself after
/// three seconds.
pub fn show_toast(notice: &Notice) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(stack) = toast_stack(&document) else {
        return;
    };
    let Ok(toast) = document.create_element("div") else {
        return;
    };
    toast.set_text_content(Some(&notice.message));
    let html_toast: HtmlElement = toast.unchecked_into();
    html_toast.set_class_name("toast");
    let background = match notice.level {
        NoticeLevel::Success => "#28a745",
        NoticeLevel::Error => "#dc3545",
    };
    let style = html_toast.style();
    style.set_property("background", background).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "12px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("box-shadow", "0 2px 8px rgba(0, 0, 0, 0.2)").ok();
    style.set_property("font-family", "Arial, sans-serif").ok();

    if stack.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

fn toast_stack(document: &Document) -> Option<HtmlElement> {
    if let Some(existing) = document.get_element_by_id(TOAST_STACK_ID) {
        return existing.dyn_into::<HtmlElement>().ok();
    }
    let body = document.body()?;
    let stack: HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
    stack.set_id(TOAST_STACK_ID);
    let style = stack.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("right", "20px").ok();
    style.set_property("display", "flex").ok();
    style.set_property("flex-direction", "column").ok();
    style.set_property("gap", "8px").ok();
    style.set_property("z-index", "10000").ok();
    body.append_child(&stack).ok()?;
    Some(stack)
}

/// Blocking `window.confirm`; anything but an explicit OK counts as declined.
pub fn confirm_with_user(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}

/// Local calendar date as `YYYY-MM-DD`, the format `<input type="date">` uses.
pub fn today_iso() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}
