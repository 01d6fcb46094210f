//! Labelled form controls shared by the student, course and enrollment forms.
//!
//! Each control reports the raw string the user typed or picked; parsing and
//! validation happen in the drafts when the form is submitted.

use common::store::SelectOption;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

pub fn text_input(
    label: &str,
    value: &str,
    kind: &'static str,
    disabled: bool,
    on_input: Callback<String>,
) -> Html {
    let oninput = Callback::from(move |event: InputEvent| {
        let input: HtmlInputElement = event.target_unchecked_into();
        on_input.emit(input.value());
    });
    html! {
        <div class="form-group">
            <label>{ label }</label>
            <input type={kind} value={value.to_string()} required=true {disabled} {oninput} />
        </div>
    }
}

pub fn number_input(label: &str, value: &str, disabled: bool, on_input: Callback<String>) -> Html {
    let oninput = Callback::from(move |event: InputEvent| {
        let input: HtmlInputElement = event.target_unchecked_into();
        on_input.emit(input.value());
    });
    html! {
        <div class="form-group">
            <label>{ label }</label>
            <input type="number" min="1" step="1" value={value.to_string()} required=true {disabled} {oninput} />
        </div>
    }
}

pub fn text_area(label: &str, value: &str, disabled: bool, on_input: Callback<String>) -> Html {
    let oninput = Callback::from(move |event: InputEvent| {
        let area: HtmlTextAreaElement = event.target_unchecked_into();
        on_input.emit(area.value());
    });
    html! {
        <div class="form-group">
            <label>{ label }</label>
            <textarea rows="3" value={value.to_string()} {disabled} {oninput} />
        </div>
    }
}

/// A `<select>` whose first entry is an empty-valued placeholder.
pub fn select_input(
    label: &str,
    placeholder: &str,
    options: &[SelectOption],
    selected: &str,
    disabled: bool,
    on_change: Callback<String>,
) -> Html {
    let onchange = Callback::from(move |event: Event| {
        let select: HtmlSelectElement = event.target_unchecked_into();
        on_change.emit(select.value());
    });
    html! {
        <div class="form-group">
            <label>{ label }</label>
            <select required=true {disabled} {onchange}>
                <option value="" selected={selected.is_empty()}>{ placeholder }</option>
                { for options.iter().map(|option| html! {
                    <option value={option.value.clone()} selected={option.value == selected}>
                        { option.label.clone() }
                    </option>
                }) }
            </select>
        </div>
    }
}
