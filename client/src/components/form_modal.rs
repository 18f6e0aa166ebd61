//! Create/edit modal driven by a static field list.

use leptos::prelude::*;
use serde_json::{Map, Value};

use crate::util::form::{FieldKind, FormField, FormValues, to_body};

/// Modal form. Validation errors are shown inline; a valid body is handed to
/// `on_submit`, which reports server failures through `error`.
#[component]
pub fn FormModal(
    #[prop(into)] title: String,
    fields: &'static [FormField],
    initial: FormValues,
    error: RwSignal<Option<String>>,
    on_submit: Callback<Map<String, Value>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let values = RwSignal::new(initial);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match values.with_untracked(|values| to_body(fields, values)) {
            Ok(body) => {
                error.set(None);
                on_submit.run(body);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <form class="form" on:submit=on_form_submit>
                    {fields.iter().map(|field| view! { <FormInput field=*field values/> }).collect_view()}
                    <Show when=move || error.with(Option::is_some)>
                        <p class="status status--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary">
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[component]
fn FormInput(field: FormField, values: RwSignal<FormValues>) -> impl IntoView {
    let value = move || values.with(|values| values.get(field.name).cloned().unwrap_or_default());
    let on_input = move |ev: leptos::ev::Event| {
        let next = event_target_value(&ev);
        values.update(|values| {
            values.insert(field.name, next);
        });
    };

    let control = match field.kind {
        FieldKind::Select(options) => view! {
            <select class="form__input" prop:value=value on:change=on_input>
                {options
                    .iter()
                    .map(|option| view! { <option value=*option>{*option}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::TextArea => view! {
            <textarea
                class="form__input form__input--multiline"
                rows="4"
                placeholder=field.placeholder
                required=field.required
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
        kind => view! {
            <input
                class="form__input"
                type=kind.input_type()
                placeholder=field.placeholder
                required=field.required
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
    };

    view! {
        <label class="form__field">
            <span class="form__label">{field.label}</span>
            {control}
        </label>
    }
}
