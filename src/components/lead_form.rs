use leptos::prelude::*;

use crate::embed::{post_lead, Lead};
use crate::state::use_estimator;

#[component]
pub fn LeadForm() -> impl IntoView {
    let snapshot = use_estimator().snapshot;

    let (name, set_name) = signal(String::new());
    let (postcode, set_postcode) = signal(String::new());
    let (contact, set_contact) = signal(String::new());
    let (status, set_status) = signal::<Option<Result<String, String>>>(None);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let lead = Lead {
            name: name.get(),
            postcode: postcode.get(),
            contact: contact.get(),
        };
        let quote = snapshot.get_untracked();
        match post_lead(&lead, &quote) {
            Ok(()) => {
                set_status.set(Some(Ok(
                    "Thanks! We'll be in touch to book your free measure-up.".to_string(),
                )));
                set_name.set(String::new());
                set_postcode.set(String::new());
                set_contact.set(String::new());
            }
            Err(e) => {
                leptos::logging::warn!("Lead not sent: {}", e);
                set_status.set(Some(Err(e)));
            }
        }
    };

    view! {
        <section class="estimator-section lead-form">
            <h3>"Book a free measure-up"</h3>
            <form on:submit=submit>
                {lead_input("lead-name", "Name", name, set_name)}
                {lead_input("lead-postcode", "Postcode", postcode, set_postcode)}
                {lead_input("lead-contact", "Phone or email", contact, set_contact)}
                <button type="submit" class="btn btn-primary">"Request callback"</button>
            </form>
            {move || {
                status
                    .get()
                    .map(|result| match result {
                        Ok(msg) => view! { <p class="status-text status-ok">{msg}</p> }.into_any(),
                        Err(msg) => view! { <p class="status-text status-error">{msg}</p> }.into_any(),
                    })
            }}
        </section>
    }
}

fn lead_input(
    id: &'static str,
    label: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                id=id
                type="text"
                class="input"
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
        </div>
    }
}
