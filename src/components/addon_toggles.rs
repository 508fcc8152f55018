use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wardrobe_core::money::format_gbp;
use wardrobe_core::EstimatorInput;

use crate::state::use_estimator;

fn checkbox_checked(ev: &web_sys::Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|e| e.checked())
        .unwrap_or(false)
}

#[component]
pub fn AddonToggles() -> impl IntoView {
    let estimator = use_estimator();
    let snapshot = estimator.snapshot;
    let tariff = estimator.tariff();

    view! {
        <section class="estimator-section addon-toggles">
            <h3>"4. Extras"</h3>
            <label class="checkbox-label">
                <input
                    type="checkbox"
                    prop:checked=move || snapshot.with(|s| s.configuration.include_interior)
                    on:change=move |ev| {
                        estimator.dispatch(EstimatorInput::Interior(checkbox_checked(&ev)));
                    }
                />
                {format!(" Interior fit-out (+{})", format_gbp(tariff.interior.into()))}
            </label>
            <label class="checkbox-label">
                <input
                    type="checkbox"
                    prop:checked=move || snapshot.with(|s| s.configuration.include_exterior)
                    on:change=move |ev| {
                        estimator.dispatch(EstimatorInput::Exterior(checkbox_checked(&ev)));
                    }
                />
                {format!(" Exterior work (+{})", format_gbp(tariff.exterior.into()))}
            </label>
        </section>
    }
}
