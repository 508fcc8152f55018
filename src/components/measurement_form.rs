use leptos::prelude::*;
use wardrobe_core::EstimatorInput;

use crate::state::{parse_mm, use_estimator};

#[component]
pub fn MeasurementForm() -> impl IntoView {
    let estimator = use_estimator();
    let snapshot = estimator.snapshot;
    let (min_width, max_width) = estimator.width_domain();

    // Raw field text, kept separately so partial input is not rewritten.
    let (width_text, set_width_text) = signal(String::new());
    let (height_text, set_height_text) = signal(String::new());

    let start_again = move |_| {
        set_width_text.set(String::new());
        set_height_text.set(String::new());
        estimator.dispatch(EstimatorInput::Reset);
    };

    let band_hint = move || {
        snapshot.with(|s| {
            if s.measurement.width_mm.is_none() {
                format!("Enter a width between {}mm and {}mm", min_width, max_width)
            } else if s.band.is_out_of_range() {
                format!(
                    "Out of range: we fit openings from {}mm to {}mm",
                    min_width, max_width
                )
            } else {
                format!(
                    "{} openings take {} or {} doors",
                    s.band.label, s.band.min_doors, s.band.max_doors
                )
            }
        })
    };

    let hint_class = move || {
        let rejected =
            snapshot.with(|s| s.measurement.width_mm.is_some() && s.band.is_out_of_range());
        if rejected {
            "band-hint band-hint-error"
        } else {
            "band-hint"
        }
    };

    view! {
        <section class="estimator-section measurement-form">
            <h3>"1. Your opening"</h3>
            <div class="field-row">
                <div class="form-group">
                    <label for="opening-width">"Width (mm)"</label>
                    <input
                        id="opening-width"
                        type="number"
                        class="input"
                        inputmode="numeric"
                        placeholder="e.g. 2400"
                        min=min_width.to_string()
                        max=max_width.to_string()
                        prop:value=move || width_text.get()
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            estimator.dispatch(EstimatorInput::Width(parse_mm(&raw)));
                            set_width_text.set(raw);
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="opening-height">"Height (mm)"</label>
                    <input
                        id="opening-height"
                        type="number"
                        class="input"
                        inputmode="numeric"
                        placeholder="e.g. 2400"
                        min="1800"
                        max="3000"
                        prop:value=move || height_text.get()
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            estimator.dispatch(EstimatorInput::Height(parse_mm(&raw)));
                            set_height_text.set(raw);
                        }
                    />
                </div>
            </div>
            <p class=hint_class>{band_hint}</p>
            <button class="btn btn-secondary btn-small" on:click=start_again>
                "Start again"
            </button>
        </section>
    }
}
