use leptos::prelude::*;
use wardrobe_core::EstimatorInput;

use crate::state::use_estimator;

#[component]
pub fn DoorSelector() -> impl IntoView {
    let estimator = use_estimator();
    let snapshot = estimator.snapshot;

    let no_options = move || snapshot.with(|s| s.door_options.is_empty());

    view! {
        <section class="estimator-section door-selector">
            <h3>"2. Number of doors"</h3>
            <div class="form-group">
                <select
                    class="input"
                    disabled=no_options
                    on:change=move |ev| {
                        if let Ok(doors) = event_target_value(&ev).parse::<u32>() {
                            estimator.dispatch(EstimatorInput::Doors(doors));
                        }
                    }
                >
                    {move || {
                        let (options, current) =
                            snapshot.with(|s| (s.door_options.clone(), s.configuration.doors));
                        if options.is_empty() {
                            return view! { <option value="0">"Enter a width first"</option> }
                                .into_any();
                        }
                        options
                            .into_iter()
                            .map(|n| {
                                view! {
                                    <option value=n.to_string() selected={n == current}>
                                        {format!("{} doors", n)}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </select>
            </div>
        </section>
    }
}
