use leptos::prelude::*;
use wardrobe_core::money::{finish_label, finish_swatch_class};
use wardrobe_core::pricing::Finish;
use wardrobe_core::EstimatorInput;

use crate::state::use_estimator;

#[component]
pub fn FinishPicker() -> impl IntoView {
    let estimator = use_estimator();
    let snapshot = estimator.snapshot;
    let tariff = StoredValue::new(estimator.tariff());

    let doors = move || {
        snapshot.with(|s| {
            s.configuration
                .finishes
                .iter()
                .copied()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="estimator-section finish-picker">
            <h3>"3. Door finishes"</h3>
            <Show
                when=move || snapshot.with(|s| s.configuration.doors > 0)
                fallback=|| view! { <p class="empty-state">"Choose your doors to pick finishes."</p> }
            >
                <div class="finish-list">
                    <For
                        each=doors
                        key=|(index, finish)| (*index, *finish)
                        children=move |(index, finish)| {
                            view! {
                                <div class="finish-row">
                                    <span class=finish_swatch_class(finish)></span>
                                    <label class="finish-door">{format!("Door {}", index + 1)}</label>
                                    <select
                                        class="input"
                                        on:change=move |ev| {
                                            match event_target_value(&ev).parse::<Finish>() {
                                                Ok(finish) => {
                                                    estimator.dispatch(EstimatorInput::Finish { index, finish });
                                                }
                                                Err(e) => leptos::logging::warn!("{}", e),
                                            }
                                        }
                                    >
                                        {Finish::ALL
                                            .iter()
                                            .map(|option| {
                                                let label = tariff.with_value(|t| finish_label(*option, t));
                                                view! {
                                                    <option value=option.as_str() selected={*option == finish}>
                                                        {label}
                                                    </option>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </select>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </section>
    }
}
