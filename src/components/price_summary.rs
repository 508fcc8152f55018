use leptos::prelude::*;
use wardrobe_core::money::format_gbp;

use crate::state::use_estimator;

fn price_line(label: &'static str, amount: u64) -> impl IntoView {
    view! {
        <div class="price-line">
            <span class="price-label">{label}</span>
            <span class="price-amount">{format_gbp(amount)}</span>
        </div>
    }
}

#[component]
pub fn PriceSummary() -> impl IntoView {
    let estimator = use_estimator();
    let snapshot = estimator.snapshot;
    let tariff = estimator.tariff();
    let base_label = StoredValue::new(format!(
        "Base price ({} mirror doors, fitted)",
        tariff.included_doors
    ));
    let base = u64::from(tariff.base);

    view! {
        <aside class="price-summary">
            <h3>"Your guide price"</h3>
            <Show
                when=move || snapshot.with(|s| s.show_quote)
                fallback=|| {
                    view! {
                        <p class="price-total price-placeholder">"--"</p>
                        <p class="price-note">"Enter your opening width to see a price."</p>
                    }
                }
            >
                {move || {
                    let price = snapshot.with(|s| s.price);
                    view! {
                        <div class="price-lines">
                            <div class="price-line">
                                <span class="price-label">{base_label.get_value()}</span>
                                <span class="price-amount">{format_gbp(base)}</span>
                            </div>
                            {(price.extra_doors_cost > 0)
                                .then(|| price_line("Additional doors", price.extra_doors_cost))}
                            {(price.upgrades_cost > 0)
                                .then(|| price_line("Finish upgrades", price.upgrades_cost))}
                            {(price.interior_cost > 0)
                                .then(|| price_line("Interior fit-out", price.interior_cost))}
                            {(price.exterior_cost > 0)
                                .then(|| price_line("Exterior work", price.exterior_cost))}
                        </div>
                        <p class="price-total">{format_gbp(price.total)}</p>
                    }
                }}
                <p class="price-note">
                    "Guide price only. Your final quote follows a free measure-up visit."
                </p>
            </Show>
        </aside>
    }
}
