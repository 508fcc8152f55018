use leptos::prelude::*;

use crate::components::addon_toggles::AddonToggles;
use crate::components::door_selector::DoorSelector;
use crate::components::finish_picker::FinishPicker;
use crate::components::lead_form::LeadForm;
use crate::components::measurement_form::MeasurementForm;
use crate::components::price_summary::PriceSummary;
use crate::components::wardrobe_preview::WardrobePreview;
use crate::state::EstimatorContext;

#[component]
pub fn App() -> impl IntoView {
    provide_context(EstimatorContext::new());

    view! {
        <div class="estimator">
            <header class="estimator-header">
                <h1>"Sliding Wardrobe Price Estimator"</h1>
                <p class="page-description">
                    "Instant guide price based on your opening size and per-door finish selection."
                </p>
            </header>
            <div class="estimator-layout">
                <div class="estimator-controls">
                    <MeasurementForm />
                    <DoorSelector />
                    <FinishPicker />
                    <AddonToggles />
                </div>
                <div class="estimator-result">
                    <WardrobePreview />
                    <PriceSummary />
                    <LeadForm />
                </div>
            </div>
        </div>
    }
}
