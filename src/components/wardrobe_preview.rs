use leptos::prelude::*;
use wardrobe_core::money::finish_swatch_class;

use crate::state::use_estimator;

/// Scaled outline of the opening with one panel per door. Cosmetic only.
#[component]
pub fn WardrobePreview() -> impl IntoView {
    let snapshot = use_estimator().snapshot;

    let size = move || {
        snapshot.with(|s| {
            format!(
                "width: {:.0}px; height: {:.0}px;",
                s.preview.box_width, s.preview.box_height
            )
        })
    };

    view! {
        <div class="wardrobe-preview">
            <div class="preview-frame" style=size>
                {move || {
                    let finishes = snapshot.with(|s| s.configuration.finishes.clone());
                    if finishes.is_empty() {
                        return view! {
                            <span class="preview-placeholder">"Your wardrobe"</span>
                        }
                            .into_any();
                    }
                    finishes
                        .into_iter()
                        .map(|finish| {
                            view! {
                                <div class=format!("preview-door {}", finish_swatch_class(finish))></div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
            <p class="preview-caption">
                {move || {
                    snapshot.with(|s| match (s.measurement.width_mm, s.measurement.height_mm) {
                        (Some(w), Some(h)) => format!("{:.0} x {:.0} mm", w, h),
                        (Some(w), None) => format!("{:.0} mm wide", w),
                        _ => "Not to scale".to_string(),
                    })
                }}
            </p>
        </div>
    }
}
