pub mod addon_toggles;
pub mod door_selector;
pub mod finish_picker;
pub mod lead_form;
pub mod measurement_form;
pub mod price_summary;
pub mod wardrobe_preview;
