//! Hand-off to the page embedding the widget.
//!
//! The widget runs inside an iframe. Lead details go to the parent window via
//! `postMessage`, and only when the parent is one of the sites allowed to
//! embed the widget. Delivering them anywhere else is the parent's job.

use serde::Serialize;
use wasm_bindgen::JsValue;
use wardrobe_core::money::format_gbp;
use wardrobe_core::EstimatorSnapshot;

pub const LEAD_MESSAGE_TYPE: &str = "wardrobe-estimator:lead";

/// Exact origins allowed to receive leads, besides the widget's own origin.
pub const ALLOWED_PARENT_ORIGINS: &[&str] = &[
    "https://wilkinswardrobes.uk",
    "https://www.wilkinswardrobes.uk",
    "https://wilkinswardrobes.co.uk",
    "https://www.wilkinswardrobes.co.uk",
];

/// Any `https://<site>.squarespace.com` origin is also allowed (editor previews).
const ALLOWED_PARENT_HOST_SUFFIX: &str = ".squarespace.com";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Lead {
    pub name: String,
    pub postcode: String,
    pub contact: String,
}

impl Lead {
    /// All three fields are required.
    pub fn validate(&self) -> Result<(), String> {
        let missing: Vec<&str> = [
            ("name", &self.name),
            ("postcode", &self.postcode),
            ("phone or email", &self.contact),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(format!("Please enter your {}", missing.join(", ")))
        }
    }
}

#[derive(Serialize)]
struct LeadMessage<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    lead: &'a Lead,
    guide_price: Option<String>,
    quote: &'a EstimatorSnapshot,
    submitted_at: String,
}

pub fn post_lead(lead: &Lead, quote: &EstimatorSnapshot) -> Result<(), String> {
    lead.validate()?;

    let window = web_sys::window().ok_or_else(|| "No browser window".to_string())?;
    let own_origin = window.location().origin().map_err(js_error)?;
    let parent = window.parent().map_err(js_error)?.filter(|p| *p != window);

    let (target, target_origin) = match parent {
        Some(parent) => {
            let referrer = window
                .document()
                .map(|doc| doc.referrer())
                .unwrap_or_default();
            let origin = referrer_origin(&referrer)
                .ok_or_else(|| "Cannot verify the page this form is embedded in".to_string())?
                .to_string();
            if !is_allowed_parent_origin(&origin, &own_origin) {
                return Err(format!("This form cannot send details to {}", origin));
            }
            (parent, origin)
        }
        None => (window, own_origin),
    };

    let message = LeadMessage {
        kind: LEAD_MESSAGE_TYPE,
        lead,
        guide_price: quote.show_quote.then(|| format_gbp(quote.price.total)),
        quote,
        submitted_at: String::from(js_sys::Date::new_0().to_iso_string()),
    };
    let payload = serde_wasm_bindgen::to_value(&message).map_err(|e| e.to_string())?;

    target.post_message(&payload, &target_origin).map_err(js_error)
}

/// Scheme, host and port of a referrer URL, e.g. `https://example.com:8443`.
fn referrer_origin(referrer: &str) -> Option<&str> {
    let host_start = referrer.find("://")? + 3;
    let host_len = referrer[host_start..]
        .find(|c: char| matches!(c, '/' | '?' | '#'))
        .unwrap_or(referrer.len() - host_start);
    if host_len == 0 {
        return None;
    }
    Some(&referrer[..host_start + host_len])
}

fn is_allowed_parent_origin(origin: &str, own_origin: &str) -> bool {
    if origin == own_origin || ALLOWED_PARENT_ORIGINS.contains(&origin) {
        return true;
    }
    origin
        .strip_prefix("https://")
        .and_then(|host| host.strip_suffix(ALLOWED_PARENT_HOST_SUFFIX))
        .is_some_and(|site| {
            !site.is_empty()
                && !site.starts_with('.')
                && site
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
        })
}

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| "Unknown error".to_string())
}
