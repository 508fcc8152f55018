//! Sizing and pricing engine for made-to-measure sliding wardrobes.
//!
//! This module turns an opening width and a door configuration into an
//! allowed door range and an itemised guide price.
//!
//! # Architecture
//!
//! - **Rules**: Tariff and width bands loaded from TOML (or embedded defaults)
//! - **Bands**: Width -> allowed door-count range, first match wins
//! - **Calculator**: Configuration -> itemised price, total over all inputs
//!
//! # Example
//!
//! ```ignore
//! use wardrobe_core::pricing::{default_pricing, BandResolver, Configuration, Finish, PriceCalculator};
//!
//! let pricing = default_pricing();
//! let band = BandResolver::new(pricing.bands.clone()).resolve(Some(3000.0));
//!
//! let config = Configuration {
//!     doors: band.min_doors,
//!     finishes: vec![Finish::Mirror, Finish::Glass, Finish::Wood],
//!     include_interior: true,
//!     include_exterior: false,
//! };
//!
//! let price = PriceCalculator::new(pricing.tariff).compute(&config);
//! println!("{} doors: {}", config.doors, price.total);
//! ```

mod bands;
mod calculator;
mod rules;
mod types;

pub use bands::BandResolver;
pub use calculator::PriceCalculator;
pub use rules::{default_pricing, load_pricing};
pub use types::*;
