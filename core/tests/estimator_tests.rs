use std::io::Write;
use std::path::PathBuf;

use wardrobe_core::money::format_gbp;
use wardrobe_core::pricing::{default_pricing, load_pricing, BandResolver, Finish};
use wardrobe_core::{Estimator, EstimatorError, EstimatorInput, QuoteRequest};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn apply_all(est: &mut Estimator, inputs: Vec<EstimatorInput>) {
    for input in inputs {
        est.apply(input).expect("input should be accepted");
    }
}

#[test]
fn test_visitor_session_end_to_end() {
    let mut est = Estimator::new();

    // Height first: nothing to quote yet.
    est.apply(EstimatorInput::Height(Some(2400.0))).unwrap();
    assert!(!est.show_quote());

    apply_all(
        &mut est,
        vec![
            EstimatorInput::Width(Some(3800.0)),
            EstimatorInput::Finish {
                index: 2,
                finish: Finish::Glass,
            },
            EstimatorInput::Finish {
                index: 3,
                finish: Finish::Wood,
            },
            EstimatorInput::Interior(true),
        ],
    );

    let snap = est.snapshot();
    assert_eq!(snap.band.label, "3600–4799mm");
    assert_eq!(snap.door_options, vec![4, 5]);
    assert_eq!(snap.configuration.doors, 4);
    assert_eq!(snap.price.extra_doors_cost, 800);
    assert_eq!(snap.price.upgrades_cost, 270);
    assert_eq!(snap.price.interior_cost, 450);
    assert_eq!(snap.price.total, 2315);
    assert_eq!(format_gbp(snap.price.total), "£2,315");
    assert!(snap.show_quote);
}

#[test]
fn test_width_out_of_range_then_back() {
    let mut est = Estimator::new();
    apply_all(
        &mut est,
        vec![
            EstimatorInput::Width(Some(5000.0)),
            EstimatorInput::Doors(6),
            EstimatorInput::Finish {
                index: 5,
                finish: Finish::Wood,
            },
        ],
    );
    assert_eq!(est.price().total, 795 + 4 * 400 + 150);

    est.apply(EstimatorInput::Width(Some(5200.0))).unwrap();
    assert_eq!(est.band().label, "Out of range");
    assert_eq!(est.configuration().doors, 0);
    assert!(!est.show_quote());

    // Coming back in range starts again from the band minimum.
    est.apply(EstimatorInput::Width(Some(5100.0))).unwrap();
    assert_eq!(est.configuration().doors, 5);
    assert_eq!(est.configuration().finishes, vec![Finish::Mirror; 5]);
}

#[test]
fn test_boundary_widths() {
    let cases = [
        (799.0, 0, 0),
        (800.0, 2, 3),
        (2399.0, 2, 3),
        (2400.0, 3, 4),
        (5199.0, 5, 6),
        (5200.0, 0, 0),
    ];
    for (width, min, max) in cases {
        let mut est = Estimator::new();
        est.apply(EstimatorInput::Width(Some(width))).unwrap();
        assert_eq!(
            (est.band().min_doors, est.band().max_doors),
            (min, max),
            "Unexpected band for width {}",
            width
        );
    }
}

#[test]
fn test_load_trade_pricing_fixture() {
    let pricing = load_pricing(&fixture_path("trade_pricing.toml")).expect("fixture should load");
    assert_eq!(
        BandResolver::new(pricing.bands.clone()).domain(),
        Some((1200, 4499))
    );

    let snap = QuoteRequest {
        width_mm: Some(3200.0),
        finishes: vec![Finish::Glass],
        include_exterior: true,
        ..Default::default()
    }
    .quote(pricing)
    .unwrap();

    assert_eq!(snap.configuration.doors, 4);
    // One door beyond the three included, one glass upgrade, free exterior.
    assert_eq!(snap.price.extra_doors_cost, 300);
    assert_eq!(snap.price.upgrades_cost, 90);
    assert_eq!(snap.price.exterior_cost, 0);
    assert_eq!(snap.price.total, 1100 + 300 + 90);
}

#[test]
fn test_custom_domain_controls_range() {
    let pricing = load_pricing(&fixture_path("trade_pricing.toml")).unwrap();
    let mut est = Estimator::with_pricing(pricing);
    est.apply(EstimatorInput::Width(Some(1000.0))).unwrap();
    assert!(!est.width_in_range());
    assert!(est.band().is_out_of_range());
}

#[test]
fn test_overlapping_bands_are_rejected() {
    let err = load_pricing(&fixture_path("overlapping_bands.toml")).unwrap_err();
    assert!(
        matches!(err, EstimatorError::InvalidPricing(_)),
        "Expected InvalidPricing, got {:?}",
        err
    );
}

#[test]
fn test_oversized_door_band_is_rejected() {
    let err = load_pricing(&fixture_path("oversized_door_band.toml")).unwrap_err();
    assert!(
        matches!(err, EstimatorError::InvalidPricing(_)),
        "Expected InvalidPricing, got {:?}",
        err
    );
}

#[test]
fn test_oversized_door_request_is_rejected() {
    let err = QuoteRequest {
        width_mm: Some(2000.0),
        doors: Some(20_000_000),
        ..Default::default()
    }
    .quote(default_pricing())
    .unwrap_err();
    assert!(matches!(err, EstimatorError::TooManyDoors { .. }));
}

#[test]
fn test_malformed_pricing_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[tariff]\nbase = \"lots\"").unwrap();

    let err = load_pricing(file.path()).unwrap_err();
    assert!(matches!(err, EstimatorError::PricingParse(_)));
}

#[test]
fn test_missing_pricing_file() {
    let err = load_pricing(&fixture_path("does_not_exist.toml")).unwrap_err();
    assert!(matches!(err, EstimatorError::Io(_)));
}

#[test]
fn test_embedded_pricing_round_trips_through_file() {
    let pricing = default_pricing();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", toml::to_string(&pricing).unwrap()).unwrap();

    let loaded = load_pricing(file.path()).unwrap();
    assert_eq!(loaded, pricing);
}
