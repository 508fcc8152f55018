use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use wardrobe_core::money::{finish_label, format_gbp};
use wardrobe_core::pricing::{
    default_pricing, load_pricing, BandResolver, Finish, PricingConfig, Tariff,
};
use wardrobe_core::{EstimatorSnapshot, QuoteRequest};

/// Guide price for a made-to-measure sliding wardrobe.
#[derive(Parser, Debug)]
#[command(name = "wardrobe-quote", version, about)]
struct Args {
    /// Opening width in millimetres
    #[arg(long)]
    width: Option<f64>,

    /// Opening height in millimetres (preview only, no effect on price)
    #[arg(long)]
    height: Option<f64>,

    /// Door count; must be one the width allows. Defaults to the minimum
    #[arg(long)]
    doors: Option<u32>,

    /// Per-door finishes in door order, e.g. mirror,glass,wood
    #[arg(long = "finish", value_delimiter = ',')]
    finishes: Vec<Finish>,

    /// Include interior fit-out
    #[arg(long)]
    interior: bool,

    /// Include exterior work
    #[arg(long)]
    exterior: bool,

    /// Override price list (TOML)
    #[arg(long)]
    pricing: Option<PathBuf>,

    /// Print the full snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let pricing = match &args.pricing {
        Some(path) => load_pricing(path)
            .with_context(|| format!("Failed to load pricing from {}", path.display()))?,
        None => default_pricing(),
    };

    print!("{}", run(&args, pricing)?);
    Ok(())
}

/// Quote the request described by `args` and render it for stdout.
fn run(args: &Args, pricing: PricingConfig) -> Result<String> {
    let resolver = BandResolver::new(pricing.bands.clone());
    let (min_width, max_width) = resolver
        .domain()
        .context("Price list has no width bands")?;

    if let Some(doors) = args.doors {
        let band = resolver.resolve(args.width);
        let options = band.door_options();
        if options.is_empty() {
            bail!(
                "--doors {} needs a --width between {}mm and {}mm",
                doors,
                min_width,
                max_width
            );
        }
        if !options.contains(&doors) {
            let allowed: Vec<String> = options.iter().map(u32::to_string).collect();
            bail!(
                "--doors {} is not offered for a {} opening, choose one of {}",
                doors,
                band.label,
                allowed.join(", ")
            );
        }
    }

    let tariff = pricing.tariff.clone();
    let request = QuoteRequest {
        width_mm: args.width,
        height_mm: args.height,
        doors: args.doors,
        finishes: args.finishes.clone(),
        include_interior: args.interior,
        include_exterior: args.exterior,
    };
    let snapshot = request.quote(pricing)?;
    info!(
        "Quoted {} door(s) in band '{}'",
        snapshot.configuration.doors, snapshot.band.label
    );

    if args.json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&snapshot)?));
    }

    if !snapshot.show_quote {
        return Ok(format!(
            "Enter a width between {}mm and {}mm to see a guide price.\n",
            min_width, max_width
        ));
    }

    render_quote(&snapshot, &tariff)
}

fn render_quote(snapshot: &EstimatorSnapshot, tariff: &Tariff) -> Result<String> {
    let config = &snapshot.configuration;
    let price = &snapshot.price;
    let mut out = String::new();

    writeln!(out, "Size band:   {}", snapshot.band.label)?;
    writeln!(out, "Doors:       {}", config.doors)?;
    for (i, finish) in config.finishes.iter().enumerate() {
        writeln!(out, "  Door {}:    {}", i + 1, finish_label(*finish, tariff))?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Base ({} doors, mirror, fitting): {:>8}",
        tariff.included_doors,
        format_gbp(tariff.base.into())
    )?;
    writeln!(out, "Extra doors:      {:>8}", format_gbp(price.extra_doors_cost))?;
    writeln!(out, "Finish upgrades:  {:>8}", format_gbp(price.upgrades_cost))?;
    writeln!(out, "Interior:         {:>8}", format_gbp(price.interior_cost))?;
    writeln!(out, "Exterior:         {:>8}", format_gbp(price.exterior_cost))?;
    writeln!(out, "Guide price:      {:>8}", format_gbp(price.total))?;
    Ok(out)
}
