//! This example prints every text artifact of one projection of the built-in catalog.
//!
//! Run it with the projection id as the only argument. Without an argument, all ids of the
//! catalog are listed.
//!
//! ```shell
//! cargo run --example formats -- nicolosi-globular
//! ```

use anyhow::{anyhow, Result};
use clearinghouse::format::{self, Compatibility};
use clearinghouse::Registry;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let registry = Registry::builtin();

    let Some(id) = std::env::args().nth(1) else {
        log::info!("No projection id given, available projections:");
        for definition in registry.iter() {
            println!("{:<28}{}", definition.id(), definition.name());
        }
        return Ok(());
    };

    let definition = registry
        .get(&id)
        .ok_or_else(|| anyhow!("Unknown projection id {id}"))?;

    println!("{}", definition.name());
    if let Some(era) = definition.era() {
        println!("Invented {era}");
    }
    println!();

    for (label, value) in format::summary(definition) {
        println!("{label:<20}{value}");
    }

    match format::vendor_wkt(definition).compatibility {
        Compatibility::FullySupported { wkid } => println!("\nESRI WKID {wkid}"),
        Compatibility::Limited { proj_string } => {
            println!("\nNo ESRI WKID, use the PROJ string: {proj_string}")
        }
        Compatibility::Unsupported => println!("\nNot supported by ESRI software"),
    }

    for (key, text) in registry.render_all(&id)? {
        let file = key
            .file_name(definition.id())
            .map(|name| format!(" ({name})"))
            .unwrap_or_default();
        println!("\n== {}{file} ==\n{text}", key.label());
    }

    Ok(())
}
