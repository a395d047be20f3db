//! This example projects a 15 degree graticule with one of the projections that have a forward
//! transform and writes the result as CSV to the standard output.
//!
//! ```shell
//! cargo run --example graticule -- robinson > robinson.csv
//! ```

use anyhow::Result;
use clearinghouse::Registry;
use clearinghouse_types::geo::Datum;

const STEP: usize = 15;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "nicolosi-globular".to_string());
    let registry = Registry::builtin();
    let radius = Datum::SPHERE.semimajor();

    let mut writer = csv::Writer::from_writer(std::io::stdout());
    writer.write_record(["lat", "lon", "x", "y"])?;

    let mut count = 0;
    for lat in (-90..=90).step_by(STEP) {
        for lon in (-180..=180).step_by(STEP) {
            let point = registry.project(&id, lat as f64, lon as f64, radius)?;
            if !point.x.is_finite() || !point.y.is_finite() {
                log::warn!("Point ({lat}, {lon}) cannot be projected with {id}");
                continue;
            }

            writer.write_record(&[
                lat.to_string(),
                lon.to_string(),
                format!("{:.3}", point.x),
                format!("{:.3}", point.y),
            ])?;
            count += 1;
        }
    }

    writer.flush()?;
    log::info!("Projected {count} graticule nodes with {id}");

    Ok(())
}
