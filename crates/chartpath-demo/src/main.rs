// File: crates/chartpath-demo/src/main.rs
// Summary: Demo loads a CSV series and emits SVG path data for every mode
//          combination, plus a marker line and a hit-test lookup.

use anyhow::{Context, Result};
use chartpath_core::{
    build, horizontal_marker, locate, pixel_position, plot_rect, Band, Insets, LineShape,
    PathOptions, Point, Series, ValueRange, ZeroPolicy, HEIGHT, WIDTH,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    // Accept a CSV path from the CLI or fall back to the bundled sample.
    let raw = std::env::args().nth(1).unwrap_or_else(|| {
        std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("samples/values.csv")
            .to_string_lossy()
            .into_owned()
    });
    let input = PathBuf::from(&raw);
    println!("Using input file: {}", input.display());

    let (values, bands) = load_csv(&input)
        .with_context(|| format!("failed to load CSV '{}'", input.display()))?;
    println!("Loaded {} samples", values.len());
    if values.len() < 2 {
        anyhow::bail!("need at least 2 samples to draw a line");
    }

    let series = Series::from_values("sample", values);
    let rect = plot_rect(WIDTH, HEIGHT, &Insets::default());
    let range = ValueRange::of_series(&series)
        .context("series has no finite values")?
        .padded(0.02);
    println!(
        "Value range: [{:.4}, {:.4}], plot rect {}x{}",
        range.min, range.max, rect.width, rect.height
    );

    let out_dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir)?;

    let modes: [(&str, LineShape, bool); 4] = [
        ("straight", LineShape::Straight, false),
        ("straight_filled", LineShape::Straight, true),
        ("curved", LineShape::Curved, false),
        ("curved_filled", LineShape::Curved, true),
    ];
    for (name, shape, filled) in modes {
        let opts = PathOptions { shape, zero: ZeroPolicy::Include, filled };
        let path = build(rect, &series, range, opts)?;
        let out = out_dir.join(format!("{name}.svgpath"));
        std::fs::write(&out, path.to_svg())?;
        println!("Wrote {} ({} commands)", out.display(), path.len());
    }

    // Banded region, when the CSV carries lower/upper columns.
    if let Some(bands) = bands {
        let band_series = Series::from_bands("sample-band", bands);
        let band_range = ValueRange::of_all(&[series.clone(), band_series.clone()])
            .context("band series has no finite values")?
            .padded(0.02);
        for (name, shape) in [("band", LineShape::Straight), ("band_curved", LineShape::Curved)] {
            let opts = PathOptions { shape, zero: ZeroPolicy::Include, filled: false };
            let path = build(rect, &band_series, band_range, opts)?;
            let out = out_dir.join(format!("{name}.svgpath"));
            std::fs::write(&out, path.to_svg())?;
            println!("Wrote {} ({} commands)", out.display(), path.len());
        }
    }

    // Average guide line across the plot.
    let mean = series.values().iter().sum::<f64>() / series.len() as f64;
    let marker = horizontal_marker(rect, mean, range)?;
    let out = out_dir.join("average.svgpath");
    std::fs::write(&out, marker.to_svg())?;
    println!("Wrote {} (average {:.4})", out.display(), mean);

    // Simulated pointer in the middle of the plot.
    let pointer = Point::new(rect.x + rect.width / 2.0, rect.mid_y());
    if let Some(hit) = locate(pointer, rect, &series) {
        println!("Pointer over series '{}' sample #{}", hit.series, hit.index);
        if let Some(p) = pixel_position(pointer, rect, &series, range) {
            println!("Marker position: ({:.1}, {:.1})", p.x, p.y);
        }
    }

    Ok(())
}

/// Load the `value` column, plus optional `lower`/`upper` columns for a
/// banded series. Header names are matched case-insensitively; a headerless
/// single-column file is read as values.
fn load_csv(path: &std::path::Path) -> Result<(Vec<f64>, Option<Vec<Band>>)> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let col = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));

    let value_col = col("value").unwrap_or(0);
    let band_cols = col("lower").zip(col("upper"));

    let mut values = Vec::new();
    let mut bands = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = record.get(value_col).unwrap_or("").trim();
        if field.is_empty() {
            continue;
        }
        values.push(
            field
                .parse::<f64>()
                .with_context(|| format!("bad value '{field}'"))?,
        );
        if let Some((lo, up)) = band_cols {
            let lower: f64 = record.get(lo).unwrap_or("").trim().parse()?;
            let upper: f64 = record.get(up).unwrap_or("").trim().parse()?;
            bands.push(Band::try_new(lower, upper).map_err(anyhow::Error::msg)?);
        }
    }
    Ok((values, band_cols.map(|_| bands)))
}
