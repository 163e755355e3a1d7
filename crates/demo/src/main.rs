// File: crates/demo/src/main.rs
// Summary: Demo loads XY points from CSV, lays out a chart and writes an SVG preview.

use anyhow::{Context, Result};
use env_logger::Env;
use log::{info, warn};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use xygraph_core::path::to_svg_path_data;
use xygraph_core::{fit_cubic_spline, Axis, Chart, ChartLayout, CurveStyle, LayoutOptions, Point, Series};

struct Args {
    input: PathBuf,
    config: Option<PathBuf>,
    curve: CurveStyle,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = parse_args()?;
    let opts = match &args.config {
        Some(path) => load_options(path)?,
        None => LayoutOptions::default(),
    };

    let (headers, points) = load_xy_csv(&args.input)
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    info!("Loaded {} points from {}", points.len(), args.input.display());
    if points.is_empty() {
        anyhow::bail!("no points loaded; check headers/delimiter.");
    }

    let mut chart = Chart::new();
    chart.x_axis = Axis::new(headers.0);
    chart.y_axis = Axis::new(headers.1);
    let stem = args.input.file_stem().and_then(|s| s.to_str()).unwrap_or("series");
    chart.add_series(Series::new(points.clone()).with_description(stem).with_curve(args.curve));

    let layout = chart.layout(&opts).context("chart layout")?;
    println!("X ticks: {:?}", layout.x_ticks.labels);
    println!("Y ticks: {:?}", layout.y_ticks.labels);

    if args.curve == CurveStyle::Spline {
        match fit_cubic_spline(&points) {
            Ok(cp) => {
                for (i, (a, b)) in cp.segments().enumerate() {
                    println!("segment {i}: c1=({:.4}, {:.4}) c2=({:.4}, {:.4})", a.x, a.y, b.x, b.y);
                }
            }
            Err(e) => warn!("no spline: {e}"),
        }
    }

    let out = out_name_for(&args.input);
    std::fs::write(&out, render_svg(&chart, &layout, &opts))
        .with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn parse_args() -> Result<Args> {
    let mut input = None;
    let mut config = None;
    let mut curve = CurveStyle::Spline;
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => config = Some(PathBuf::from(it.next().context("--config needs a path")?)),
            "--curve" => {
                let v = it.next().context("--curve needs a value")?;
                curve = v.parse().map_err(anyhow::Error::msg)?;
            }
            other if input.is_none() => input = Some(PathBuf::from(other)),
            other => anyhow::bail!("unexpected argument '{other}'"),
        }
    }
    let input = input.context("usage: xygraph-demo <points.csv> [--config layout.json] [--curve linear|bicubic|spline]")?;
    Ok(Args { input, config, curve })
}

/// Layout options from JSON; missing fields keep their defaults.
fn load_options(path: &Path) -> Result<LayoutOptions> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let opts: LayoutOptions = serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    info!("Layout options: {opts:?}");
    Ok(opts)
}

/// Load the first two numeric columns of a CSV with a header row.
/// Returns the two column names and the parsed points; unparsable rows are skipped.
fn load_xy_csv(path: &Path) -> Result<((String, String), Vec<Point>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.clone();
    if headers.len() < 2 {
        anyhow::bail!("expected at least two columns, found {}", headers.len());
    }
    let names = (headers[0].to_string(), headers[1].to_string());

    let mut points = Vec::new();
    let mut skipped = 0usize;
    for record in rdr.records() {
        let record = record?;
        let x = record.get(0).and_then(|s| s.parse::<f64>().ok());
        let y = record.get(1).and_then(|s| s.parse::<f64>().ok());
        match (x, y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => points.push(Point::new(x, y)),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!("skipped {skipped} rows without two finite numbers");
    }
    Ok((names, points))
}

/// Produce output file name like target/out/graph_<stem>.svg
fn out_name_for(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("graph_{stem}.svg"));
    out
}

fn render_svg(chart: &Chart, layout: &ChartLayout, opts: &LayoutOptions) -> String {
    let p = &layout.plot;
    let g = opts.glyph_width;
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" font-family="monospace" font-size="{}">"#,
        opts.width, opts.height, g
    );

    // Grid and tick labels
    for (label, &x) in layout.x_ticks.labels.iter().zip(&layout.x_tick_px) {
        let _ = writeln!(svg, r##"<line x1="{x}" y1="{}" x2="{x}" y2="{}" stroke="#ccc"/>"##, p.top, p.bottom + g);
        let _ = writeln!(svg, r#"<text x="{x}" y="{}" text-anchor="middle">{}</text>"#, p.bottom + g * 2.0 + opts.line_height * 0.5, xml_escape(label));
    }
    for (label, &y) in layout.y_ticks.labels.iter().zip(&layout.y_tick_px) {
        let _ = writeln!(svg, r##"<line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="#ccc"/>"##, p.left - g, p.right);
        let _ = writeln!(svg, r#"<text x="{}" y="{y}" text-anchor="end" dominant-baseline="middle">{}</text>"#, p.left - g * 2.0, xml_escape(label));
    }

    // Axes
    let _ = writeln!(svg, r#"<path d="M{} {} L{} {} L{} {}" fill="none" stroke="black" stroke-width="2"/>"#,
        p.left, p.top, p.left, p.bottom, p.right, p.bottom);

    // Titles
    let x_title = chart.x_axis.title();
    if !x_title.is_empty() {
        let _ = writeln!(svg, r#"<text x="{}" y="{}" text-anchor="middle">{}</text>"#, (p.left + p.right) / 2.0, opts.height - 2.0, xml_escape(&x_title));
    }
    let y_title = chart.y_axis.title();
    if !y_title.is_empty() {
        let cy = (p.top + p.bottom) / 2.0;
        let _ = writeln!(svg, r#"<text x="{}" y="{cy}" text-anchor="middle" transform="rotate(-90 {} {cy})">{}</text>"#, opts.line_height, opts.line_height, xml_escape(&y_title));
    }

    // Series
    for (series, sl) in chart.series.iter().zip(&layout.series) {
        if !series.description.is_empty() {
            let _ = writeln!(svg, "<!-- {} -->", xml_escape(&series.description).replace("--", "- -"));
        }
        if !sl.path.is_empty() {
            let _ = writeln!(svg, r#"<path d="{}" fill="none" stroke="steelblue" stroke-width="2"/>"#, to_svg_path_data(&sl.path));
        }
        if series.show_points {
            for pt in &sl.points {
                let _ = writeln!(svg, r#"<circle cx="{:.2}" cy="{:.2}" r="3"/>"#, pt.x, pt.y);
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Escape text for use inside SVG elements.
fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
