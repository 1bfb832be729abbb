//! DXF Curve Kit.
//!
//! Rendert Kurven-Definitionen (TOML/JSON) als Polylinien und schreibt sie
//! als ENTITIES-Abschnitt einer ASCII-DXF-Datei.
//!
//! Aufruf: `dxf-curve-kit <kurven.toml|kurven.json> [ausgabe.dxf]`

use anyhow::{Context, Result};
use dxf_curve_kit::{load_curve_definitions, write_drawing, Curve, Drawing, DrawingOptions};
use std::path::PathBuf;

fn main() -> Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!("DXF Curve Kit v{} startet...", env!("CARGO_PKG_VERSION"));

        let mut args = std::env::args_os().skip(1);
        let input = args
            .next()
            .map(PathBuf::from)
            .context("Aufruf: dxf-curve-kit <kurven.toml|kurven.json> [ausgabe.dxf]")?;
        let output = args.next().map(PathBuf::from);

        let options = DrawingOptions::load_from_file(&DrawingOptions::config_path());
        let curves = load_curve_definitions(&input)?;
        let drawing = render_all(curves, &options)?;
        let dxf = write_drawing(&drawing, &options)?;

        match output {
            Some(path) => {
                std::fs::write(&path, dxf)
                    .with_context(|| format!("DXF nicht schreibbar: {}", path.display()))?;
                log::info!("DXF geschrieben nach: {}", path.display());
            }
            None => print!("{}", dxf),
        }
        Ok(())
    }
}

/// Rendert alle Kurven in eine neue Zeichnung, bricht bei der ersten fehlerhaften ab.
fn render_all(curves: Vec<Curve>, options: &DrawingOptions) -> Result<Drawing> {
    let mut drawing = Drawing::new();
    for (index, mut curve) in curves.into_iter().enumerate() {
        if let Curve::Bezier(bezier) = &mut curve {
            bezier.force3d |= options.force_3d;
        }
        curve
            .render(&mut drawing)
            .with_context(|| format!("Kurve {} ({}) nicht renderbar", index + 1, curve.name()))?;
    }
    Ok(drawing)
}
