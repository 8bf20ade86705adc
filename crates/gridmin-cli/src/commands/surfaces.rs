use crate::error::Result;
use gridmin::core::surfaces::SurfaceKind;
use std::fmt::Write;

pub fn run() -> Result<()> {
    print!("{}", render_listing());
    Ok(())
}

fn render_listing() -> String {
    let mut out = String::new();
    for kind in SurfaceKind::ALL {
        let surface = kind.surface();
        let domain = surface.domain();
        let _ = writeln!(
            out,
            "{:<14} x in [{}, {}], y in [{}, {}]",
            surface.name(),
            domain.x.0,
            domain.x.1,
            domain.y.0,
            domain.y.1
        );
        let points = [("minimum", surface.minima()), ("saddle", surface.saddles())];
        for (kind, coordinates) in points {
            for (i, &(x, y)) in coordinates.iter().enumerate() {
                let [gx, gy] = surface.gradient(x, y);
                let _ = writeln!(
                    out,
                    "{:<14} {} {}: ({}, {})  f = {:.4}  |grad f| = {:.2e}",
                    "",
                    kind,
                    i,
                    x,
                    y,
                    surface.evaluate(x, y),
                    gx.hypot(gy)
                );
            }
        }
    }
    out
}
