// File: crates/dashboard-examples/src/bin/sparkline.rs
// Summary: Minimal example that projects a short series and writes the sparkline SVG.

use dashboard_core::{sparkline_svg, Sparkline, Surface};

fn main() {
    let samples = [12.0, 18.0, 9.0, 22.0, 27.0, 24.0, 31.0];

    let sparkline = Sparkline::compute(&samples, Surface::new(240.0, 80.0)).expect("non-empty series");
    println!("line: {}", sparkline.line_path());
    println!("area: {}", sparkline.area_path());

    let out = std::path::PathBuf::from("target/out/example_sparkline.svg");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    std::fs::write(&out, sparkline_svg(&sparkline).expect("svg markup")).expect("write svg");
    println!("Wrote {}", out.display());
}
