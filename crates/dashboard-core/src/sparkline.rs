// File: crates/dashboard-core/src/sparkline.rs
// Summary: Series-to-path transform: samples -> points, line path and closed area path.

use std::fmt;

use crate::error::Result;
use crate::geometry::Point;
use crate::scale::SeriesScale;
use crate::types::Surface;

/// One SVG path command. Displays as `M x y`, `L x y` or `Z`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M {p}"),
            PathCommand::LineTo(p) => write!(f, "L {p}"),
            PathCommand::Close => f.write_str("Z"),
        }
    }
}

/// Ordered path commands; displays as the `d` attribute text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub commands: Vec<PathCommand>,
}

impl Path {
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{cmd}")?;
        }
        Ok(())
    }
}

/// A sample series projected onto a drawing surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Sparkline {
    surface: Surface,
    scale: SeriesScale,
    points: Vec<Point>,
    line: Path,
    area: Path,
}

impl Sparkline {
    /// Project `samples` onto `surface`.
    ///
    /// `x = i * width / max(n - 1, 1)` and `y = height - (v - min) / range * height`,
    /// with `range` forced to 1 for a flat series. Fails on an empty series, a
    /// non-finite sample or a degenerate surface.
    pub fn compute(samples: &[f64], surface: Surface) -> Result<Self> {
        let scale = SeriesScale::fit(samples, surface)?;
        let points: Vec<Point> = samples
            .iter()
            .enumerate()
            .map(|(i, &v)| Point::new(scale.x.to_px(i), scale.y.to_px(v)))
            .collect();

        let line = Path {
            commands: points
                .iter()
                .enumerate()
                .map(|(i, &p)| if i == 0 { PathCommand::MoveTo(p) } else { PathCommand::LineTo(p) })
                .collect(),
        };

        // Start at the bottom-left corner, trace the line, drop to the bottom-right corner.
        let mut area = Vec::with_capacity(points.len() + 3);
        area.push(PathCommand::MoveTo(Point::new(0.0, surface.height)));
        area.extend(points.iter().map(|&p| PathCommand::LineTo(p)));
        area.push(PathCommand::LineTo(Point::new(surface.width, surface.height)));
        area.push(PathCommand::Close);

        Ok(Self { surface, scale, points, line, area: Path { commands: area } })
    }

    pub fn surface(&self) -> Surface { self.surface }
    pub fn points(&self) -> &[Point] { &self.points }
    pub fn line_path(&self) -> &Path { &self.line }
    pub fn area_path(&self) -> &Path { &self.area }
    pub fn min(&self) -> f64 { self.scale.y.min }
    pub fn max(&self) -> f64 { self.scale.y.max }
}
