//! SVG export of assembled geometry and the solution overlay
//!
//! Mirrors the project's reference rendering: a light unit grid, the wall
//! polygons as solid dark paths, and the solution graph as red segments
//! between linked node centers. Pixel-exact appearance is not a goal; the
//! writer exists so generated layouts can be eyeballed quickly.

use crate::algorithm::graph::SolutionGraph;
use crate::io::configuration::{SVG_BOUNDS_PADDING, SVG_VIEWPORT_SIZE};
use crate::io::error::{Result, file_system_error};
use crate::spatial::geometry::Polygon;
use std::fmt::Write as _;
use std::path::Path;

#[derive(Debug)]
struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    fn over(polygons: &[Polygon], fallback_extent: f64) -> Self {
        let mut bounds = Self {
            min_x: f64::MAX,
            min_y: f64::MAX,
            max_x: f64::MIN,
            max_y: f64::MIN,
        };
        for polygon in polygons {
            for point in &polygon.points {
                bounds.min_x = bounds.min_x.min(point.x);
                bounds.min_y = bounds.min_y.min(point.y);
                bounds.max_x = bounds.max_x.max(point.x);
                bounds.max_y = bounds.max_y.max(point.y);
            }
        }
        if bounds.min_x > bounds.max_x {
            // no geometry at all: frame the bare grid instead
            bounds.min_x = 0.0;
            bounds.min_y = 0.0;
            bounds.max_x = fallback_extent;
            bounds.max_y = fallback_extent;
        }
        bounds.min_x -= SVG_BOUNDS_PADDING;
        bounds.min_y -= SVG_BOUNDS_PADDING;
        bounds.max_x += SVG_BOUNDS_PADDING;
        bounds.max_y += SVG_BOUNDS_PADDING;
        bounds
    }

    fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

fn render(polygons: &[Polygon], graph: &SolutionGraph, dim: usize) -> String {
    let bounds = Bounds::over(polygons, dim as f64);
    let mut svg = String::new();

    let _ = write!(
        svg,
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" \
         viewBox=\"{:.3} {:.3} {:.3} {:.3}\">\n\
         \x20   <rect width=\"100%\" height=\"100%\" fill=\"#f8f8f8\"/>\n",
        bounds.min_x,
        bounds.min_y,
        bounds.width(),
        bounds.height(),
        size = SVG_VIEWPORT_SIZE,
    );

    svg.push_str("    <g stroke=\"#bbb\" stroke-width=\"0.02\">\n");
    for line in 0..=dim {
        let offset = line as f64;
        let _ = writeln!(
            svg,
            "        <line x1=\"{offset}\" y1=\"0\" x2=\"{offset}\" y2=\"{dim}\" />"
        );
        let _ = writeln!(
            svg,
            "        <line x1=\"0\" y1=\"{offset}\" x2=\"{dim}\" y2=\"{offset}\" />"
        );
    }
    svg.push_str("    </g>\n");
    svg.push_str("    <circle cx=\"0\" cy=\"0\" r=\"0.2\" fill=\"red\"/>\n");

    svg.push_str("    <g stroke=\"#d22\" stroke-width=\"0.05\">\n");
    for (from, to) in graph.neighbor_pairs() {
        let segment = graph.node(from).zip(graph.node(to));
        if let Some((a, b)) = segment {
            let _ = writeln!(
                svg,
                "        <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" />",
                a.position.x, a.position.y, b.position.x, b.position.y
            );
        }
    }
    svg.push_str("    </g>\n");

    for polygon in polygons {
        if polygon.is_empty() {
            continue;
        }
        svg.push_str("    <path d=\"M ");
        for (index, point) in polygon.points.iter().enumerate() {
            if index > 0 {
                svg.push_str(" L ");
            }
            let _ = write!(svg, "{},{}", point.x, point.y);
        }
        svg.push_str(" Z\" fill=\"#333333\" stroke=\"none\"/>\n");
    }

    svg.push_str("</svg>");
    svg
}

/// Write geometry and solution overlay to an SVG file
///
/// # Errors
///
/// Returns [`crate::io::error::GeneratorError::FileSystem`] when the file
/// cannot be written.
pub fn export_svg(
    polygons: &[Polygon],
    graph: &SolutionGraph,
    dim: usize,
    path: &Path,
) -> Result<()> {
    let svg = render(polygons, graph, dim);
    std::fs::write(path, svg).map_err(|source| file_system_error(path, "write", source))
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::algorithm::graph::SolutionGraph;
    use crate::spatial::geometry::{Point, Polygon};

    #[test]
    fn rendering_includes_polygons_and_grid() {
        let polygons = vec![Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ])];
        let svg = render(&polygons, &SolutionGraph::default(), 2);
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("<path d=\"M 0,0 L 1,0 L 1,1 Z\""));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn empty_scenes_still_frame_the_grid() {
        let svg = render(&[], &SolutionGraph::default(), 3);
        assert!(svg.contains("viewBox"));
        assert!(svg.contains("<line"));
    }
}
