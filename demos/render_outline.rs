//! Prints a multi-polygon as SVG path data at a few zoom levels.
//!
//! Usage:
//! ```text
//! cargo run --example render_outline
//! RUST_LOG=polyapprox=trace cargo run --example render_outline
//! ```

use std::fmt::Write as _;

use nalgebra::{Affine2, Matrix3};
use polyapprox::math::{Point2, Vector2};
use polyapprox::{Aabb2, ApproxShape, Approximation, RenderParams, SegmentKind};

/// A wobbly outer ring with a square hole.
fn sample_rings() -> Vec<Vec<Point2>> {
    let outer = (0..360)
        .map(|deg| {
            let t = f64::from(deg).to_radians();
            let r = 50.0 + 2.0 * (12.0 * t).sin();
            Point2::new(r * t.cos(), r * t.sin())
        })
        .collect();
    let hole = vec![
        Point2::new(-10.0, -10.0),
        Point2::new(10.0, -10.0),
        Point2::new(10.0, 10.0),
        Point2::new(-10.0, 10.0),
        Point2::new(-10.0, -10.0),
    ];
    vec![outer, hole]
}

fn main() {
    // Default: WARN for everything, INFO for polyapprox.
    // Override with RUST_LOG env var (e.g. RUST_LOG=polyapprox=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("polyapprox=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let shape = ApproxShape::from_rings(&sample_rings());
    let Some(bounds) = shape.bounds() else {
        return;
    };
    println!(
        "shape: {} vertices, {:.1} x {:.1} units",
        shape.store().len(),
        bounds.width(),
        bounds.height()
    );
    let center = Point2::new(
        bounds.min.x + bounds.width() / 2.0,
        bounds.min.y + bounds.height() / 2.0,
    );

    // A 400x300 pixel window centred on the origin, panned right by 30 units.
    for scale in [8.0, 1.0, 0.1] {
        let params = RenderParams {
            scale,
            pixel_tolerance: 1.0,
        };
        let half = Vector2::new(200.0 / scale, 150.0 / scale);
        let focus = Point2::new(30.0, 0.0);
        let viewport = Aabb2::new(focus - half, focus + half);
        if !shape.intersects(&viewport) {
            println!("scale {scale}: culled");
            continue;
        }

        let to_screen = Affine2::from_matrix_unchecked(Matrix3::new(
            scale, 0.0, 200.0 - scale * focus.x, 0.0, -scale, 150.0 + scale * focus.y, 0.0, 0.0,
            1.0,
        ));
        let cursor = shape.path_iter(Some(&to_screen), params.tolerance());
        let threshold = cursor.threshold();

        let mut data = String::new();
        let mut count = 0;
        for command in cursor {
            let op = match command.kind {
                SegmentKind::MoveTo => 'M',
                SegmentKind::LineTo => 'L',
            };
            write!(data, "{op}{:.1},{:.1} ", command.point.x, command.point.y).ok();
            count += 1;
        }

        println!(
            "scale {scale}: {count} commands, threshold {threshold:.4}, fill-rule {:?}, centre {}",
            shape.winding_rule(),
            if viewport.contains(&center) { "visible" } else { "off screen" }
        );
        println!("  d=\"{}\"", data.trim_end());
    }
}
