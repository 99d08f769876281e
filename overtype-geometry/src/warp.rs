//! Per-character placement along parametric warp paths.
//!
//! Coordinates are screen-space (y grows downward), relative to the
//! layer anchor. Path angles are measured from the upward vertical
//! through the anchor, so `θ = 0` is the top of a circle and positive
//! angles sweep clockwise on screen.

use overtype_core::{Warp, WarpPath};

/// Amplitude of the wave path as a fraction of the warp radius.
const WAVE_AMPLITUDE: f32 = 0.3;

/// Fraction of the warp radius the spiral reaches at `t = 1`.
const SPIRAL_REACH: f32 = 0.8;

/// Full turns of the spiral path.
const SPIRAL_TURNS: f32 = 3.0;

/// Inner-vertex radius of the star path, as a fraction of the outer radius.
const STAR_INNER: f32 = 0.4;

/// Vertical excursion of the zigzag path, as a fraction of the radius.
const ZIGZAG_AMPLITUDE: f32 = 0.4;

/// Position and rotation of one character on a warp path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WarpPoint {
    /// Offset from the layer anchor, x axis.
    pub x: f32,
    /// Offset from the layer anchor, y axis (screen-down).
    pub y: f32,
    /// Character rotation in degrees.
    pub rotation: f32,
}

/// Evaluate the warp path at progress `t ∈ [0, 1]`.
///
/// `t` is `character index / max(char count − 1, 1)`. Unrecognized or
/// custom paths fall back to the arc formula.
pub fn warp_point(t: f32, warp: &Warp) -> WarpPoint {
    match warp.path {
        WarpPath::Arc | WarpPath::Custom => arc(t, warp.radius, warp.angle),
        WarpPath::Circle => circle(t, warp.radius),
        WarpPath::Wave => wave(t, warp.radius, warp.angle),
        WarpPath::Spiral => spiral(t, warp.radius),
        WarpPath::Zigzag => zigzag(t, warp.radius, warp.angle),
        WarpPath::Heart => heart(t, warp.radius),
        WarpPath::Star => star(t, warp.radius),
    }
}

/// Arc: endpoints at ±angle/2 around the anchor, midpoint at the top.
/// Rotation is the tangent direction (tangent angle + 90° = θ).
fn arc(t: f32, radius: f32, angle: f32) -> WarpPoint {
    let theta_deg = (t - 0.5) * angle;
    let theta = theta_deg.to_radians();
    WarpPoint {
        x: radius * theta.sin(),
        y: -radius * theta.cos(),
        rotation: theta_deg,
    }
}

/// Full 360° traversal with the arc tangent rule.
fn circle(t: f32, radius: f32) -> WarpPoint {
    let theta_deg = t * 360.0;
    let theta = theta_deg.to_radians();
    WarpPoint {
        x: radius * theta.sin(),
        y: -radius * theta.cos(),
        rotation: theta_deg,
    }
}

/// Wave: x sweeps −r..+r, y is a half-sine bump per lobe, rotation is a
/// cosine tilt capped at ±45°. The angle picks the lobe count.
fn wave(t: f32, radius: f32, angle: f32) -> WarpPoint {
    let lobes = ((angle / 60.0).floor() as i32).max(1) as f32;
    let phase = std::f32::consts::PI * lobes * t;
    WarpPoint {
        x: -radius + t * 2.0 * radius,
        y: -phase.sin() * WAVE_AMPLITUDE * radius,
        rotation: phase.cos() * 45.0,
    }
}

/// Spiral: 3 turns, radius growing linearly to 0.8·r, rotation from the
/// analytic tangent of the Archimedean curve.
fn spiral(t: f32, radius: f32) -> WarpPoint {
    let omega = SPIRAL_TURNS * std::f32::consts::TAU;
    let theta = t * omega;
    let r = t * SPIRAL_REACH * radius;
    let growth = SPIRAL_REACH * radius;

    let dx = growth * theta.cos() - r * omega * theta.sin();
    let dy = growth * theta.sin() + r * omega * theta.cos();
    WarpPoint {
        x: r * theta.cos(),
        y: r * theta.sin(),
        rotation: dy.atan2(dx).to_degrees(),
    }
}

/// Zigzag: alternating vertices at ±0.4·r, linear in between, no tilt.
/// The angle picks the segment count (minimum 2).
fn zigzag(t: f32, radius: f32, angle: f32) -> WarpPoint {
    let segments = ((angle / 45.0).floor() as i32).max(2);
    let p = t * segments as f32;
    let i = (p.floor() as i32).min(segments - 1);
    let frac = p - i as f32;

    let vertex = |j: i32| -> f32 {
        if j % 2 == 0 {
            ZIGZAG_AMPLITUDE * radius
        } else {
            -ZIGZAG_AMPLITUDE * radius
        }
    };
    let y = vertex(i) + (vertex(i + 1) - vertex(i)) * frac;
    WarpPoint {
        x: -radius + t * 2.0 * radius,
        y,
        rotation: 0.0,
    }
}

/// Heart: the standard parametric heart (16 sin³θ, 13 cosθ − 5 cos2θ −
/// 2 cos3θ − cos4θ) scaled by r/50, y flipped for screen space.
fn heart(t: f32, radius: f32) -> WarpPoint {
    let scale = radius / 50.0;
    let theta = t * std::f32::consts::TAU;
    let sin = theta.sin();
    let x = 16.0 * sin * sin * sin * scale;
    let y_math = 13.0 * theta.cos()
        - 5.0 * (2.0 * theta).cos()
        - 2.0 * (3.0 * theta).cos()
        - (4.0 * theta).cos();

    let dx = 48.0 * sin * sin * theta.cos();
    let dy_math = -13.0 * sin
        + 10.0 * (2.0 * theta).sin()
        + 6.0 * (3.0 * theta).sin()
        + 4.0 * (4.0 * theta).sin();

    WarpPoint {
        x,
        y: -y_math * scale,
        rotation: (-dy_math).atan2(dx).to_degrees(),
    }
}

/// Star: 5 points, 10 vertices alternating outer and 0.4·r inner radius,
/// starting at the top and closing back on itself. Radius and angle are
/// interpolated linearly between successive vertices; rotation follows
/// the active edge.
fn star(t: f32, radius: f32) -> WarpPoint {
    const VERTICES: i32 = 10;
    let p = t * VERTICES as f32;
    let i = (p.floor() as i32).min(VERTICES - 1);
    let frac = p - i as f32;

    let vertex_radius = |j: i32| -> f32 {
        if j % 2 == 0 {
            radius
        } else {
            STAR_INNER * radius
        }
    };
    let vertex_angle = |j: i32| -> f32 { -90.0 + j as f32 * 36.0 };

    let r = vertex_radius(i) + (vertex_radius(i + 1) - vertex_radius(i)) * frac;
    let a_deg = vertex_angle(i) + (vertex_angle(i + 1) - vertex_angle(i)) * frac;
    let a = a_deg.to_radians();

    let from = polar(vertex_radius(i), vertex_angle(i));
    let to = polar(vertex_radius(i + 1), vertex_angle(i + 1));
    WarpPoint {
        x: r * a.cos(),
        y: r * a.sin(),
        rotation: (to.1 - from.1).atan2(to.0 - from.0).to_degrees(),
    }
}

#[inline]
fn polar(r: f32, angle_deg: f32) -> (f32, f32) {
    let a = angle_deg.to_radians();
    (r * a.cos(), r * a.sin())
}
