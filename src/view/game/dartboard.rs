use maud::{Markup, html};

use crate::model::{BOARD_SEGMENTS, OUTER_BULL};

const SIZE: f64 = 700.0;
const CENTER: f64 = SIZE / 2.0;
const RADIUS: f64 = SIZE * 0.42;
const SEGMENT_DEGREES: f64 = 18.0;

fn polar(angle_deg: f64, r: f64) -> (f64, f64) {
    let rad = (angle_deg - 90.0).to_radians();
    (CENTER + r * rad.cos(), CENTER + r * rad.sin())
}

/// Annular wedge between two radii over one segment's 18 degrees.
fn wedge_path(start_angle: f64, end_angle: f64, r_inner: f64, r_outer: f64) -> String {
    let (x1, y1) = polar(start_angle, r_inner);
    let (x2, y2) = polar(end_angle, r_inner);
    let (x3, y3) = polar(end_angle, r_outer);
    let (x4, y4) = polar(start_angle, r_outer);
    format!(
        "M {x1:.2} {y1:.2} A {ri:.2} {ri:.2} 0 0 1 {x2:.2} {y2:.2} \
         L {x3:.2} {y3:.2} A {ro:.2} {ro:.2} 0 0 0 {x4:.2} {y4:.2} Z",
        ri = r_inner,
        ro = r_outer,
    )
}

fn hit_url(value: i32, multiplier: i32) -> String {
    format!("hit?value={value}&multiplier={multiplier}")
}

fn render_segment(value: i32, index: usize) -> Markup {
    let start = index as f64 * SEGMENT_DEGREES - SEGMENT_DEGREES / 2.0;
    let end = start + SEGMENT_DEGREES;
    let (main, special) = if index % 2 == 0 {
        ("#1a1a1a", "#c0392b")
    } else {
        ("#e8dcc4", "#27ae60")
    };
    let (label_x, label_y) = polar(index as f64 * SEGMENT_DEGREES, RADIUS * 1.1);

    html! {
        g class="segment" {
            // double ring
            path d=(wedge_path(start, end, RADIUS * 0.92, RADIUS))
                fill=(special)
                hx-post=(hit_url(value, 2)) hx-target="#game" hx-swap="innerHTML" {}
            // outer single
            path d=(wedge_path(start, end, RADIUS * 0.58, RADIUS * 0.92))
                fill=(main)
                hx-post=(hit_url(value, 1)) hx-target="#game" hx-swap="innerHTML" {}
            // triple ring
            path d=(wedge_path(start, end, RADIUS * 0.50, RADIUS * 0.58))
                fill=(special)
                hx-post=(hit_url(value, 3)) hx-target="#game" hx-swap="innerHTML" {}
            // inner single
            path d=(wedge_path(start, end, RADIUS * 0.08, RADIUS * 0.50))
                fill=(main)
                hx-post=(hit_url(value, 1)) hx-target="#game" hx-swap="innerHTML" {}
            text x=(format!("{label_x:.2}")) y=(format!("{label_y:.2}"))
                fill="#cbd5e1" font-size="32" font-weight="bold"
                text-anchor="middle" alignment-baseline="middle"
                class="segment-label" { (value) }
        }
    }
}

/// The clickable board: every ring posts its hit straight to the engine.
#[must_use]
pub fn render_dartboard() -> Markup {
    html! {
        div class="dartboard" {
            svg viewBox=(format!("0 0 {SIZE} {SIZE}")) {
                circle cx=(CENTER) cy=(CENTER) r=(RADIUS * 1.25) fill="#0f172a" stroke="#1e293b" stroke-width="2" {}
                circle cx=(CENTER) cy=(CENTER) r=(RADIUS * 1.18) fill="#111111" {}
                @for (index, value) in BOARD_SEGMENTS.iter().enumerate() {
                    (render_segment(*value, index))
                }
                // outer bull (25), inner bull counts double
                circle cx=(CENTER) cy=(CENTER) r=(RADIUS * 0.08) fill="#27ae60"
                    hx-post=(hit_url(OUTER_BULL, 1)) hx-target="#game" hx-swap="innerHTML" {}
                circle cx=(CENTER) cy=(CENTER) r=(RADIUS * 0.04) fill="#c0392b"
                    hx-post=(hit_url(OUTER_BULL, 2)) hx-target="#game" hx-swap="innerHTML" {}
            }
            button class="miss-button"
                hx-post=(hit_url(0, 1)) hx-target="#game" hx-swap="innerHTML" { "Miss (0)" }
        }
    }
}
