//! # Courtside
//!
//! Headless soak run of the environment preset: the 4500-mote,
//! 400 x 200 x 400 field that backs a court-sized scene. Advances a few
//! thousand ticks as fast as possible and prints occupancy stats at
//! intervals, confirming the volume stays fully inhabited while motes
//! cycle floor-to-ceiling and wall-to-wall.
//!
//! Run with: `cargo run --example courtside`

use motefield::prelude::*;

const TICKS: u64 = 6000;
const REPORT_EVERY: u64 = 1000;

fn report(field: &ParticleField) {
    let mut min = Vec3::splat(f32::MAX);
    let mut max = Vec3::splat(f32::MIN);
    let mut mean_height = 0.0;

    for &position in field.positions() {
        min = min.min(position);
        max = max.max(position);
        mean_height += position.y;
    }
    mean_height /= field.len() as f32;

    println!(
        "tick {:>5}  x [{:>7.2}, {:>7.2}]  y [{:>6.2}, {:>6.2}]  z [{:>7.2}, {:>7.2}]  mean y {:>6.2}  rot {:.4}",
        field.ticks(),
        min.x,
        max.x,
        min.y,
        max.y,
        min.z,
        max.z,
        mean_height,
        field.rotation()
    );
}

fn main() {
    let mut field = FieldConfig::environment().with_seed(42).generate();

    println!(
        "environment field: {} motes in {:.0} x {:.0} x {:.0}",
        field.len(),
        field.config().bounds.range_x,
        field.config().bounds.range_y,
        field.config().bounds.range_z
    );
    report(&field);

    for tick in 1..=TICKS {
        field.advance();
        if tick % REPORT_EVERY == 0 {
            report(&field);
        }
    }
}
