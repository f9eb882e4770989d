//! # Ambient Drift
//!
//! Draws the stock ambient mote field as a top-down ASCII density map -
//! the smallest possible "renderer" over the read-only field contract.
//! Each frame reads the flat position array, bins motes into terminal
//! cells and redraws. Watch the haze slowly churn as escaped motes get
//! re-sampled back in.
//!
//! Run with: `cargo run --example ambient`

use motefield::prelude::*;
use std::thread;
use std::time::Duration;

const COLS: usize = 64;
const ROWS: usize = 24;
const FRAMES: u64 = 400;

/// Density ramp, sparse to dense.
const SHADES: &[u8] = b" .:+*#@";

fn draw(field: &ParticleField) {
    let bounds = field.config().bounds;
    let mut cells = [[0u32; COLS]; ROWS];

    // Top-down projection: X across, Z down.
    for &position in field.positions() {
        let u = (position.x / bounds.range_x + 0.5).clamp(0.0, 1.0);
        let v = (position.z / bounds.range_z + 0.5).clamp(0.0, 1.0);
        let col = ((u * (COLS - 1) as f32) as usize).min(COLS - 1);
        let row = ((v * (ROWS - 1) as f32) as usize).min(ROWS - 1);
        cells[row][col] += 1;
    }

    let mut out = String::with_capacity(ROWS * (COLS + 1));
    for row in &cells {
        for &count in row {
            let shade = (count as usize).min(SHADES.len() - 1);
            out.push(SHADES[shade] as char);
        }
        out.push('\n');
    }

    // Home the cursor and repaint in place.
    print!("\x1b[H{}", out);
    println!(
        "tick {:>5}  rotation {:>8.4} rad  motes {}",
        field.ticks(),
        field.rotation(),
        field.len()
    );
}

fn main() {
    let mut field = FieldConfig::ambient().generate();
    let mut ticker = Ticker::new(30.0);

    // Clear once, then repaint over ourselves.
    print!("\x1b[2J");

    let mut frames = 0;
    while frames < FRAMES {
        let due = ticker.poll();
        for _ in 0..due {
            field.advance();
        }

        if due > 0 {
            draw(&field);
            frames += u64::from(due);
        }

        thread::sleep(Duration::from_millis(5));
    }
}
