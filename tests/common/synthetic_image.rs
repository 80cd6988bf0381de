#![allow(dead_code)]

use marker_scan::image::Pixel3;

pub const BLACK: Pixel3 = [0, 0, 0];
pub const WHITE: Pixel3 = [255, 255, 255];
// Stored blue, green, red.
pub const BLUE: Pixel3 = [255, 0, 0];
pub const RED: Pixel3 = [0, 0, 255];

/// White floor plan with a black border wall and the given marker pixels.
pub fn floor_plan(width: usize, height: usize, markers: &[(usize, usize, Pixel3)]) -> Vec<Pixel3> {
    assert!(width > 2 && height > 2, "plan needs room inside the walls");

    let mut img = vec![WHITE; width * height];
    for y in 0..height {
        for x in 0..width {
            if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                img[y * width + x] = BLACK;
            }
        }
    }
    for &(row, col, px) in markers {
        img[row * width + col] = px;
    }
    img
}

/// Deterministic pseudo-random pixels drawn from a small palette that mixes
/// markers with near-marker shades.
pub fn noisy_pixels(width: usize, height: usize, seed: u32) -> Vec<Pixel3> {
    const PALETTE: [Pixel3; 8] = [
        BLACK,
        WHITE,
        BLUE,
        RED,
        [0, 0, 254],
        [254, 0, 0],
        [0, 1, 255],
        [255, 0, 1],
    ];
    let mut state = seed.max(1);
    (0..width * height)
        .map(|_| {
            // xorshift32
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            PALETTE[(state % PALETTE.len() as u32) as usize]
        })
        .collect()
}
