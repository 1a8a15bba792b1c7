#![allow(missing_docs)]
//! Host-level tests for color resolution, pass-through, and full-surface fill.

use neogrid::{NeoGrid, Rotation, StripFrame, Topology, colors, rgb565};
use smart_leds::RGB8;

#[test]
fn rgb565_packs_five_six_five() {
    assert_eq!(rgb565(255, 255, 255), 0xFFFF);
    assert_eq!(rgb565(255, 0, 0), 0xF800);
    assert_eq!(rgb565(0, 255, 0), 0x07E0);
    assert_eq!(rgb565(0, 0, 255), 0x001F);
    assert_eq!(rgb565(0, 0, 0), 0x0000);
}

#[test]
fn full_range_colors_survive_expansion() {
    let mut grid = NeoGrid::new(4, 4, Topology::default(), StripFrame::<16>::new()).unwrap();
    grid.set_pixel(0, 0, rgb565(255, 255, 255));
    grid.set_pixel(1, 0, rgb565(255, 0, 0));
    grid.set_pixel(2, 0, 0x0000);

    assert_eq!(grid.strip()[0], colors::WHITE);
    assert_eq!(grid.strip()[1], RGB8::new(255, 0, 0));
    assert_eq!(grid.strip()[2], colors::BLACK);
}

#[test]
fn gamma_expansion_darkens_mid_range() {
    let mut grid = NeoGrid::new(4, 4, Topology::default(), StripFrame::<16>::new()).unwrap();
    // Mid gray: 16/31 red ≈ half scale comes out well below 128 on a 2.2 curve.
    grid.set_pixel(0, 0, rgb565(128, 128, 128));
    let gray = grid.strip()[0];
    assert!(gray.r > 0 && gray.r < 100, "r = {}", gray.r);
    assert!(gray.g > 0 && gray.g < 100, "g = {}", gray.g);
    assert!(gray.b > 0 && gray.b < 100, "b = {}", gray.b);
}

#[test]
fn pass_through_writes_the_raw_value_until_cleared() {
    let raw = RGB8::new(1, 2, 3);
    let mut grid = NeoGrid::new(4, 4, Topology::default(), StripFrame::<16>::new()).unwrap();

    grid.set_pass_through(raw);
    grid.set_pixel(0, 0, 0xFFFF);
    grid.set_pixel(1, 0, 0x0000);
    assert_eq!(grid.strip()[0], raw);
    assert_eq!(grid.strip()[1], raw);

    grid.clear_pass_through();
    grid.set_pixel(2, 0, 0xFFFF);
    assert_eq!(grid.strip()[2], colors::WHITE);
}

#[test]
fn fill_sweeps_every_physical_pixel_ignoring_topology() {
    let topology = Topology::default().serpentine();
    let mut grid = NeoGrid::new(8, 8, topology, StripFrame::<64>::new()).unwrap();
    grid.set_rotation(Rotation::Deg90);

    grid.fill(rgb565(255, 0, 0));
    assert!(grid.strip().iter().all(|&led| led == RGB8::new(255, 0, 0)));
}

#[test]
fn fill_honors_pass_through() {
    let raw = RGB8::new(9, 8, 7);
    let mut grid = NeoGrid::new(4, 4, Topology::default(), StripFrame::<16>::new()).unwrap();
    grid.set_pass_through(raw);
    grid.fill(0xFFFF);
    assert!(grid.strip().iter().all(|&led| led == raw));
}
