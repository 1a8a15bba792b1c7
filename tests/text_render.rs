#![allow(missing_docs)]
//! Host-level tests for bitmap text rasterization.

use neogrid::{Error, Font, NeoGrid, StripFrame, Topology, colors, rgb565};
use smart_leds::RGB8;

const RED: u16 = 0xF800;
const RED_RGB: RGB8 = RGB8::new(255, 0, 0);
const BLACK: RGB8 = RGB8::new(0, 0, 0);

fn canvas_8x8() -> NeoGrid<'static, StripFrame<64>> {
    NeoGrid::new(8, 8, Topology::default(), StripFrame::<64>::new()).unwrap()
}

fn pixel(grid: &NeoGrid<'_, StripFrame<64>>, x: i32, y: i32) -> RGB8 {
    grid.strip()[grid.resolve(x, y).unwrap()]
}

#[test]
fn compact_a_renders_mirrored_rows_over_a_cleared_cell() {
    let mut grid = canvas_8x8();
    grid.fill(rgb565(255, 255, 255));
    grid.draw_char(0, 0, 'A', RED, Font::Compact);

    // Compact 'A' is 4 wide: rows 0111, 1001, 1001, 1111, 1001, with bit k
    // lighting column 3-k.
    let lit = [
        (1, 0), (2, 0), (3, 0),
        (0, 1), (3, 1),
        (0, 2), (3, 2),
        (0, 3), (1, 3), (2, 3), (3, 3),
        (0, 4), (3, 4),
    ];
    for y in 0..5 {
        for x in 0..4 {
            let expected = if lit.contains(&(x, y)) { RED_RGB } else { BLACK };
            assert_eq!(pixel(&grid, x, y), expected, "glyph cell ({x},{y})");
        }
        // The spacing column after the glyph is cleared too.
        assert_eq!(pixel(&grid, 4, y), BLACK, "spacing column row {y}");
    }

    // Outside the glyph cell the fill is untouched.
    assert_eq!(pixel(&grid, 5, 0), colors::WHITE);
    assert_eq!(pixel(&grid, 0, 5), colors::WHITE);
}

#[test]
fn text_advances_by_glyph_width_plus_spacing() {
    let mut grid = canvas_8x8();
    grid.draw_text(0, 0, "AB", RED, Font::Compact);

    // 'A' is 4 wide, so 'B' (rows starting 1110) begins at x = 5.
    assert_eq!(pixel(&grid, 5, 0), RED_RGB);
    assert_eq!(pixel(&grid, 4, 0), BLACK);
}

#[test]
fn redrawing_in_place_overwrites() {
    let mut grid = canvas_8x8();
    grid.draw_char(0, 0, 'A', RED, Font::Compact);
    // 'D' shares 'A's width, so its cell erase covers every 'A' pixel.
    grid.draw_char(0, 0, 'D', RED, Font::Compact);

    // Lit by 'D' but not 'A'.
    assert_eq!(pixel(&grid, 0, 0), RED_RGB);
    // Lit by 'A' but not 'D': must have been cleared.
    for (x, y) in [(3, 0), (1, 3), (2, 3)] {
        assert_eq!(pixel(&grid, x, y), BLACK, "stale 'A' pixel at ({x},{y})");
    }
}

#[test]
fn non_ascii_falls_back_to_the_reserved_glyph() {
    let mut with_euro = canvas_8x8();
    with_euro.draw_char(0, 0, '€', RED, Font::Compact);

    // The fallback glyph is a 4-wide box: its whole top row is lit.
    for x in 0..4 {
        assert_eq!(pixel(&with_euro, x, 0), RED_RGB);
    }
    assert_eq!(pixel(&with_euro, 1, 1), BLACK);
}

#[test]
fn tall_font_clears_a_seven_row_cell() {
    let mut grid = canvas_8x8();
    grid.fill(rgb565(255, 255, 255));
    // Space is 1 wide and entirely blank: two columns cleared over 7 rows.
    grid.draw_char(0, 0, ' ', RED, Font::Tall);

    for y in 0..7 {
        assert_eq!(pixel(&grid, 0, y), BLACK);
        assert_eq!(pixel(&grid, 1, y), BLACK);
    }
    assert_eq!(pixel(&grid, 0, 7), colors::WHITE);
    assert_eq!(pixel(&grid, 2, 0), colors::WHITE);
}

#[test]
fn text_clipped_at_the_canvas_edge_is_dropped_not_wrapped() {
    let mut grid = canvas_8x8();
    grid.draw_text(6, 0, "W", RED, Font::Compact);

    // 'W' is 5 wide; columns 6 and 7 render, the rest fall off the edge.
    // Row 0 of 'W' is 10001: only its outermost columns are lit, and only
    // the leftmost (canvas x=6) is on the canvas.
    assert_eq!(pixel(&grid, 6, 0), RED_RGB);
    assert_eq!(pixel(&grid, 7, 0), BLACK);
    // Nothing wrapped onto the next row's left edge.
    assert_eq!(pixel(&grid, 0, 0), BLACK);
    assert_eq!(grid.resolve(8, 0), None);
}

#[test]
fn font_selection_by_height_rejects_unknown_sizes() {
    assert_eq!(Font::from_height(5), Ok(Font::Compact));
    assert_eq!(Font::from_height(7), Ok(Font::Tall));
    assert_eq!(
        Font::from_height(6),
        Err(Error::UnsupportedFontHeight { height: 6 })
    );
    assert_eq!(Font::Compact.height(), 5);
    assert_eq!(Font::Tall.height(), 7);
}
