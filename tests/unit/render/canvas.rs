use super::*;

const RED: Rgba8 = Rgba8::opaque(0xff, 0, 0);
const BLUE: Rgba8 = Rgba8::opaque(0, 0, 0xff);
const BLACK: Rgba8 = Rgba8::opaque(0, 0, 0);

fn rect(x: f64, y: f64, width: f64, height: f64, colour: Rgba8) -> Rectangle {
    Rectangle {
        x,
        y,
        width,
        height,
        colour,
    }
}

fn black_canvas(w: u32, h: u32) -> Canvas {
    let mut c = Canvas::new(w, h).unwrap();
    c.fill(BLACK);
    c
}

fn px(c: &Canvas, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * c.width() + x) * 4) as usize;
    [c.data()[i], c.data()[i + 1], c.data()[i + 2], c.data()[i + 3]]
}

fn columns_with(c: &Canvas, y: u32, colour: Rgba8) -> Vec<u32> {
    (0..c.width())
        .filter(|&x| px(c, x, y) == colour.to_array())
        .collect()
}

#[test]
fn new_canvas_is_zeroed_and_sized() {
    let c = Canvas::new(3, 2).unwrap();
    assert_eq!(c.data().len(), 3 * 2 * 4);
    assert!(c.data().iter().all(|&b| b == 0));
}

#[test]
fn fill_sets_every_pixel() {
    let mut c = Canvas::new(4, 4).unwrap();
    c.fill(Rgba8::new(1, 2, 3, 4));
    assert!(c.data().chunks_exact(4).all(|p| p == [1, 2, 3, 4]));
}

#[test]
fn span_rounds_half_away_from_zero() {
    assert_eq!(pixel_span(0.25, 0.5, 10), 3..8);
    assert_eq!(pixel_span(0.0, 0.05, 10), 0..1);
    assert_eq!(pixel_span(0.0, 0.04, 10), 0..0);
}

#[test]
fn span_clips_to_trailing_edge() {
    assert_eq!(pixel_span(0.9, 0.5, 100), 90..100);
    assert_eq!(pixel_span(2.0, 1.0, 100), 0..0);
    assert_eq!(pixel_span(1.0, 1.0, 100), 0..0);
}

#[test]
fn span_clamps_negative_start() {
    assert_eq!(pixel_span(-0.5, 1.0, 100), 0..50);
    assert_eq!(pixel_span(-5.0, 100.0, 100), 0..100);
    assert_eq!(pixel_span(-0.5, 0.2, 100), 0..0);
    assert_eq!(pixel_span(0.5, -0.2, 100), 0..0);
}

#[test]
fn span_survives_non_finite_geometry() {
    assert_eq!(pixel_span(f64::NAN, 1.0, 10), 0..10);
    assert_eq!(pixel_span(0.0, f64::NAN, 10), 0..0);
    assert_eq!(pixel_span(0.0, f64::INFINITY, 10), 0..10);
    assert_eq!(pixel_span(f64::NEG_INFINITY, f64::INFINITY, 10), 0..0);
    assert_eq!(pixel_span(f64::INFINITY, f64::INFINITY, 10), 0..0);
}

#[test]
fn fill_rect_clips_columns_to_canvas() {
    let mut c = black_canvas(100, 100);
    c.fill_rect(&rect(0.9, 0.0, 0.5, 1.0, RED));
    for y in [0, 50, 99] {
        assert_eq!(columns_with(&c, y, RED), (90..100).collect::<Vec<_>>());
    }
}

#[test]
fn out_of_range_rect_is_a_noop() {
    let mut c = black_canvas(100, 100);
    let before = c.data().to_vec();
    c.fill_rect(&rect(2.0, 0.0, 1.0, 1.0, RED));
    c.fill_rect(&rect(0.0, -3.0, 1.0, 1.0, RED));
    c.fill_rect(&rect(0.5, 0.5, 0.0, 0.5, RED));
    assert_eq!(c.data(), before.as_slice());
}

#[test]
fn negative_offset_keeps_visible_part() {
    let mut c = black_canvas(10, 10);
    c.fill_rect(&rect(-0.5, -0.5, 0.8, 0.7, RED));
    assert_eq!(columns_with(&c, 0, RED), vec![0, 1, 2]);
    assert_eq!(columns_with(&c, 1, RED), vec![0, 1, 2]);
    assert!(columns_with(&c, 2, RED).is_empty());
}

#[test]
fn fill_rect_is_idempotent() {
    let r = rect(0.1, 0.2, 0.33, 0.45, RED);
    let mut once = black_canvas(37, 23);
    once.fill_rect(&r);
    let mut twice = black_canvas(37, 23);
    twice.fill_rect(&r);
    twice.fill_rect(&r);
    assert_eq!(once.data(), twice.data());
}

#[test]
fn later_rect_wins_in_overlap() {
    let mut c = black_canvas(10, 1);
    c.fill_rect(&rect(0.0, 0.0, 0.6, 1.0, RED));
    c.fill_rect(&rect(0.4, 0.0, 0.6, 1.0, BLUE));
    assert_eq!(columns_with(&c, 0, RED), vec![0, 1, 2, 3]);
    assert_eq!(columns_with(&c, 0, BLUE), vec![4, 5, 6, 7, 8, 9]);
}

#[test]
fn translucent_colour_replaces_instead_of_blending() {
    let mut c = black_canvas(2, 2);
    let ghost = Rgba8::new(0xff, 0xff, 0xff, 0x10);
    c.fill_rect(&rect(0.0, 0.0, 1.0, 1.0, ghost));
    assert!(c.data().chunks_exact(4).all(|p| p == ghost.to_array()));
}

#[test]
fn zero_area_canvas_accepts_draws() {
    let mut c = Canvas::new(0, 5).unwrap();
    c.fill(RED);
    c.fill_rect(&rect(0.0, 0.0, 1.0, 1.0, BLUE));
    let frame = c.into_frame();
    assert_eq!((frame.width, frame.height), (0, 5));
    assert!(frame.data.is_empty());
}
