//! Validates tiling wraparound and the canvas capability surface

use image::Rgba;
use stereodot::random::RandomField;
use stereodot::spatial::{Canvas, PixelSink, PixelSource, Rect, TiledSource};

// A finite window onto an infinite field, mirroring how a decoded image
// restricts its pixels to a rectangle
struct SubSource {
    inner: RandomField,
    rect: Rect,
}

impl PixelSource for SubSource {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn color_at(&self, x: i64, y: i64) -> Rgba<u8> {
        self.inner.color_at(x, y)
    }
}

#[test]
fn test_tiling_wraps_positive_and_negative_coordinates() {
    let tiled = TiledSource::new(SubSource {
        inner: RandomField::new(1),
        rect: Rect::from_size(5, 5),
    });

    assert_eq!(tiled.color_at(0, 0), tiled.color_at(5, 5));
    assert_eq!(tiled.color_at(1, 1), tiled.color_at(11, -19));
}

#[test]
fn test_tiling_is_periodic_in_both_axes() {
    let source = SubSource {
        inner: RandomField::new(33),
        rect: Rect::from_size(5, 5),
    };
    let reference = RandomField::new(33);
    let tiled = TiledSource::new(source);

    for y in -12i64..12 {
        for x in -12i64..12 {
            let expected = reference.color_at(x.rem_euclid(5), y.rem_euclid(5));
            assert_eq!(tiled.color_at(x, y), expected);
        }
    }
}

#[test]
fn test_tiling_honors_offset_tile_rects() {
    let source = SubSource {
        inner: RandomField::new(4),
        rect: Rect::boundless(),
    };
    let reference = RandomField::new(4);
    let tiled = TiledSource::with_tile(source, Rect::new(2, 3, 7, 8));

    // Every coordinate lands back inside [2, 7) x [3, 8)
    assert_eq!(tiled.color_at(2, 3), reference.color_at(2, 3));
    assert_eq!(tiled.color_at(7, 8), reference.color_at(2, 3));
    assert_eq!(tiled.color_at(1, 2), reference.color_at(6, 7));
    assert_eq!(tiled.color_at(-3, -2), reference.color_at(2, 3));
}

#[test]
fn test_tiled_source_reports_unbounded_coverage() {
    let tiled = TiledSource::new(SubSource {
        inner: RandomField::new(2),
        rect: Rect::from_size(5, 5),
    });
    assert!(tiled.bounds().contains(123_456, -654_321));
}

#[test]
fn test_canvas_reads_outside_bounds_as_transparent() {
    let canvas = Canvas::new(4, 4);
    assert_eq!(canvas.color_at(-1, 0), Rgba([0, 0, 0, 0]));
    assert_eq!(canvas.color_at(4, 0), Rgba([0, 0, 0, 0]));
    assert_eq!(canvas.color_at(0, 0), Rgba([0, 0, 0, 255]));
}

#[test]
fn test_canvas_round_trips_writes_through_the_sink() {
    let mut canvas = Canvas::new(3, 3);
    let color = Rgba([12, 34, 56, 255]);
    canvas.set_color_at(2, 1, color);
    assert_eq!(canvas.color_at(2, 1), color);

    let image = canvas.to_image();
    assert_eq!(image.dimensions(), (3, 3));
    assert_eq!(
        image.get_pixel_checked(2, 1).copied(),
        Some(color)
    );
}

#[test]
fn test_canvas_bounds_match_dimensions() {
    let canvas = Canvas::new(7, 2);
    assert_eq!(canvas.bounds(), Rect::from_size(7, 2));
}
