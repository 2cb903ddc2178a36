use polyscan::geometry::*;
use polyscan::render::*;

#[test]
fn new_image_is_black_at_the_far_plane() {
    let image = Image::new(32, 16);

    assert!(image.width() == 32 && image.height() == 16);
    assert!(image.pixel(0, 0) == Color::black());
    assert!(image.pixel(31, 15) == Color::black());
    assert!(image.depth(10, 10) == FAR_PLANE);
}

#[test]
fn pixels_and_depth_read_back_what_was_written() {
    let mut image = Image::new(32, 16);

    image.set_pixel(5, 3, Color::new(0.25, 0.5, 0.75));
    image.set_depth(5, 3, 2.5);

    assert!(image.pixel(5, 3) == Color::new(0.25, 0.5, 0.75));
    assert!(image.depth(5, 3) == 2.5);
    assert!(image.pixel(6, 3) == Color::black(), "Neighboring pixels must be untouched");
}

#[test]
fn reset_restores_the_initial_state() {
    let mut image = Image::new(8, 8);

    image.fill(Color::white());
    image.set_depth(4, 4, 3.0);
    image.reset();

    assert!(image.pixel(4, 4) == Color::black());
    assert!(image.depth(4, 4) == FAR_PLANE);
}

#[test]
fn fill_leaves_the_depth_buffer_alone() {
    let mut image = Image::new(8, 8);

    image.set_depth(2, 2, 5.0);
    image.fill(Color::new(0.5, 0.5, 0.5));

    assert!(image.pixel(2, 2) == Color::new(0.5, 0.5, 0.5));
    assert!(image.depth(2, 2) == 5.0, "fill() must not clear depth");
}

#[cfg(feature = "render_png")]
#[test]
fn png_output_starts_with_the_png_signature() {
    let mut image = Image::new(16, 16);
    image.fill(Color::new(1.0, 0.5, 0.0));

    let mut encoded = vec![];
    image.write_png(&mut encoded).expect("encoding to a Vec cannot fail");

    assert!(encoded.len() > 8, "Encoded PNG should not be empty");
    assert!(&encoded[0..4] == &[0x89, b'P', b'N', b'G'], "Output should start with the PNG signature, got {:?}", &encoded[0..4]);
}
