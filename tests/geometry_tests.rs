use polyscan::geometry::*;
use polyscan::RenderError;

fn matrix_approx_eq(a: &Matrix, b: &Matrix) -> bool {
    for row in 0..4 {
        for col in 0..4 {
            if (a.0[row][col] - b.0[row][col]).abs() > 1e-9 {
                return false;
            }
        }
    }

    true
}

#[test]
fn normalize_with_unit_weight_is_a_no_op() {
    let mut point   = Point::new(3.0, 4.0, 5.0);
    let before      = point;

    point.normalize();

    assert!(point == before, "Normalizing a point with h = 1 changed it: {:?}", point);
}

#[test]
fn normalize_divides_device_components_only() {
    let mut point = Point { x: 4.0, y: 6.0, z: 0.5, h: 2.0 };

    point.normalize();

    assert!(point.x == 2.0 && point.y == 3.0, "Normalize should divide x and y by h (got {:?})", point);
    assert!(point.z == 0.5, "Normalize should leave z alone (got {})", point.z);
    assert!(point.h == 1.0, "Normalize should reset h to 1 (got {})", point.h);
}

#[test]
fn normalize_is_idempotent() {
    let mut once    = Point { x: 4.0, y: 6.0, z: 0.5, h: 2.0 };
    let mut twice   = once;

    once.normalize();
    twice.normalize();
    twice.normalize();

    assert!(once == twice, "Normalizing twice differed from normalizing once: {:?} vs {:?}", twice, once);
}

#[test]
fn identity_is_a_multiplicative_unit() {
    let matrix = Matrix::translate(1.0, -2.0, 3.0)
        .multiply(&Matrix::rotate_y(0.7))
        .multiply(&Matrix::scale(2.0, 0.5, 4.0));

    let left    = Matrix::identity().multiply(&matrix);
    let right   = matrix.multiply(&Matrix::identity());

    assert!(matrix_approx_eq(&left, &matrix), "identity * M should equal M");
    assert!(matrix_approx_eq(&right, &matrix), "M * identity should equal M");
}

#[test]
fn multiplication_applies_the_right_operand_first() {
    // Translate then scale: the product S * T moves the point before stretching it
    let translate   = Matrix::translate(10.0, 0.0, 0.0);
    let scale       = Matrix::scale(2.0, 2.0, 2.0);
    let product     = scale.multiply(&translate);

    let point       = product.transform_point(&Point::new(1.0, 0.0, 0.0));

    assert!((point.x - 22.0).abs() < 1e-9, "Expected x = 22 (translate first, then scale), got {}", point.x);
}

#[test]
fn vectors_ignore_translation() {
    let translate   = Matrix::translate(100.0, 100.0, 100.0);
    let vector      = translate.transform_vector(&Vector::new(0.0, 0.0, 1.0));

    assert!(vector == Vector::new(0.0, 0.0, 1.0), "Translating a vector changed it: {:?}", vector);
}

#[test]
fn surface_normal_follows_winding_order() {
    let a = Point::new(0.0, 0.0, 0.0);
    let b = Point::new(1.0, 0.0, 0.0);
    let c = Point::new(0.0, 1.0, 0.0);

    // Counter-clockwise in the xy plane faces +z; reversing the winding flips it
    let front   = Vector::surface_normal(&a, &b, &c);
    let back    = Vector::surface_normal(&a, &c, &b);

    assert!(front == Vector::new(0.0, 0.0, 1.0), "CCW winding should face +z, got {:?}", front);
    assert!(back == Vector::new(0.0, 0.0, -1.0), "CW winding should face -z, got {:?}", back);
}

#[test]
fn normalizing_a_zero_vector_is_an_error() {
    assert!(Vector::zero().normalized() == Err(RenderError::DegenerateVector));
}

#[test]
fn cross_product_is_right_handed() {
    let x = Vector::new(1.0, 0.0, 0.0);
    let y = Vector::new(0.0, 1.0, 0.0);

    assert!(x.cross(&y) == Vector::new(0.0, 0.0, 1.0), "x cross y should be z");
}

#[test]
fn color_channels_clamp_on_every_write() {
    let color = Color::new(1.5, -0.2, 0.5);

    assert!(color.r() == 1.0, "Overrange red should clamp to 1 (got {})", color.r());
    assert!(color.g() == 0.0, "Negative green should clamp to 0 (got {})", color.g());
    assert!(color.b() == 0.5, "In-range blue should pass through (got {})", color.b());

    let mut color = Color::black();
    color.set(0.25, 2.0, -1.0);
    assert!(color == Color::new(0.25, 1.0, 0.0), "set() should clamp each channel (got {:?})", color);
}

#[test]
fn color_quantizes_to_rgb8() {
    assert!(Color::white().to_rgb8() == [255, 255, 255]);
    assert!(Color::black().to_rgb8() == [0, 0, 0]);
    assert!(Color::new(0.5, 0.0, 1.0).to_rgb8() == [128, 0, 255]);
}
