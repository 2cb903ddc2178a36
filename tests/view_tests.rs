use polyscan::geometry::*;
use polyscan::view::*;
use polyscan::RenderError;

#[test]
fn view_reference_point_lands_at_the_image_center() {
    // The round trip must hold for any valid combination of projection parameters
    for &(d, du, dv, b) in [(1.0, 1.0, 1.0, 10.0), (2.5, 0.5, 1.5, 4.0), (0.1, 3.0, 2.0, 100.0)].iter() {
        let view = View3D {
            vrp:            Point::new(3.0, -2.0, 5.0),
            vpn:            Vector::new(0.0, 0.0, 1.0),
            vup:            Vector::new(0.0, 1.0, 0.0),
            d:              d,
            du:             du,
            dv:             dv,
            b:              b,
            screen_width:   640,
            screen_height:  480,
        };

        let vtm         = view.matrix().expect("valid view parameters");
        let mut center  = vtm.transform_point(&view.vrp);
        center.normalize();

        assert!((center.x - 320.0).abs() < 1e-6, "vrp should land at screenx/2 for d={} du={} dv={} (got {})", d, du, dv, center.x);
        assert!((center.y - 240.0).abs() < 1e-6, "vrp should land at screeny/2 for d={} du={} dv={} (got {})", d, du, dv, center.y);
        assert!((center.h - 1.0).abs() < 1e-6, "vrp should normalize to h = 1 (got {})", center.h);
    }
}

#[test]
fn view_round_trip_holds_for_an_oblique_camera() {
    let view = View3D {
        vrp:            Point::new(10.0, 20.0, -5.0),
        vpn:            Vector::new(1.0, 1.0, 0.5),
        vup:            Vector::new(0.0, 0.0, 1.0),
        d:              1.5,
        du:             1.0,
        dv:             0.75,
        b:              20.0,
        screen_width:   800,
        screen_height:  600,
    };

    let vtm         = view.matrix().expect("valid view parameters");
    let mut center  = vtm.transform_point(&view.vrp);
    center.normalize();

    assert!((center.x - 400.0).abs() < 1e-6, "vrp should land at the image center (got x = {})", center.x);
    assert!((center.y - 300.0).abs() < 1e-6, "vrp should land at the image center (got y = {})", center.y);
}

#[test]
fn depth_scales_into_the_unit_interval() {
    let view = View3D {
        vrp:            Point::origin(),
        vpn:            Vector::new(0.0, 0.0, 1.0),
        vup:            Vector::new(0.0, 1.0, 0.0),
        d:              1.0,
        du:             1.0,
        dv:             1.0,
        b:              9.0,
        screen_width:   100,
        screen_height:  100,
    };

    let vtm = view.matrix().expect("valid view parameters");

    // A point on the back clip plane (9 units beyond the view plane) normalizes to z = 1
    let mut back = vtm.transform_point(&Point::new(0.0, 0.0, 9.0));
    back.normalize();
    assert!((back.z - 1.0).abs() < 1e-6, "Back clip plane should map to z = 1 (got {})", back.z);

    // A point halfway into the volume lands strictly inside (0, 1)
    let mut middle = vtm.transform_point(&Point::new(0.0, 0.0, 4.0));
    middle.normalize();
    assert!(middle.z > 0.0 && middle.z < 1.0, "Interior depth should stay in (0, 1) (got {})", middle.z);
    assert!(middle.z < back.z, "Nearer points should carry smaller z (got {} vs {})", middle.z, back.z);
}

#[test]
fn invalid_3d_parameters_are_fatal() {
    let valid = View3D {
        vrp:            Point::origin(),
        vpn:            Vector::new(0.0, 0.0, 1.0),
        vup:            Vector::new(0.0, 1.0, 0.0),
        d:              1.0,
        du:             1.0,
        dv:             1.0,
        b:              10.0,
        screen_width:   100,
        screen_height:  100,
    };

    let zero_d          = View3D { d: 0.0, ..valid };
    let zero_b          = View3D { b: 0.0, ..valid };
    let zero_extent     = View3D { du: 0.0, ..valid };
    let zero_screen     = View3D { screen_width: 0, ..valid };
    let parallel_up     = View3D { vup: Vector::new(0.0, 0.0, 2.0), ..valid };
    let zero_normal     = View3D { vpn: Vector::zero(), ..valid };

    assert!(matches!(zero_d.matrix(), Err(RenderError::InvalidView(_))));
    assert!(matches!(zero_b.matrix(), Err(RenderError::InvalidView(_))));
    assert!(matches!(zero_extent.matrix(), Err(RenderError::InvalidView(_))));
    assert!(matches!(zero_screen.matrix(), Err(RenderError::InvalidView(_))));
    assert!(matches!(parallel_up.matrix(), Err(RenderError::InvalidView(_))));
    assert!(matches!(zero_normal.matrix(), Err(RenderError::InvalidView(_))));
}

#[test]
fn view_2d_maps_the_window_onto_the_screen() {
    let view = View2D {
        center:         Point::new_2d(5.0, 5.0),
        x_axis:         Vector::new(1.0, 0.0, 0.0),
        du:             10.0,
        screen_width:   100,
        screen_height:  100,
    };

    let vtm = view.matrix().expect("valid view parameters");

    // The center maps to the middle of the image
    let mut center = vtm.transform_point(&view.center);
    center.normalize();
    assert!((center.x - 50.0).abs() < 1e-6 && (center.y - 50.0).abs() < 1e-6, "Center should map to (50, 50), got ({}, {})", center.x, center.y);

    // The right edge of the window maps to the right edge of the image
    let mut right = vtm.transform_point(&Point::new_2d(10.0, 5.0));
    right.normalize();
    assert!((right.x - 100.0).abs() < 1e-6, "Right window edge should map to x = 100, got {}", right.x);

    // World "up" maps to smaller row numbers: row 0 is the top of the image
    let mut above = vtm.transform_point(&Point::new_2d(5.0, 10.0));
    above.normalize();
    assert!((above.y - 0.0).abs() < 1e-6, "A point above the center should map toward row 0, got {}", above.y);
}

#[test]
fn view_2d_rejects_degenerate_parameters() {
    let valid = View2D {
        center:         Point::origin(),
        x_axis:         Vector::new(1.0, 0.0, 0.0),
        du:             10.0,
        screen_width:   100,
        screen_height:  100,
    };

    let zero_du     = View2D { du: 0.0, ..valid };
    let zero_axis   = View2D { x_axis: Vector::zero(), ..valid };

    assert!(matches!(zero_du.matrix(), Err(RenderError::InvalidView(_))));
    assert!(matches!(zero_axis.matrix(), Err(RenderError::InvalidView(_))));
}
