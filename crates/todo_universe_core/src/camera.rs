//! Pure world/screen coordinate conversion and camera mutation.
//!
//! # Responsibility
//! - Map world coordinates (where cards live) to screen pixels and back.
//! - Apply pan and zoom while keeping zoom inside its bounds.
//! - Keep the world point under a zoom anchor visually fixed.
//!
//! # Invariants
//! - `screen_to_world` is the exact inverse of `world_to_screen` for the
//!   same camera and viewport center.
//! - Every returned camera has `zoom` in `[MIN_ZOOM, MAX_ZOOM]`.
//! - All functions are stateless arithmetic with no error conditions.

use kurbo::{Point, Vec2};

use crate::model::state::{Camera, MAX_ZOOM, MIN_ZOOM};

/// Multiplicative zoom step applied per wheel notch.
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

/// Clamps a zoom factor into `[MIN_ZOOM, MAX_ZOOM]`.
pub fn clamp_zoom(zoom: f64) -> f64 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Projects a world-space point into screen coordinates.
///
/// `screen = (world - camera.position) * zoom + viewport_center`
pub fn world_to_screen(world: Point, camera: &Camera, viewport_center: Point) -> Point {
    Point::new(
        (world.x - camera.position.x) * camera.zoom + viewport_center.x,
        (world.y - camera.position.y) * camera.zoom + viewport_center.y,
    )
}

/// Maps a screen pixel back into world coordinates.
pub fn screen_to_world(screen: Point, camera: &Camera, viewport_center: Point) -> Point {
    Point::new(
        (screen.x - viewport_center.x) / camera.zoom + camera.position.x,
        (screen.y - viewport_center.y) / camera.zoom + camera.position.y,
    )
}

/// Pans the camera by a pointer delta given in screen pixels.
///
/// Dragging the background right moves the camera left in world space, scaled
/// by inverse zoom so one screen pixel always corresponds to one on-screen
/// world-unit step regardless of magnification.
pub fn pan(camera: &Camera, pointer_delta: Vec2) -> Camera {
    Camera {
        position: Point::new(
            camera.position.x - pointer_delta.x / camera.zoom,
            camera.position.y - pointer_delta.y / camera.zoom,
        ),
        zoom: camera.zoom,
    }
}

/// Multiplies zoom by `factor` without moving the camera position.
///
/// Used by the zoom buttons, where the anchor is the view center itself.
pub fn zoom_by(camera: &Camera, factor: f64) -> Camera {
    Camera {
        position: camera.position,
        zoom: clamp_zoom(camera.zoom * factor),
    }
}

/// Sets zoom to an absolute value anchored at a screen point.
///
/// The world coordinate under `anchor` before the change maps back to the
/// same pixel afterwards: the anchor's world point is computed against the
/// old camera, then the position is re-derived for the new zoom.
pub fn zoom_to_about_screen_point(
    camera: &Camera,
    target_zoom: f64,
    anchor: Point,
    viewport_center: Point,
) -> Camera {
    let world = screen_to_world(anchor, camera, viewport_center);
    let zoom = clamp_zoom(target_zoom);
    let position = Point::new(
        world.x - (anchor.x - viewport_center.x) / zoom,
        world.y - (anchor.y - viewport_center.y) / zoom,
    );
    Camera { position, zoom }
}

/// Multiplies zoom by `factor` anchored at a screen point.
pub fn zoom_about_screen_point(
    camera: &Camera,
    factor: f64,
    anchor: Point,
    viewport_center: Point,
) -> Camera {
    zoom_to_about_screen_point(camera, camera.zoom * factor, anchor, viewport_center)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point::new(400.0, 300.0);

    fn camera(x: f64, y: f64, zoom: f64) -> Camera {
        Camera {
            position: Point::new(x, y),
            zoom,
        }
    }

    fn assert_close(a: Point, b: Point) {
        assert!((a.x - b.x).abs() < 1e-9, "{a:?} != {b:?}");
        assert!((a.y - b.y).abs() < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn world_screen_roundtrip() {
        let cam = camera(12.5, -80.0, 1.7);
        let world = Point::new(310.0, 42.0);
        let screen = world_to_screen(world, &cam, CENTER);
        assert_close(screen_to_world(screen, &cam, CENTER), world);
    }

    #[test]
    fn camera_position_maps_to_viewport_center() {
        let cam = camera(55.0, 21.0, 0.4);
        assert_close(world_to_screen(cam.position, &cam, CENTER), CENTER);
    }

    #[test]
    fn pan_shifts_by_inverse_zoom() {
        let cam = camera(0.0, 0.0, 2.0);
        let panned = pan(&cam, Vec2::new(10.0, -4.0));
        assert_close(panned.position, Point::new(-5.0, 2.0));
        assert_eq!(panned.zoom, 2.0);
    }

    #[test]
    fn zoom_by_clamps_at_both_bounds() {
        let cam = camera(0.0, 0.0, 1.0);
        let mut zoomed = cam;
        for _ in 0..50 {
            zoomed = zoom_by(&zoomed, 1.5);
        }
        assert_eq!(zoomed.zoom, MAX_ZOOM);
        for _ in 0..100 {
            zoomed = zoom_by(&zoomed, 1.0 / 1.5);
        }
        assert_eq!(zoomed.zoom, MIN_ZOOM);
        assert_close(zoomed.position, cam.position);
    }

    #[test]
    fn anchored_zoom_keeps_world_point_under_anchor() {
        let cam = camera(0.0, 0.0, 1.0);
        let anchor = world_to_screen(Point::new(100.0, 100.0), &cam, CENTER);
        let world_before = screen_to_world(anchor, &cam, CENTER);

        let zoomed = zoom_about_screen_point(&cam, WHEEL_ZOOM_STEP, anchor, CENTER);

        assert!((zoomed.zoom - 1.1).abs() < 1e-12);
        assert_close(world_to_screen(world_before, &zoomed, CENTER), anchor);
    }

    #[test]
    fn anchored_zoom_holds_across_the_zoom_range() {
        let anchor = Point::new(123.0, 456.0);
        for start_zoom in [MIN_ZOOM, 0.5, 1.0, 2.2, MAX_ZOOM] {
            for factor in [0.3, 1.0 / WHEEL_ZOOM_STEP, WHEEL_ZOOM_STEP, 4.0] {
                let cam = camera(-30.0, 75.0, start_zoom);
                let world_before = screen_to_world(anchor, &cam, CENTER);
                let zoomed = zoom_about_screen_point(&cam, factor, anchor, CENTER);
                assert!(zoomed.zoom >= MIN_ZOOM && zoomed.zoom <= MAX_ZOOM);
                assert_close(world_to_screen(world_before, &zoomed, CENTER), anchor);
            }
        }
    }

    #[test]
    fn absolute_zoom_target_is_clamped() {
        let cam = camera(0.0, 0.0, 1.0);
        let zoomed = zoom_to_about_screen_point(&cam, 99.0, Point::new(10.0, 10.0), CENTER);
        assert_eq!(zoomed.zoom, MAX_ZOOM);
    }
}
