//! Camera facade
//!
//! The UI only needs the view-projection for the drawing backend and a way
//! to map window pixels into UI space; everything else is opaque.

use std::cell::RefCell;
use std::rc::Rc;
use trellis_core::Shared;
use trellis_ui_graphics::{Mat4, Point, Size, IDENTITY};

pub trait Camera {
    /// Column-major view-projection handed to [`Renderer2D::begin_scene`].
    ///
    /// [`Renderer2D::begin_scene`]: trellis_ui_graphics::Renderer2D::begin_scene
    fn view_projection(&self) -> Mat4;

    fn screen_to_ui(&self, screen: Point) -> Point {
        screen
    }

    fn on_resize(&mut self, _size: Size) {}
}

/// Wraps a camera for shared ownership between the host and the dispatcher.
pub fn shared_camera(camera: impl Camera + 'static) -> Shared<dyn Camera> {
    let inner: Rc<RefCell<dyn Camera>> = Rc::new(RefCell::new(camera));
    Shared::from_rc(inner)
}

/// Screen-space orthographic camera with y pointing down.
#[derive(Clone, Debug, PartialEq)]
pub struct OrthographicCamera {
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    position: Point,
    zoom: f32,
}

impl OrthographicCamera {
    pub fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
            position: Point::ZERO,
            zoom: 1.0,
        }
    }

    /// Pixel-for-pixel camera covering a viewport of `size`.
    pub fn for_viewport(size: Size) -> Self {
        Self::new(0.0, size.width, size.height, 0.0)
    }

    pub fn set_projection(&mut self, left: f32, right: f32, bottom: f32, top: f32) {
        self.left = left;
        self.right = right;
        self.bottom = bottom;
        self.top = top;
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        if zoom > 0.0 {
            self.zoom = zoom;
        } else {
            log::warn!("ignoring non-positive camera zoom {zoom}");
        }
    }
}

impl Camera for OrthographicCamera {
    fn view_projection(&self) -> Mat4 {
        let width = self.right - self.left;
        let height = self.top - self.bottom;
        if width == 0.0 || height == 0.0 {
            return IDENTITY;
        }
        let sx = 2.0 / width * self.zoom;
        let sy = 2.0 / height * self.zoom;
        let tx = -(self.right + self.left) / width - sx * self.position.x;
        let ty = -(self.top + self.bottom) / height - sy * self.position.y;
        [
            [sx, 0.0, 0.0, 0.0],
            [0.0, sy, 0.0, 0.0],
            [0.0, 0.0, -1.0, 0.0],
            [tx, ty, 0.0, 1.0],
        ]
    }

    fn screen_to_ui(&self, screen: Point) -> Point {
        Point::new(
            screen.x / self.zoom + self.position.x,
            screen.y / self.zoom + self.position.y,
        )
    }

    fn on_resize(&mut self, size: Size) {
        self.set_projection(0.0, size.width, size.height, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(matrix: &Mat4, point: Point) -> (f32, f32) {
        (
            matrix[0][0] * point.x + matrix[1][0] * point.y + matrix[3][0],
            matrix[0][1] * point.x + matrix[1][1] * point.y + matrix[3][1],
        )
    }

    #[test]
    fn viewport_corners_map_to_clip_space() {
        let camera = OrthographicCamera::for_viewport(Size::new(800.0, 600.0));
        let vp = camera.view_projection();
        let close = |(x, y): (f32, f32), (ex, ey): (f32, f32)| {
            (x - ex).abs() < 1e-5 && (y - ey).abs() < 1e-5
        };
        assert!(close(project(&vp, Point::new(0.0, 0.0)), (-1.0, 1.0)));
        assert!(close(project(&vp, Point::new(800.0, 600.0)), (1.0, -1.0)));
        assert!(close(project(&vp, Point::new(400.0, 300.0)), (0.0, 0.0)));
    }

    #[test]
    fn screen_to_ui_honours_zoom_and_position() {
        let mut camera = OrthographicCamera::for_viewport(Size::new(100.0, 100.0));
        camera.set_zoom(2.0);
        camera.set_position(Point::new(10.0, 0.0));
        assert_eq!(camera.screen_to_ui(Point::new(40.0, 40.0)), Point::new(30.0, 20.0));
        camera.set_zoom(0.0);
        assert_eq!(camera.zoom(), 2.0);
    }
}
