use derive_more::Constructor;
use hmi_geometry::{Mat3f, Vec2f, Vec2i};

/// The rectangle of world space shown by a renderer: `size` world units
/// centered on `center`, stretched over the whole drawable area.
///
/// World space is Y down, like window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Constructor)]
pub struct View {
    pub center: Vec2f,
    pub size: Vec2f,
}

impl View {
    /// A view where one world unit is one pixel and the origin is the top-left
    /// corner of the drawable area.
    pub fn from_drawable_size(drawable_size: Vec2i) -> Self {
        let size = drawable_size.cast::<f32>();
        Self {
            center: size / 2.,
            size,
        }
    }

    pub fn matrix(&self) -> Mat3f {
        view_matrix(self.center, self.size)
    }

    pub fn screen_to_world(&self, position: Vec2i, drawable_size: Vec2i) -> Vec2f {
        screen_to_world(position, drawable_size, self.center, self.size)
    }

    pub fn world_to_screen(&self, position: Vec2f, drawable_size: Vec2i) -> Vec2f {
        world_to_screen(position, drawable_size, self.center, self.size)
    }
}

/// Maps world coordinates to normalized device coordinates:
/// `scale(2 / size.x, -2 / size.y) * translate(-center)`.
#[rustfmt::skip]
pub fn view_matrix(center: Vec2f, size: Vec2f) -> Mat3f {
    let scale = Mat3f::new(
        2. / size.x(), 0., 0.,
        0., -2. / size.y(), 0.,
        0., 0., 1.,
    );
    let translate = Mat3f::new(
        1., 0., -center.x(),
        0., 1., -center.y(),
        0., 0., 1.,
    );

    scale * translate
}

/// Pixel position (origin top-left, Y down) to NDC (origin center, Y up).
pub fn screen_to_ndc(position: Vec2i, drawable_size: Vec2i) -> Vec2f {
    let position = position.cast::<f32>();
    let drawable_size = drawable_size.cast::<f32>();

    Vec2f::new(
        2. * position.x() / drawable_size.width() - 1.,
        1. - 2. * position.y() / drawable_size.height(),
    )
}

pub fn screen_to_world(
    position: Vec2i,
    drawable_size: Vec2i,
    center: Vec2f,
    size: Vec2f,
) -> Vec2f {
    let ndc = screen_to_ndc(position, drawable_size);
    view_matrix(center, size).invert().transform_point(ndc)
}

pub fn world_to_screen(
    position: Vec2f,
    drawable_size: Vec2i,
    center: Vec2f,
    size: Vec2f,
) -> Vec2f {
    let ndc = view_matrix(center, size).transform_point(position);
    let drawable_size = drawable_size.cast::<f32>();

    Vec2f::new(
        (ndc.x() + 1.) * drawable_size.width() / 2.,
        (1. - ndc.y()) * drawable_size.height() / 2.,
    )
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    fn assert_near(actual: Vec2f, expected: Vec2f) {
        assert!(
            approx_eq!(f32, actual.x(), expected.x(), epsilon = 1e-3)
                && approx_eq!(f32, actual.y(), expected.y(), epsilon = 1e-3),
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn test_view_matrix_maps_to_ndc() {
        let m = view_matrix(Vec2f::new(0., 0.), Vec2f::new(1024., 576.));

        assert_near(m.transform_point(Vec2f::new(0., 0.)), Vec2f::new(0., 0.));
        assert_near(
            m.transform_point(Vec2f::new(512., 288.)),
            Vec2f::new(1., -1.),
        );
    }

    #[test]
    fn test_view_matrix_follows_center() {
        let m = view_matrix(Vec2f::new(100., -50.), Vec2f::new(200., 100.));
        assert_near(m.transform_point(Vec2f::new(100., -50.)), Vec2f::new(0., 0.));
        assert_near(m.transform_point(Vec2f::new(0., -100.)), Vec2f::new(-1., 1.));
    }

    #[test]
    fn test_screen_to_ndc() {
        let drawable = Vec2i::new(800, 600);
        assert_near(screen_to_ndc(Vec2i::new(0, 0), drawable), Vec2f::new(-1., 1.));
        assert_near(
            screen_to_ndc(Vec2i::new(800, 600), drawable),
            Vec2f::new(1., -1.),
        );
        assert_near(
            screen_to_ndc(Vec2i::new(400, 300), drawable),
            Vec2f::new(0., 0.),
        );
    }

    #[test]
    fn test_screen_to_world_centered_view() {
        let drawable = Vec2i::new(1024, 576);
        let center = Vec2f::new(0., 0.);
        let size = Vec2f::new(1024., 576.);

        assert_near(
            screen_to_world(Vec2i::new(512, 288), drawable, center, size),
            Vec2f::new(0., 0.),
        );
        assert_near(
            screen_to_world(Vec2i::new(0, 0), drawable, center, size),
            Vec2f::new(-512., -288.),
        );
    }

    #[test]
    fn test_pixel_view_is_identity() {
        let drawable = Vec2i::new(640, 480);
        let view = View::from_drawable_size(drawable);

        assert_eq!(view.center, Vec2f::new(320., 240.));
        assert_near(
            view.screen_to_world(Vec2i::new(10, 470), drawable),
            Vec2f::new(10., 470.),
        );
    }

    #[test]
    fn test_world_to_screen_inverts_screen_to_world() {
        let drawable = Vec2i::new(1024, 576);
        let view = View::new(Vec2f::new(30., 40.), Vec2f::new(256., 144.));

        let world = view.screen_to_world(Vec2i::new(100, 500), drawable);
        assert_near(view.world_to_screen(world, drawable), Vec2f::new(100., 500.));
    }

    #[test]
    fn test_zero_drawable_is_not_finite() {
        let ndc = screen_to_ndc(Vec2i::new(1, 1), Vec2i::new(0, 0));
        assert!(!ndc.x().is_finite());
    }
}
