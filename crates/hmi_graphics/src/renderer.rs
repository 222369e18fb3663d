use std::{mem::size_of, rc::Rc};

use glow::HasContext;
use hmi_geometry::{color, Color, Mat3f, Vec2f, Vec2i};
use smart_default::SmartDefault;

use crate::{
    constants::GlConstant,
    error::{GraphicsError, GraphicsResult},
    shader::{Program, ShaderSource},
    shapes::{self, PrimitiveMode, Vertex},
    view::View,
    WindowBackend,
};

const TRANSFORM_UNIFORM: &str = "u_transform";
const POSITION_ATTRIBUTE: &str = "a_position";
const COLOR_ATTRIBUTE: &str = "a_color";

#[derive(SmartDefault, Debug, Clone)]
pub struct RendererSettings {
    #[default(color::BLACK)]
    pub clear_color: Color,

    #[default(true)]
    pub blend: bool,
}

/// GL expects matrices column by column.
fn column_major(m: Mat3f) -> [f32; 9] {
    std::array::from_fn(|i| m[(i % 3, i / 3)])
}

/// Makes `backend` current before handing out its GL functions.
fn current<'a, B: WindowBackend, C>(backend: &B, gl: &'a C) -> &'a C {
    backend.make_current();
    gl
}

/// Draws colored 2D primitives in world coordinates through a GLES2 context.
///
/// The view is applied on the GPU: vertices are uploaded in world space and
/// the current view matrix is set as a uniform on every draw.
pub struct Renderer<B: WindowBackend> {
    // GL objects go before the backend, which owns the context.
    program: Program,
    vertex_buffer: glow::Buffer,
    view: View,
    gl: Rc<glow::Context>,
    backend: B,
}

impl<B: WindowBackend> Renderer<B> {
    pub fn new(backend: B, settings: RendererSettings) -> GraphicsResult<Self> {
        backend.make_current();
        let gl = unsafe {
            glow::Context::from_loader_function(|symbol| backend.get_proc_address(symbol))
        };
        let gl = Rc::new(gl);

        unsafe {
            log::debug!(
                "GL context: {}, {}",
                gl.get_parameter_string(glow::VERSION),
                gl.get_parameter_string(glow::RENDERER)
            );

            if settings.blend {
                gl.enable(glow::BLEND);
                gl.blend_equation_separate(glow::FUNC_ADD, glow::FUNC_ADD);
                gl.blend_func_separate(
                    glow::SRC_ALPHA,
                    glow::ONE_MINUS_SRC_ALPHA,
                    glow::ONE,
                    glow::ONE_MINUS_SRC_ALPHA,
                );
            }
        }

        let program = Program::new(gl.clone(), &ShaderSource::default())?;

        let vertex_buffer = unsafe { gl.create_buffer() }.map_err(|e| {
            log::error!("Unable to create vertex buffer: {e}");
            GraphicsError::Buffer(e)
        })?;

        let view = View::from_drawable_size(backend.drawable_size());

        let renderer = Self {
            program,
            vertex_buffer,
            view,
            gl,
            backend,
        };
        renderer.clear(settings.clear_color);

        Ok(renderer)
    }

    fn gl(&self) -> &glow::Context {
        current(&self.backend, &self.gl)
    }

    /// Drawable size in pixels.
    pub fn size(&self) -> Vec2i {
        self.backend.drawable_size()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    // view

    pub fn view(&self) -> View {
        self.view
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn view_center(&self) -> Vec2f {
        self.view.center
    }

    pub fn set_view_center(&mut self, center: Vec2f) {
        self.view.center = center;
    }

    pub fn view_size(&self) -> Vec2f {
        self.view.size
    }

    pub fn set_view_size(&mut self, size: Vec2f) {
        self.view.size = size;
    }

    pub fn view_matrix(&self) -> Mat3f {
        self.view.matrix()
    }

    /// World coordinates under the pixel `position` for the current view.
    pub fn coords_from_position(&self, position: Vec2i) -> Vec2f {
        self.view.screen_to_world(position, self.size())
    }

    pub fn position_from_coords(&self, coords: Vec2f) -> Vec2f {
        self.view.world_to_screen(coords, self.size())
    }

    // drawing

    pub fn clear(&self, color: Color) {
        let size = self.size();
        let gl = self.gl();

        unsafe {
            gl.viewport(0, 0, size.width(), size.height());
            gl.clear_color(color.r(), color.g(), color.b(), color.a());
            gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    pub fn fill_rectangle(&self, origin: Vec2f, size: Vec2f, color: Color) {
        self.draw(
            &shapes::rectangle_fill(origin, size, color),
            PrimitiveMode::TriangleStrip,
        );
    }

    pub fn draw_rectangle(&self, origin: Vec2f, size: Vec2f, color: Color) {
        self.draw(
            &shapes::rectangle_outline(origin, size, color),
            PrimitiveMode::LineLoop,
        );
    }

    pub fn fill_circle(&self, center: Vec2f, radius: f32, color: Color) {
        self.draw(
            &shapes::circle_fill(center, radius, color),
            PrimitiveMode::TriangleFan,
        );
    }

    pub fn draw_circle(&self, center: Vec2f, radius: f32, color: Color) {
        self.draw(
            &shapes::circle_outline(center, radius, color),
            PrimitiveMode::LineLoop,
        );
    }

    pub fn draw_line(&self, start: Vec2f, end: Vec2f, color: Color) {
        self.draw(&shapes::line(start, end, color), PrimitiveMode::Lines);
    }

    pub fn draw_polygon(&self, points: &[Vec2f], color: Color) {
        self.draw(
            &shapes::polygon_outline(points, color),
            PrimitiveMode::LineLoop,
        );
    }

    /// Submits `vertices` (in world coordinates) as a single draw call.
    ///
    /// If the program is missing the transform uniform or one of the vertex
    /// attributes, the error is logged and nothing is drawn.
    pub fn draw(&self, vertices: &[Vertex], mode: PrimitiveMode) {
        if vertices.is_empty() {
            return;
        }

        let Some(transform) = self.program.uniform_location(TRANSFORM_UNIFORM) else {
            log::error!("Shader uniform {TRANSFORM_UNIFORM} is not available, skipping draw");
            return;
        };

        let (Some(position), Some(color)) = (
            self.program.attribute_location(POSITION_ATTRIBUTE),
            self.program.attribute_location(COLOR_ATTRIBUTE),
        ) else {
            log::error!(
                "Shader attributes {POSITION_ATTRIBUTE} and {COLOR_ATTRIBUTE} are not available, skipping draw"
            );
            return;
        };

        let size = self.size();
        let stride = size_of::<Vertex>() as i32;
        let color_offset = size_of::<Vec2f>() as i32;

        let gl = self.gl();

        unsafe {
            gl.viewport(0, 0, size.width(), size.height());
            self.program.bind();
            gl.uniform_matrix_3_f32_slice(
                Some(transform),
                false,
                &column_major(self.view.matrix()),
            );

            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.vertex_buffer));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STREAM_DRAW,
            );

            gl.enable_vertex_attrib_array(position);
            gl.vertex_attrib_pointer_f32(position, 2, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(color);
            gl.vertex_attrib_pointer_f32(color, 4, glow::FLOAT, false, stride, color_offset);

            gl.draw_arrays(mode.gl_const(), 0, vertices.len() as i32);

            gl.disable_vertex_attrib_array(color);
            gl.disable_vertex_attrib_array(position);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
        }
    }

    /// Presents the frame.
    pub fn display(&self) {
        self.backend.make_current();
        self.backend.swap_buffers();
    }
}

impl<B: WindowBackend> Drop for Renderer<B> {
    fn drop(&mut self) {
        unsafe { self.gl().delete_buffer(self.vertex_buffer) };
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, ffi::c_void};

    use float_cmp::approx_eq;

    use super::*;

    #[derive(Default)]
    struct CountingBackend {
        made_current: Cell<usize>,
    }

    impl WindowBackend for CountingBackend {
        fn swap_buffers(&self) {}

        fn make_current(&self) {
            self.made_current.set(self.made_current.get() + 1);
        }

        fn get_proc_address(&self, _symbol: &str) -> *const c_void {
            std::ptr::null()
        }

        fn drawable_size(&self) -> Vec2i {
            Vec2i::new(640, 480)
        }
    }

    #[test]
    fn test_default_settings() {
        let settings = RendererSettings::default();
        assert_eq!(settings.clear_color, color::BLACK);
        assert!(settings.blend);
    }

    #[test]
    fn test_column_major_upload() {
        #[rustfmt::skip]
        let m = Mat3f::new(
            1., 2., 3.,
            4., 5., 6.,
            7., 8., 9.,
        );

        assert_eq!(column_major(m), [1., 4., 7., 2., 5., 8., 3., 6., 9.]);
    }

    #[test]
    fn test_uploaded_view_maps_like_the_shader() {
        let view = View::new(Vec2f::new(10., 20.), Vec2f::new(100., 50.));
        let data = column_major(view.matrix());
        let p = Vec2f::new(60., 45.);

        // mat3 * vec3(p, 1.0) with `data` read column by column.
        let x = data[0] * p.x() + data[3] * p.y() + data[6];
        let y = data[1] * p.x() + data[4] * p.y() + data[7];

        assert_eq!(Vec2f::new(x, y), view.matrix().transform_point(p));
        assert!(approx_eq!(f32, x, 1., epsilon = 1e-5));
        assert!(approx_eq!(f32, y, -1., epsilon = 1e-5));
    }

    #[test]
    fn test_gl_access_makes_context_current() {
        let backend = CountingBackend::default();
        let gl = 42;

        assert_eq!(*current(&backend, &gl), 42);
        current(&backend, &gl);
        assert_eq!(backend.made_current.get(), 2);
    }
}
