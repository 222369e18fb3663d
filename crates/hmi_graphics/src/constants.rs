use crate::shapes::PrimitiveMode;

pub trait GlConstant {
    fn gl_const(self) -> u32;
}

impl GlConstant for PrimitiveMode {
    fn gl_const(self) -> u32 {
        match self {
            PrimitiveMode::Points => glow::POINTS,
            PrimitiveMode::Lines => glow::LINES,
            PrimitiveMode::LineStrip => glow::LINE_STRIP,
            PrimitiveMode::LineLoop => glow::LINE_LOOP,
            PrimitiveMode::Triangles => glow::TRIANGLES,
            PrimitiveMode::TriangleStrip => glow::TRIANGLE_STRIP,
            PrimitiveMode::TriangleFan => glow::TRIANGLE_FAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_modes_are_distinct() {
        let modes = [
            PrimitiveMode::Points,
            PrimitiveMode::Lines,
            PrimitiveMode::LineStrip,
            PrimitiveMode::LineLoop,
            PrimitiveMode::Triangles,
            PrimitiveMode::TriangleStrip,
            PrimitiveMode::TriangleFan,
        ]
        .map(GlConstant::gl_const);

        for (i, a) in modes.iter().enumerate() {
            for b in &modes[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(PrimitiveMode::TriangleFan.gl_const(), glow::TRIANGLE_FAN);
    }
}
