use std::{collections::HashMap, rc::Rc};

use glow::HasContext;

use crate::error::{GraphicsError, GraphicsResult};

pub const VERTEX_SHADER: &str = r#"#version 100
attribute vec2 a_position;
attribute vec4 a_color;

uniform mat3 u_transform;

varying vec4 v_color;

void main() {
    vec3 position = u_transform * vec3(a_position, 1.0);
    gl_Position = vec4(position.xy, 0.0, 1.0);
    v_color = a_color;
}
"#;

pub const FRAGMENT_SHADER: &str = r#"#version 100
precision mediump float;

varying vec4 v_color;

void main() {
    gl_FragColor = v_color;
}
"#;

pub struct ShaderSource<'a> {
    pub vertex: &'a str,
    pub fragment: &'a str,
}

impl Default for ShaderSource<'static> {
    fn default() -> Self {
        Self {
            vertex: VERTEX_SHADER,
            fragment: FRAGMENT_SHADER,
        }
    }
}

fn stage_name(kind: u32) -> &'static str {
    match kind {
        glow::VERTEX_SHADER => "vertex",
        glow::FRAGMENT_SHADER => "fragment",
        _ => "unknown",
    }
}

unsafe fn compile_shader(
    gl: &glow::Context,
    kind: u32,
    source: &str,
) -> GraphicsResult<glow::Shader> {
    let shader = gl.create_shader(kind).map_err(|e| {
        log::error!("Unable to create {} shader: {e}", stage_name(kind));
        GraphicsError::ShaderCreate(e)
    })?;

    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if !gl.get_shader_compile_status(shader) {
        let info_log = gl.get_shader_info_log(shader);
        log::error!(
            "Error compiling {} shader: {info_log}. Shader:\n{source}",
            stage_name(kind)
        );
        gl.delete_shader(shader);

        return Err(GraphicsError::ShaderCompile {
            stage: stage_name(kind),
            log: info_log,
        });
    }

    Ok(shader)
}

unsafe fn link_program(
    gl: &glow::Context,
    source: &ShaderSource,
) -> GraphicsResult<glow::Program> {
    let vertex = compile_shader(gl, glow::VERTEX_SHADER, source.vertex)?;
    let fragment = match compile_shader(gl, glow::FRAGMENT_SHADER, source.fragment) {
        Ok(fragment) => fragment,
        Err(e) => {
            gl.delete_shader(vertex);
            return Err(e);
        }
    };

    let shaders = [vertex, fragment];
    let program = match gl.create_program() {
        Ok(program) => program,
        Err(e) => {
            log::error!("Unable to create program: {e}");
            for shader in shaders {
                gl.delete_shader(shader);
            }
            return Err(GraphicsError::ProgramCreate(e));
        }
    };

    for shader in shaders {
        gl.attach_shader(program, shader);
    }

    gl.link_program(program);
    let linked = gl.get_program_link_status(program);

    for shader in shaders {
        gl.detach_shader(program, shader);
        gl.delete_shader(shader);
    }

    if !linked {
        let info_log = gl.get_program_info_log(program);
        log::error!("Error linking program: {info_log}");
        gl.delete_program(program);
        return Err(GraphicsError::ProgramLink(info_log));
    }

    Ok(program)
}

unsafe fn get_uniforms(
    gl: &glow::Context,
    program: glow::Program,
) -> HashMap<String, glow::UniformLocation> {
    let uniform_count = gl.get_active_uniforms(program);
    let mut uniforms = HashMap::with_capacity(uniform_count as usize);

    for i in 0..uniform_count {
        let Some(uniform) = gl.get_active_uniform(program, i) else {
            continue;
        };

        if let Some(location) = gl.get_uniform_location(program, &uniform.name) {
            uniforms.insert(uniform.name, location);
        }
    }

    uniforms
}

unsafe fn get_vertex_attributes(gl: &glow::Context, program: glow::Program) -> HashMap<String, u32> {
    let attribute_count = gl.get_active_attributes(program);
    let mut attributes = HashMap::with_capacity(attribute_count as usize);

    for i in 0..attribute_count {
        let Some(attribute) = gl.get_active_attribute(program, i) else {
            continue;
        };

        if let Some(location) = gl.get_attrib_location(program, &attribute.name) {
            attributes.insert(attribute.name, location);
        }
    }

    attributes
}

/// A linked shader program with its active uniforms and vertex attributes
/// resolved by name.
pub struct Program {
    gl: Rc<glow::Context>,
    program: glow::Program,
    uniforms: HashMap<String, glow::UniformLocation>,
    attributes: HashMap<String, u32>,
}

impl Program {
    pub fn new(gl: Rc<glow::Context>, source: &ShaderSource) -> GraphicsResult<Self> {
        let (program, uniforms, attributes) = unsafe {
            let program = link_program(&gl, source)?;
            (
                program,
                get_uniforms(&gl, program),
                get_vertex_attributes(&gl, program),
            )
        };

        log::debug!(
            "Linked program with uniforms {:?} and attributes {:?}",
            uniforms.keys().collect::<Vec<_>>(),
            attributes.keys().collect::<Vec<_>>()
        );

        Ok(Self {
            gl,
            program,
            uniforms,
            attributes,
        })
    }

    pub fn uniform_location(&self, name: &str) -> Option<&glow::UniformLocation> {
        self.uniforms.get(name)
    }

    pub fn attribute_location(&self, name: &str) -> Option<u32> {
        self.attributes.get(name).copied()
    }

    pub fn bind(&self) {
        unsafe { self.gl.use_program(Some(self.program)) };
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe {
            self.gl.use_program(None);
            self.gl.delete_program(self.program);
        }
    }
}
