//! WebGL2 program and buffers for the wave mesh.

use web_sys::{
    WebGl2RenderingContext as GL, WebGlProgram, WebGlShader, WebGlUniformLocation,
    WebGlVertexArrayObject,
};

use crate::error::{BackdropError, Result};
use crate::geometry::Icosphere;
use crate::stage::Stage;

const VERTEX_SOURCE: &str = include_str!("../shader/wave.vert");
const FRAGMENT_SOURCE: &str = include_str!("../shader/wave.frag");

struct Locations {
    projection: Option<WebGlUniformLocation>,
    view: Option<WebGlUniformLocation>,
    model: Option<WebGlUniformLocation>,
    time: Option<WebGlUniformLocation>,
    speed: Option<WebGlUniformLocation>,
    wave: Option<WebGlUniformLocation>,
    frequency: Option<WebGlUniformLocation>,
    color1: Option<WebGlUniformLocation>,
    color2: Option<WebGlUniformLocation>,
    light_direction: Option<WebGlUniformLocation>,
    light_intensity: Option<WebGlUniformLocation>,
}

impl Locations {
    fn lookup(gl: &GL, program: &WebGlProgram) -> Self {
        let at = |name: &str| gl.get_uniform_location(program, name);
        Self {
            projection: at("uProjection"),
            view: at("uView"),
            model: at("uModel"),
            time: at("uTime"),
            speed: at("uSpeed"),
            wave: at("uWave"),
            frequency: at("uFrequency"),
            color1: at("uColor1"),
            color2: at("uColor2"),
            light_direction: at("uLightDirection"),
            light_intensity: at("uLightIntensity"),
        }
    }
}

pub struct WaveProgram {
    gl: GL,
    program: WebGlProgram,
    vao: WebGlVertexArrayObject,
    locations: Locations,
    vertex_count: i32,
    line_count: i32,
}

impl WaveProgram {
    pub fn new(gl: GL, geometry: &Icosphere) -> Result<Self> {
        let vs = compile(&gl, GL::VERTEX_SHADER, VERTEX_SOURCE)?;
        let fs = compile(&gl, GL::FRAGMENT_SHADER, FRAGMENT_SOURCE)?;
        let program = link(&gl, &vs, &fs)?;
        gl.delete_shader(Some(&vs));
        gl.delete_shader(Some(&fs));

        let vao = gl
            .create_vertex_array()
            .ok_or_else(|| BackdropError::Js("create_vertex_array failed".into()))?;
        gl.bind_vertex_array(Some(&vao));

        let positions = geometry.flat_positions();
        let vertex_buffer = gl
            .create_buffer()
            .ok_or_else(|| BackdropError::Js("create_buffer failed".into()))?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&vertex_buffer));
        gl.buffer_data_with_array_buffer_view(
            GL::ARRAY_BUFFER,
            &js_sys::Float32Array::from(positions.as_slice()),
            GL::STATIC_DRAW,
        );
        let attrib = gl.get_attrib_location(&program, "position");
        if attrib < 0 {
            return Err(BackdropError::ProgramLink("attribute `position` missing".into()));
        }
        gl.enable_vertex_attrib_array(attrib as u32);
        gl.vertex_attrib_pointer_with_i32(attrib as u32, 3, GL::FLOAT, false, 0, 0);

        let edges = geometry.edge_indices();
        let index_buffer = gl
            .create_buffer()
            .ok_or_else(|| BackdropError::Js("create_buffer failed".into()))?;
        gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&index_buffer));
        gl.buffer_data_with_array_buffer_view(
            GL::ELEMENT_ARRAY_BUFFER,
            &js_sys::Uint32Array::from(edges.as_slice()),
            GL::STATIC_DRAW,
        );
        gl.bind_vertex_array(None);

        let locations = Locations::lookup(&gl, &program);
        log::info!(
            "uploaded {} triangles, {} edges",
            geometry.triangle_count(),
            edges.len() / 2
        );
        Ok(Self {
            gl,
            program,
            vao,
            locations,
            vertex_count: positions.len() as i32 / 3,
            line_count: edges.len() as i32,
        })
    }

    pub fn draw(&self, stage: &Stage) {
        let gl = &self.gl;
        let scene = &stage.scene;
        let u = &stage.uniforms;
        let l = &self.locations;

        gl.viewport(0, 0, gl.drawing_buffer_width(), gl.drawing_buffer_height());
        gl.clear_color(0.0, 0.0, 0.0, 0.0);
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
        gl.enable(GL::DEPTH_TEST);

        gl.use_program(Some(&self.program));
        gl.uniform_matrix4fv_with_f32_array(
            l.projection.as_ref(),
            false,
            &scene.camera.projection().to_cols_array(),
        );
        gl.uniform_matrix4fv_with_f32_array(l.view.as_ref(), false, &scene.camera.view().to_cols_array());
        gl.uniform_matrix4fv_with_f32_array(l.model.as_ref(), false, &scene.group.model().to_cols_array());
        gl.uniform1f(l.time.as_ref(), u.time);
        gl.uniform1f(l.speed.as_ref(), u.speed);
        gl.uniform1f(l.wave.as_ref(), u.wave);
        gl.uniform1f(l.frequency.as_ref(), u.frequency);
        gl.uniform3fv_with_f32_array(l.color1.as_ref(), &u.color1.to_array());
        gl.uniform3fv_with_f32_array(l.color2.as_ref(), &u.color2.to_array());
        gl.uniform3fv_with_f32_array(
            l.light_direction.as_ref(),
            &scene.light.direction.to_array(),
        );
        gl.uniform1f(l.light_intensity.as_ref(), scene.light.intensity);

        gl.bind_vertex_array(Some(&self.vao));
        if scene.group.mesh.wireframe {
            gl.draw_elements_with_i32(GL::LINES, self.line_count, GL::UNSIGNED_INT, 0);
        } else {
            gl.draw_arrays(GL::TRIANGLES, 0, self.vertex_count);
        }
        gl.bind_vertex_array(None);
    }
}

fn compile(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader> {
    let shader = gl
        .create_shader(kind)
        .ok_or_else(|| BackdropError::ShaderCompile("create_shader failed".into()))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    let ok = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(shader)
    } else {
        Err(BackdropError::ShaderCompile(
            gl.get_shader_info_log(&shader).unwrap_or_default(),
        ))
    }
}

fn link(gl: &GL, vs: &WebGlShader, fs: &WebGlShader) -> Result<WebGlProgram> {
    let program = gl
        .create_program()
        .ok_or_else(|| BackdropError::ProgramLink("create_program failed".into()))?;
    gl.attach_shader(&program, vs);
    gl.attach_shader(&program, fs);
    gl.link_program(&program);
    let ok = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(program)
    } else {
        Err(BackdropError::ProgramLink(
            gl.get_program_info_log(&program).unwrap_or_default(),
        ))
    }
}
