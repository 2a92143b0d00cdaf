//! These need a display and a driver with OpenGL 3.3 core, run them with
//! `cargo test -- --ignored --test-threads=1`.

extern crate glpop;
extern crate rand;

use rand::Rng;

use glpop::application::window::Window;
use glpop::cgmath::Vector2;
use glpop::prelude::*;
use glpop::video::backend;

const SOLID_VS: &str = r#"
#version 330 core
layout (location = 0) in vec3 aPos;
uniform float scale;
void main() { gl_Position = vec4(aPos * (1.0 + scale), 1.0); }
"#;

const SOLID_FS: &str = r#"
#version 330 core
out vec4 FragColor;
void main() { FragColor = vec4(1.0, 0.0, 1.0, 1.0); }
"#;

fn window(size: u32) -> Window {
    let params = WindowParams {
        title: "glpop-test".into(),
        size: Vector2::new(size, size),
        vsync: false,
        ..WindowParams::default()
    };

    Window::new(&params).unwrap()
}

/// A quad with a position and a color per vertex, every vertex the same `color`.
fn colored_quad(color: [f32; 3]) -> Mesh {
    let layout = VertexLayout::build()
        .with(0, VertexFormat::Float, 3)
        .with(1, VertexFormat::Float, 3)
        .finish();

    let mut vertices = Vec::new();
    for &(x, y) in &[(-0.5, -0.5), (-0.5, 0.5), (0.5, 0.5), (0.5, -0.5)] {
        vertices.extend_from_slice(&[x, y, 0.0]);
        vertices.extend_from_slice(&color);
    }

    Mesh::new(vertices, vec![0, 2, 1, 0, 3, 2], layout).unwrap()
}

fn solid_quad() -> Mesh {
    let layout = VertexLayout::build()
        .with(0, VertexFormat::Float, 3)
        .finish();

    Mesh::new(
        vec![
            -0.5, -0.5, 0.0, //
            -0.5, 0.5, 0.0, //
            0.5, 0.5, 0.0, //
            0.5, -0.5, 0.0,
        ],
        vec![0, 2, 1, 0, 3, 2],
        layout,
    )
    .unwrap()
}

#[test]
#[ignore]
fn buffer_read_back() {
    let _window = window(64);
    let mut rng = rand::thread_rng();

    for &len in &[1usize, 3, 64, 4097] {
        let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        let buffer = Buffer::new(BufferTarget::Vertex, &bytes).unwrap();
        assert_eq!(buffer.len(), len);
        assert_eq!(buffer.target(), BufferTarget::Vertex);
        assert_eq!(buffer.read_back().unwrap(), bytes);
    }

    // Element array bindings live in the vertex array, core contexts have no default one.
    let vertex_array = VertexArray::new().unwrap();
    vertex_array.bind();

    let mesh = Mesh::quad();
    let indices = Buffer::indices(&mesh).unwrap();
    assert_eq!(indices.target(), BufferTarget::Index);
    assert_eq!(indices.len(), mesh.index_bytes().len());
    assert_eq!(indices.read_back().unwrap(), mesh.index_bytes());

    vertex_array.unbind();
}

#[test]
#[ignore]
fn activate_and_draw() {
    let _window = window(64);
    let program = ShaderProgram::from_sources(SOLID_VS, SOLID_FS).unwrap();
    let scene = RenderScene::from_parts(&solid_quad(), program, None).unwrap();

    scene.program().activate();
    assert!(scene.program().uniform_location("scale").unwrap().is_some());
    assert!(scene.program().uniform_location("missing").unwrap().is_none());
    scene.draw(0.0).unwrap();
}

#[test]
#[ignore]
fn rasterized_center() {
    let window = window(64);
    let dimensions = window.dimensions();
    backend::viewport(dimensions).unwrap();

    let program = ShaderProgram::from_sources(SOLID_VS, SOLID_FS).unwrap();
    let scene = RenderScene::from_parts(&solid_quad(), program, None).unwrap();

    backend::clear([0.0, 0.0, 0.0, 1.0]).unwrap();
    scene.draw(0.0).unwrap();

    let center = Vector2::new(dimensions.x / 2, dimensions.y / 2);
    assert_eq!(backend::read_pixel(center).unwrap(), [255, 0, 255, 255]);
    assert_eq!(
        backend::read_pixel(Vector2::new(0, 0)).unwrap(),
        [0, 0, 0, 255]
    );
}

#[test]
#[ignore]
fn interleaved_color() {
    let window = window(64);
    let dimensions = window.dimensions();
    backend::viewport(dimensions).unwrap();

    let program = ShaderProgram::from_files(
        concat!(env!("CARGO_MANIFEST_DIR"), "/assets/color.vert"),
        concat!(env!("CARGO_MANIFEST_DIR"), "/assets/color.frag"),
    )
    .unwrap();

    let mesh = colored_quad([0.0, 1.0, 1.0]);
    assert_eq!(mesh.layout().stride(), 24);
    assert_eq!(mesh.layout().attribute(1).map(|v| v.offset), Some(12));

    let scene = RenderScene::from_parts(&mesh, program, None).unwrap();

    backend::clear([0.0, 0.0, 0.0, 1.0]).unwrap();
    scene.draw(0.0).unwrap();

    let center = Vector2::new(dimensions.x / 2, dimensions.y / 2);
    assert_eq!(backend::read_pixel(center).unwrap(), [0, 255, 255, 255]);
}

#[test]
#[ignore]
fn missing_uniform() {
    let _window = window(64);
    let program = ShaderProgram::from_sources(SOLID_VS, SOLID_FS).unwrap();
    program.activate();

    program.set_uniform_f32("missing", 1.0).unwrap();
    program.set_uniform_i32("missing", 1).unwrap();
    assert_eq!(program.uniform_location("missing").unwrap(), None);
}

#[test]
#[ignore]
fn compile_error() {
    let _window = window(64);
    match ShaderProgram::from_sources(SOLID_VS, "#version 330 core\nvoid main() { oops }") {
        Err(ShaderError::Compile { stage, log }) => {
            assert_eq!(stage, ShaderStage::Fragment);
            assert!(!log.is_empty());
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
#[ignore]
fn textured_quad() {
    let _window = window(64);
    let program = ShaderProgram::from_files(
        concat!(env!("CARGO_MANIFEST_DIR"), "/assets/default.vert"),
        concat!(env!("CARGO_MANIFEST_DIR"), "/assets/default.frag"),
    )
    .unwrap();

    let params = TextureParams::default();
    let texture = Texture::from_path(
        concat!(env!("CARGO_MANIFEST_DIR"), "/assets/pop_cat.png"),
        params,
    )
    .unwrap();

    assert_eq!(texture.dimensions(), Vector2::new(64, 64));
    texture.assign_uniform(&program, "tex0", params.unit).unwrap();

    let scene = RenderScene::from_parts(&Mesh::quad(), program, Some(texture)).unwrap();
    scene.draw(0.5).unwrap();
}
