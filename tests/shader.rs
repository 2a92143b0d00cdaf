extern crate glpop;
extern crate tempfile;

use std::fs;

use tempfile::tempdir;

use glpop::video::prelude::*;
use glpop::video::shader::read_source;

#[test]
fn read() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("read.vert");
    fs::write(&path, "#version 330 core\nvoid main() {}\n").unwrap();

    assert_eq!(
        read_source(&path).unwrap(),
        "#version 330 core\nvoid main() {}\n"
    );
}

#[test]
fn read_missing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.vert");
    match read_source(&path) {
        Err(ShaderError::Io { path: v, .. }) => assert_eq!(v, path),
        other => panic!("unexpected {:?}", other),
    }
}

// Sources are read before any GL call, so these run without a context.
#[test]
fn missing_vertex_source() {
    let dir = tempdir().unwrap();
    let vs = dir.path().join("nope.vert");
    let fs = dir.path().join("nope.frag");

    match ShaderProgram::from_files(&vs, &fs) {
        Err(ShaderError::Io { path, .. }) => assert_eq!(path, vs),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn missing_fragment_source() {
    let dir = tempdir().unwrap();
    let vs = dir.path().join("exists.vert");
    let fs = dir.path().join("absent.frag");
    fs::write(&vs, "#version 330 core\nvoid main() {}\n").unwrap();

    match ShaderProgram::from_files(&vs, &fs) {
        Err(ShaderError::Io { path, .. }) => assert_eq!(path, fs),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn stage_names() {
    assert_eq!(ShaderStage::Vertex.to_string(), "VERTEX");
    assert_eq!(ShaderStage::Fragment.to_string(), "FRAGMENT");

    let err = ShaderError::Compile {
        stage: ShaderStage::Fragment,
        log: "0:1(1): error: syntax error".into(),
    };

    let msg = err.to_string();
    assert!(msg.contains("FRAGMENT"));
    assert!(msg.contains("syntax error"));
}
