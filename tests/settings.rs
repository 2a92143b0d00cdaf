extern crate glpop;
extern crate serde_json;
extern crate tempfile;

use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;

use glpop::cgmath::Vector2;
use glpop::prelude::*;

#[test]
fn defaults() {
    let settings = Settings::default();
    assert_eq!(settings.window.title, "OpenGL Tutorial");
    assert_eq!(settings.window.size, Vector2::new(800, 800));
    assert!(settings.window.vsync);
    assert_eq!(settings.scene, SceneKind::Quad);
    assert_eq!(settings.clear_color, [0.07, 0.13, 0.17, 1.0]);
    assert_eq!(settings.scale, 0.5);
    assert_eq!(
        settings.assets.quad_texture,
        PathBuf::from("assets/pop_cat.png")
    );
}

#[test]
fn partial() {
    let settings: Settings = serde_json::from_str(
        r#"{
            "scene": "triangle",
            "window": { "title": "Triangle" },
            "clear_color": [0.0, 0.0, 0.0, 1.0]
        }"#,
    )
    .unwrap();

    assert_eq!(settings.scene, SceneKind::Triangle);
    assert_eq!(settings.window.title, "Triangle");
    assert_eq!(settings.window.size, Vector2::new(800, 800));
    assert_eq!(settings.clear_color, [0.0, 0.0, 0.0, 1.0]);
    assert_eq!(settings.assets, AssetPaths::default());
}

#[test]
fn unknown_scene() {
    assert!(serde_json::from_str::<Settings>(r#"{ "scene": "cube" }"#).is_err());
}

#[test]
fn load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("load.json");
    fs::write(
        &path,
        r#"{ "window": { "size": { "x": 320, "y": 240 }, "visible": false }, "scale": 0.0 }"#,
    )
    .unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.window.size, Vector2::new(320, 240));
    assert!(!settings.window.visible);
    assert_eq!(settings.scale, 0.0);
}

#[test]
fn load_missing() {
    let dir = tempdir().unwrap();
    assert!(Settings::load(dir.path().join("missing.json")).is_err());
}

#[test]
fn load_malformed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("malformed.json");
    fs::write(&path, "{ window: ").unwrap();
    assert!(Settings::load(&path).is_err());
}
