#[macro_use]
extern crate log;

use std::env;
use std::process::exit;

use glpop::prelude::*;

const USAGE: &str = "usage: glpop [SETTINGS.json]";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("{}", USAGE);
        exit(1);
    }

    let settings = match args.get(1) {
        Some(path) => match Settings::load(path) {
            Ok(v) => v,
            Err(err) => {
                error!("{}", err);
                exit(1);
            }
        },
        None => Settings::default(),
    };

    let mut app = match Application::new(settings) {
        Ok(v) => v,
        Err(err) => {
            error!("{}", err);
            exit(-1);
        }
    };

    if let Err(err) = app.run() {
        error!("{}", err);
        exit(1);
    }
}
