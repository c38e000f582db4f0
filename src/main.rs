use std::env;
use std::path::Path;
use std::process;

use geomio::formats::xyz::{self, LabelMode};

fn main() {
    let args: Vec<String> = env::args().collect();
    let Some(path) = args.get(1) else {
        eprintln!("usage: geomio <file.xyz>");
        process::exit(2);
    };

    match geomio::load_geometry(Path::new(path)) {
        Ok(geometry) => {
            let formatted = xyz::format(&geometry, 6, LabelMode::Symbol);
            if formatted.count == 0 {
                eprintln!("no atoms recognized; printing raw text");
            }
            println!("{}", formatted.text);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
