//! Generates both roles of `proto/conformance.json` into OUT_DIR.

use std::env;
use std::fs;
use std::path::Path;

use ipcgen_codegen::Role;
use ipcgen_codegen::targets::rust;
use ipcgen_types::Definitions;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let proto = Path::new("proto/conformance.json");
    println!("cargo::rerun-if-changed=build.rs");
    println!("cargo::rerun-if-changed={}", proto.display());

    let definitions = Definitions::load(proto)?;
    let out_dir = env::var("OUT_DIR")?;
    for role in Role::BOTH {
        let code = rust::generate(&definitions, role)?;
        fs::write(Path::new(&out_dir).join(format!("{role}.rs")), code)?;
    }
    Ok(())
}
