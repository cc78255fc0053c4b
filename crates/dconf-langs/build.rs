use std::path::PathBuf;

#[path = "src/grammars.rs"]
mod grammars;

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR not set"));

    for tables in grammars::all() {
        let bytes = dconf_artifact::emit(&tables)
            .unwrap_or_else(|err| panic!("grammar `{}` does not encode: {err}", tables.name));

        let path = out_dir.join(format!(
            "{}.{}",
            tables.name,
            dconf_artifact::ARTIFACT_EXTENSION
        ));
        std::fs::write(&path, bytes)
            .unwrap_or_else(|err| panic!("cannot write {}: {err}", path.display()));
    }

    println!("cargo::rerun-if-changed=build.rs");
    println!("cargo::rerun-if-changed=src/grammars.rs");
}
