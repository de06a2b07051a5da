// crates/version/build.rs

use std::{env, fs, path::Path};

const DEFAULT_MAJOR: u32 = 5;
const DEFAULT_MINOR: u32 = 1;
const DEFAULT_BUILD: u32 = 59;

fn field(key: &str, default: u32) -> u32 {
    println!("cargo:rerun-if-env-changed={key}");
    match env::var(key) {
        Ok(val) => match val.trim().parse::<u32>() {
            Ok(v) if v <= 0xFF => v,
            _ => {
                println!("cargo:warning={key}={val} is not in 0..=255; using {default}");
                default
            }
        },
        Err(_) => default,
    }
}

fn main() {
    let major = field("NDB_VERSION_MAJOR", DEFAULT_MAJOR);
    let minor = field("NDB_VERSION_MINOR", DEFAULT_MINOR);
    let build = field("NDB_VERSION_BUILD", DEFAULT_BUILD);
    println!("cargo:rerun-if-env-changed=NDB_VERSION_STATUS");
    let status = env::var("NDB_VERSION_STATUS").unwrap_or_default();

    let out_dir = env::var("OUT_DIR").expect("missing OUT_DIR");
    let path = Path::new(&out_dir).join("own_version.rs");
    let contents = format!(
        "pub const OWN_MAJOR: u32 = {major};\n\
         pub const OWN_MINOR: u32 = {minor};\n\
         pub const OWN_BUILD: u32 = {build};\n\
         pub const OWN_STATUS: &str = {status:?};\n"
    );
    fs::write(&path, contents).expect("failed to write own_version.rs");
}
