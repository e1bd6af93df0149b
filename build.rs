use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// STM32H753VI memory layout: 2 MiB flash, 128 KiB DTCM for stack and statics.
const MEMORY_X: &[u8] = b"MEMORY
{
  FLASH : ORIGIN = 0x08000000, LENGTH = 2048K
  RAM   : ORIGIN = 0x20000000, LENGTH = 128K
}
";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Host builds (unit tests) only compile the library; nothing to link.
    let target = env::var("TARGET").unwrap_or_default();
    if !target.starts_with("thumb") {
        return;
    }

    // Generate memory.x so the cortex-m-rt linker script can include it
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("memory.x");
    File::create(&dest_path).unwrap().write_all(MEMORY_X).unwrap();

    // Add the output directory to the linker search path so `link.x` can find `memory.x`
    println!("cargo:rustc-link-search={}", out_dir);

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");

    // Only link defmt if the feature is enabled
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }
}
