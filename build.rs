use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Host builds only carry the library and its tests
    let target = env::var("TARGET").unwrap_or_default();
    if !target.contains("avr") {
        return;
    }

    // Configure for ATmega4809
    println!("cargo:rustc-link-arg=-mmcu=atmega4809");
}
