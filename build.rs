use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Host builds (unit tests, the stub transport) need no target setup
    let target = env::var("TARGET").unwrap_or_default();
    if !target.contains("avr") {
        return;
    }

    // Configure for ATmega128
    println!("cargo:rustc-link-arg=-mmcu=atmega128");

    if env::var("CARGO_FEATURE_ATMEGA128").is_err() {
        println!("cargo:warning=Building for AVR without the `atmega128` feature: no TWI transport");
    }
}
