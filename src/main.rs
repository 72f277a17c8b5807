//! Events frontend - Dioxus app.
//! Browser: dx serve (or cargo run, which execs it). Desktop: cargo run --features desktop.

#[cfg(any(feature = "desktop", target_arch = "wasm32"))]
fn main() {
    use events_frontend::app::App;
    dioxus::launch(App);
}

#[cfg(all(feature = "web", not(feature = "desktop"), not(target_arch = "wasm32")))]
fn main() {
    // A native `cargo run` of the web build hands over to the Dioxus CLI, which
    // compiles the wasm bundle and serves it. reference-types stays off so
    // wasm-bindgen can find its clone_ref intrinsics on recent toolchains.
    const NO_REF_TYPES: &str = "-C target-feature=-reference-types";
    let rustflags = match std::env::var("RUSTFLAGS") {
        Ok(existing) if !existing.trim().is_empty() => format!("{} {}", existing, NO_REF_TYPES),
        _ => NO_REF_TYPES.to_string(),
    };
    let status = std::process::Command::new("dx")
        .arg("serve")
        .env("RUSTFLAGS", &rustflags)
        .status();
    match status {
        Ok(s) => std::process::exit(s.code().unwrap_or(1)),
        Err(e) => {
            eprintln!("Could not run 'dx serve': {}", e);
            eprintln!("Install the Dioxus CLI: cargo install dioxus-cli");
            std::process::exit(1);
        }
    }
}

#[cfg(not(any(feature = "web", feature = "desktop", target_arch = "wasm32")))]
fn main() {
    eprintln!("Build with --features web or --features desktop.");
    std::process::exit(1);
}
