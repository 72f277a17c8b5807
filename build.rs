// Desktop builds on Linux link against libxdo; fail early with install hints when it is absent.

fn main() {
    println!("cargo:rerun-if-env-changed=EVENTS_API_URL");

    let desktop = std::env::var("CARGO_FEATURE_DESKTOP").is_ok();
    let linux = std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("linux");
    if desktop && linux && !libxdo_installed() {
        eprintln!();
        eprintln!("  error: the desktop build on Linux needs libxdo.");
        eprintln!("    Fedora/RHEL:   sudo dnf install libxdo-devel");
        eprintln!("    Debian/Ubuntu: sudo apt install libxdo-dev");
        eprintln!("  Or build for the browser instead: dx serve");
        eprintln!();
        std::process::exit(1);
    }
}

fn libxdo_installed() -> bool {
    // libxdo often ships without a .pc file, so ldconfig is the fallback
    let pkg_config = std::process::Command::new("pkg-config")
        .args(["--exists", "libxdo"])
        .status()
        .map(|s| s.success());
    match pkg_config {
        Ok(true) => true,
        _ => std::process::Command::new("ldconfig")
            .arg("-p")
            .output()
            .map(|o| String::from_utf8_lossy(&o.stdout).contains("libxdo"))
            .unwrap_or(false),
    }
}
