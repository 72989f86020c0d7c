// Build script for greeter - embeds version and build date at compile time

fn main() {
    // Release pipelines may pin the version; otherwise use Cargo.toml
    let version =
        std::env::var("GREETER_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());

    let build_date = chrono::Utc::now().format("%Y-%m-%d").to_string();

    println!("cargo:rustc-env=GREETER_VERSION={}", version);
    println!("cargo:rustc-env=GREETER_BUILD_DATE={}", build_date);

    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed=GREETER_VERSION");
}
