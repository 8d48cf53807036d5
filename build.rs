fn main() {
    // Stamp the build; the footer's copyright year comes from it
    let built_at = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={built_at}");

    println!("cargo:rerun-if-changed=build.rs");
    // content is embedded with rust-embed
    println!("cargo:rerun-if-changed=content");
}
