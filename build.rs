/// native-wrappers build script.
///
/// The exported DLL surface only exists on Windows. Other targets still build
/// the portable core so its unit tests run anywhere; say so instead of failing.
fn main() {
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os != "windows" {
        println!(
            "cargo:warning=native-wrappers exports nothing on {target_os:?}; \
             only the portable core is built"
        );
    }

    println!("cargo:rerun-if-changed=build.rs");
}
