use std::env;

// Selects the word width from the target when the user picked neither feature.
fn main() {
    let explicit = env::var_os("CARGO_FEATURE_U32").is_some()
        || env::var_os("CARGO_FEATURE_U64").is_some();

    if !explicit {
        match env::var("CARGO_CFG_TARGET_POINTER_WIDTH").as_deref() {
            Ok("64") => println!("cargo:rustc-cfg=feature=\"u64\""),
            _ => println!("cargo:rustc-cfg=feature=\"u32\""),
        }
    }
}
