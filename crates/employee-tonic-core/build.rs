/// Builds the gRPC client and server code for the `employee.proto` definition
/// using `tonic-prost-build`.
///
/// # Files and Paths
///
/// - Proto file: `proto/employee.proto`
/// - Includes: `proto/`
///
/// `google.protobuf.Empty` is mapped by prost to `()`, so the parameterless
/// RPCs take `tonic::Request<()>`.
///
/// The encoded file descriptor set is written to
/// `$OUT_DIR/employee_descriptor.bin` for the reflection service.
///
/// # Panics
///
/// This function will `panic!` if code generation fails.
use std::env;
use std::path::PathBuf;
fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let descriptor_path = out_dir.join("employee_descriptor.bin");

    println!("cargo:rerun-if-changed=proto/employee.proto");

    let mut config = tonic_prost_build::Config::new();
    config.file_descriptor_set_path(&descriptor_path);

    tonic_prost_build::configure()
        .compile_with_config(config, &["proto/employee.proto"], &["proto"])
        .unwrap();
}
