use tonic_prost_build::configure;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto/user/user.proto");

    if std::env::var_os("PROTOC").is_none() {
        std::env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);
    }

    configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(
            &[
                "proto/user/user.proto"
            ],
            &["proto"],
        )?;
    Ok(())
}
