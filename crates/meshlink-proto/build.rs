fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "regen")]
    {
        use std::env;
        use std::path::PathBuf;

        // Get the project root (workspace root)
        let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
        let workspace_root = manifest_dir
            .parent()
            .and_then(|p| p.parent())
            .ok_or("manifest dir has no workspace root")?;
        let proto_dir = workspace_root.join("proto");

        let proto_files = [proto_dir.join("daemon/v1/daemon.proto")];

        // Tell Cargo to rerun if proto files change
        for proto in &proto_files {
            println!("cargo:rerun-if-changed={}", proto.display());
        }

        // Only the client side is used; the daemon lives elsewhere.
        tonic_build::configure()
            .build_server(false)
            .build_client(true)
            .out_dir("src/gen")
            .compile_protos(&proto_files, &[proto_dir])?;
    }

    Ok(())
}
