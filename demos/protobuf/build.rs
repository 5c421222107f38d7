fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto/person/v1/person.proto");
    println!("cargo:rerun-if-changed=proto");

    // Zero-valued fields are left out of JSON, like proto3 JSON output.
    prost_build::Config::new()
        .protoc_executable(protoc_bin_vendored::protoc_bin_path()?)
        .type_attribute(
            ".person.v1.Person",
            "#[derive(serde::Serialize, serde::Deserialize)] #[serde(default)]",
        )
        .field_attribute(
            ".person.v1.Person.name",
            "#[serde(skip_serializing_if = \"String::is_empty\")]",
        )
        .field_attribute(
            ".person.v1.Person.age",
            "#[serde(skip_serializing_if = \"crate::is_zero\")]",
        )
        .compile_protos(&["proto/person/v1/person.proto"], &["proto"])?;

    Ok(())
}
