#[path = "shared/lib.rs"]
mod shared;
use shared::constants::{COMPRESSED_KNOWLEDGE_BASE_FILE_NAME, KNOWLEDGE_BASE_CSV_FILE_PATH};

use flate2::write::GzEncoder;
use flate2::Compression;
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Ensure that Cargo re-runs the build script if the input file changes
    println!(
        "cargo:rerun-if-changed={}",
        KNOWLEDGE_BASE_CSV_FILE_PATH.display()
    );

    let output_path =
        PathBuf::from(env::var("OUT_DIR")?).join(COMPRESSED_KNOWLEDGE_BASE_FILE_NAME);

    let mut input_file = File::open(&*KNOWLEDGE_BASE_CSV_FILE_PATH)?;

    // Create a buffer to hold the compressed data
    let mut compressed_data = Vec::new();

    {
        let mut encoder = GzEncoder::new(&mut compressed_data, Compression::default());
        io::copy(&mut input_file, &mut encoder)?;
        encoder.finish()?;
    }

    let mut output_file = File::create(&output_path)?;
    output_file.write_all(&compressed_data)?;

    Ok(())
}
