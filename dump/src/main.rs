//! A CLI tool for inspecting the contents of a DICOM file
//! by printing it in a human readable format.
//!
//! Usage:
//!
//! ```none
//! dcmbufdump <file.dcm>
//! ```

use clap::Parser;
use dcmbuf_parser::DicomFile;
use snafu::{report, ResultExt, Whatever};
use std::io::{stdout, ErrorKind, Write};
use std::path::PathBuf;

/// Dump the contents of a DICOM file
#[derive(Debug, Parser)]
#[command(version)]
struct App {
    /// The DICOM file to read
    file: PathBuf,
}

#[report]
fn main() -> Result<(), Whatever> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_writer(std::io::stderr)
            .finish(),
    )
    .whatever_context("could not set up the logging subscriber")?;

    let App { file } = App::parse();

    let data = std::fs::read(&file)
        .whatever_context(format!("could not read {}", file.display()))?;
    let obj = DicomFile::from_bytes(&data)
        .whatever_context(format!("could not parse {}", file.display()))?;

    let mut to = stdout().lock();
    match dcmbuf_dump::dump_file_to(&mut to, &obj) {
        // a broken pipe means the consumer has seen enough
        Err(ref e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
    .whatever_context("could not write the dump")?;
    to.flush().ok();
    Ok(())
}
