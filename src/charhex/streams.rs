//! Input and output streams
//!
//! Both ends are owned handles released when dropped. The output must be
//! [`Output::finish`]ed to observe flush failures; dropping it flushes on a
//! best-effort basis.

use crate::charhex::error::ResourceError;
use log::debug;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Read, StdinLock, Stdout, Write};
use std::path::Path;

/// Permissions for newly created output files
#[cfg(unix)]
const OUTPUT_MODE: u32 = 0o644;

/// Buffered source of input lines
pub enum Input {
    Stdin(StdinLock<'static>),
    File(BufReader<File>),
}

/// Buffered destination for records
pub enum Output {
    Stdout(BufWriter<Stdout>),
    File(BufWriter<File>),
}

/// Open `path` for reading, or standard input when no path is given.
pub fn open_input(path: Option<&Path>) -> Result<Input, ResourceError> {
    match path {
        None => {
            debug!("reading from stdin");
            Ok(Input::Stdin(io::stdin().lock()))
        }
        Some(path) => {
            debug!("reading from {}", path.display());
            let file = File::open(path).map_err(|source| ResourceError::OpenInput {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Input::File(BufReader::new(file)))
        }
    }
}

/// Open `path` for writing, or standard output when no path is given.
///
/// An existing file is truncated only when `overwrite` is set; otherwise
/// opening fails if the path exists.
pub fn open_output(path: Option<&Path>, overwrite: bool) -> Result<Output, ResourceError> {
    match path {
        None => {
            debug!("writing to stdout");
            Ok(Output::Stdout(BufWriter::new(io::stdout())))
        }
        Some(path) => {
            debug!("writing to {} (overwrite: {})", path.display(), overwrite);
            let file = output_options(overwrite)
                .open(path)
                .map_err(|source| ResourceError::OpenOutput {
                    path: path.to_path_buf(),
                    source,
                })?;
            Ok(Output::File(BufWriter::new(file)))
        }
    }
}

fn output_options(overwrite: bool) -> OpenOptions {
    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(OUTPUT_MODE);
    }
    options
}

impl Output {
    /// Flush buffered records and release the stream.
    pub fn finish(mut self) -> Result<(), ResourceError> {
        self.flush().map_err(|source| ResourceError::Flush { source })
    }
}

impl Read for Input {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Input::Stdin(r) => r.read(buf),
            Input::File(r) => r.read(buf),
        }
    }
}

impl BufRead for Input {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            Input::Stdin(r) => r.fill_buf(),
            Input::File(r) => r.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            Input::Stdin(r) => r.consume(amt),
            Input::File(r) => r.consume(amt),
        }
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(w) => w.write(buf),
            Output::File(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(w) => w.flush(),
            Output::File(w) => w.flush(),
        }
    }
}
