use std::path::Path;

use super::{File, LoadError};
use crate::collections::contiguous::Array;

/// Reads the entire contents of the file at `path`.
///
/// The returned [`Array`] holds the file's exact bytes - embedded zeros included - with the
/// file size as its length. A legitimately empty file yields `Ok` with a zero-length Array,
/// which is distinct from [`LoadError::MissingFile`] and every other failure. The descriptor is
/// closed before returning on every path, success or failure.
///
/// # Examples
/// ```no_run
/// # use utility_lib::fs;
/// let contents = fs::load("/etc/hostname")?;
/// println!("{} bytes", contents.len());
/// # Ok::<(), fs::LoadError>(())
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<Array<u8>, LoadError> {
    let file = File::open(path)?;

    match file.read_all() {
        Ok(contents) => {
            file.close()?;
            Ok(contents)
        },
        Err(error) => {
            // The drop impl releases the descriptor; reporting a close failure here would mask
            // the read error.
            drop(file);
            Err(error.into())
        },
    }
}
