use std::ffi::CString;
use std::mem::ManuallyDrop;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::ptr;

use libc::{O_RDONLY, c_void};

use super::panic::{BadFdPanic, BadStackAddrPanic, Panic, UnexpectedErrorPanic};
use super::{
    AccessError, CloseError, ExcessiveLinksError, Fd, FileCountError, FileType, IOError,
    InterruptError, InvalidPathError, IrregularFileError, Metadata, MetadataError,
    MissingFileError, NonDirComponentError, OOMError, OpenError, PathLengthError, ReadAllError,
    ReadError, err_no,
};
use crate::collections::contiguous::Array;

/// A file opened for reading.
///
/// Dropping a File releases its descriptor with the outcome discarded; use [`File::close`] to
/// observe close errors instead.
#[derive(Debug)]
pub struct File {
    pub(crate) fd: Fd,
}

impl File {
    /// Opens the file at `file_path` for reading.
    ///
    /// Only regular files can be opened: anything else (a directory, a device node, a socket)
    /// reports [`IrregularFileError`] naming what was found, with the descriptor released
    /// before returning.
    pub fn open<P: AsRef<Path>>(file_path: P) -> Result<File, OpenError> {
        let pathname = CString::new(file_path.as_ref().as_os_str().as_bytes())
            .map_err(|_| InvalidPathError)?;

        // SAFETY: pathname is a valid nul-terminated string, and the flags request no file
        // creation so no mode argument is read.
        let file = match unsafe { libc::open(pathname.as_ptr(), O_RDONLY) } {
            -1 => {
                return Err(match err_no() {
                    libc::EACCES => AccessError.into(),
                    libc::EINTR => InterruptError.into(),
                    libc::ELOOP => ExcessiveLinksError.into(),
                    libc::EMFILE | libc::ENFILE => FileCountError.into(),
                    libc::ENAMETOOLONG => PathLengthError.into(),
                    libc::ENOENT => MissingFileError.into(),
                    libc::ENOMEM => OOMError.into(),
                    libc::ENOTDIR => NonDirComponentError.into(),
                    libc::EFAULT => BadStackAddrPanic.panic(),
                    e => UnexpectedErrorPanic(e).panic(),
                });
            },
            fd => File { fd: Fd(fd) },
        };

        match file.metadata()?.file_type {
            FileType::Regular => Ok(file),
            // Dropping file releases the descriptor.
            other => Err(IrregularFileError(other).into()),
        }
    }

    /// Returns the metadata of the open file.
    pub fn metadata(&self) -> Result<Metadata, MetadataError> {
        self.fd.metadata()
    }

    pub(crate) fn read_raw(&self, buf: *mut c_void, size: usize) -> Result<usize, ReadError> {
        // SAFETY: The caller guarantees buf is valid for writes of size bytes; read reports
        // every failure through its return value, handled below.
        match unsafe { libc::read(*self.fd, buf, size) } {
            -1 => match err_no() {
                libc::EBADF => BadFdPanic.panic(),
                libc::EFAULT => BadStackAddrPanic.panic(),
                libc::EINTR => Err(InterruptError.into()),
                libc::EIO => Err(IOError.into()),
                libc::ENOMEM => Err(OOMError.into()),
                e => UnexpectedErrorPanic(e).panic(),
            },
            count => Ok(count as usize),
        }
    }

    /// Reads into `buf` from the current file offset, returning the number of bytes read. Zero
    /// means the end of the file (when `buf` is non-empty).
    pub fn read(&self, buf: &mut [u8]) -> Result<usize, ReadError> {
        self.read_raw(buf.as_mut_ptr().cast(), buf.len())
    }

    /// Reads the rest of the file into a new [`Array`], sized from the file's metadata.
    ///
    /// A partial read continues where it left off until the expected size is reached; if the
    /// file ends early (truncated since being opened, or the offset was already past the
    /// start), the buffer is shrunk to what was actually read.
    pub fn read_all(&self) -> Result<Array<u8>, ReadAllError> {
        let size = self.metadata()?.size as usize;
        let mut buf = Array::<u8>::new_uninit(size);

        let mut filled = 0;
        while filled < size {
            // SAFETY: filled < size, so the offset pointer stays inside the allocation with
            // exactly size - filled writable bytes behind it.
            let dest = unsafe { buf.ptr.add(filled).as_ptr().cast::<c_void>() };
            match self.read_raw(dest, size - filled)? {
                0 => break,
                count => filled += count,
            }
        }

        if filled < size {
            buf.realloc(filled);
        }

        // SAFETY: Every byte up to filled was written by read, and the allocation was shrunk to
        // exactly filled when the file ended early.
        Ok(unsafe { buf.assume_init() })
    }

    /// Closes the file, consuming it and reporting the outcome of the close syscall.
    pub fn close(self) -> Result<(), CloseError> {
        let this = ManuallyDrop::new(self);
        // SAFETY: self is never touched again and its Drop is suppressed, so the descriptor is
        // closed exactly once, here.
        unsafe { ptr::read(&this.fd) }.close()
    }
}

impl Drop for File {
    fn drop(&mut self) {
        // SAFETY: Drop runs at most once and the descriptor is not used afterwards. The outcome
        // is discarded; close errors are only observable through the explicit method.
        unsafe { libc::close(*self.fd); }
    }
}
