use std::io::{self, RawOsError};
use std::mem::MaybeUninit;
use std::ops::Deref;

use libc::{c_int, stat as Stat};

use super::panic::{BadFdPanic, BadStackAddrPanic, Panic, UnexpectedErrorPanic};
use super::{
    CloseError, FileType, IOError, InterruptError, Metadata, MetadataError,
    MetadataOverflowError, OOMError, StorageExhaustedError,
};

#[derive(Debug)]
pub(crate) struct Fd(pub c_int);

impl Fd {
    pub fn metadata(&self) -> Result<Metadata, MetadataError> {
        let mut raw_meta: MaybeUninit<Stat> = MaybeUninit::uninit();
        // SAFETY: fstat either fills the provided buffer or fails, which is handled below.
        if unsafe { libc::fstat(self.0, raw_meta.as_mut_ptr()) } == -1 {
            match err_no() {
                libc::EBADF => BadFdPanic.panic(),
                libc::EFAULT => BadStackAddrPanic.panic(),
                libc::ENOMEM => Err(OOMError)?,
                libc::EOVERFLOW => Err(MetadataOverflowError)?,
                e => UnexpectedErrorPanic(e).panic(),
            }
        }
        // SAFETY: fstat initialized raw_meta, or the error handling above diverged.
        let raw = unsafe { raw_meta.assume_init() };

        Ok(Metadata {
            size: raw.st_size,
            file_type: match raw.st_mode & libc::S_IFMT {
                libc::S_IFBLK => FileType::BlockDevice,
                libc::S_IFCHR => FileType::CharDevice,
                libc::S_IFDIR => FileType::Directory,
                libc::S_IFIFO => FileType::FIFO,
                libc::S_IFLNK => FileType::Symlink,
                libc::S_IFREG => FileType::Regular,
                libc::S_IFSOCK => FileType::Socket,
                _ => FileType::Unknown,
            },
        })
    }

    pub fn close(self) -> Result<(), CloseError> {
        // SAFETY: close invalidates the provided descriptor regardless of the outcome, which is
        // why this method takes ownership of self.
        if unsafe { libc::close(self.0) } == -1 {
            match err_no() {
                libc::EBADF => BadFdPanic.panic(),
                libc::EINTR => Err(InterruptError)?,
                libc::EIO => Err(IOError)?,
                libc::ENOSPC | libc::EDQUOT => Err(StorageExhaustedError)?,
                e => UnexpectedErrorPanic(e).panic(),
            }
        }
        Ok(())
    }
}

impl Deref for Fd {
    type Target = c_int;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub(crate) fn err_no() -> RawOsError {
    // SAFETY: raw_os_error guarantees Some if constructed from last_os_error.
    unsafe { io::Error::last_os_error().raw_os_error().unwrap_unchecked() }
}
