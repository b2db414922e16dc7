use derive_more::{Display, Error, From};

use super::FileType;

#[derive(Debug, Display, Clone, Error)]
#[display("search or read permission denied for the provided path")]
pub struct AccessError;

#[derive(Debug, Display, Clone, Error)]
#[display("interrupted by signal")]
pub struct InterruptError;

#[derive(Debug, Display, Clone, Error)]
#[display("error during I/O")]
pub struct IOError;

#[derive(Debug, Display, Clone, Error)]
#[display("out of memory")]
pub struct OOMError;

#[derive(Debug, Display, Clone, Error)]
#[display("exceeded open file limit for process")]
pub struct FileCountError;

#[derive(Debug, Display, Clone, Error)]
#[display("path contains too many symlinks")]
pub struct ExcessiveLinksError;

#[derive(Debug, Display, Clone, Error)]
#[display("path is too long")]
pub struct PathLengthError;

#[derive(Debug, Display, Clone, Error)]
#[display("no file exists at the provided path")]
pub struct MissingFileError;

#[derive(Debug, Display, Clone, Error)]
#[display("a component of the provided path is not a directory")]
pub struct NonDirComponentError;

#[derive(Debug, Display, Clone, Error)]
#[display("file metadata would overflow capacity")]
pub struct MetadataOverflowError;

#[derive(Debug, Display, Clone, Error)]
#[display("available storage space exhausted")]
pub struct StorageExhaustedError;

#[derive(Debug, Display, Clone, Error)]
#[display("path contains an interior nul byte")]
pub struct InvalidPathError;

#[derive(Debug, Display, Clone, Error)]
#[display("expected a regular file, found: {_0:?}")]
pub struct IrregularFileError(#[error(not(source))] pub FileType);

#[derive(Debug, Display, Clone, From, Error)]
pub enum MetadataError {
    OOM(OOMError),
    MetadataOverflow(MetadataOverflowError),
}

#[derive(Debug, Display, Clone, From, Error)]
pub enum OpenError {
    Access(AccessError),
    Interrupt(InterruptError),
    ExcessiveLinks(ExcessiveLinksError),
    FileCount(FileCountError),
    PathLength(PathLengthError),
    MissingFile(MissingFileError),
    OOM(OOMError),
    NonDirComponent(NonDirComponentError),
    InvalidPath(InvalidPathError),
    Irregular(IrregularFileError),
    MetadataOverflow(MetadataOverflowError),
}

impl From<MetadataError> for OpenError {
    fn from(value: MetadataError) -> Self {
        match value {
            MetadataError::OOM(e) => e.into(),
            MetadataError::MetadataOverflow(e) => e.into(),
        }
    }
}

#[derive(Debug, Display, Clone, From, Error)]
pub enum ReadError {
    Interrupt(InterruptError),
    IO(IOError),
    OOM(OOMError),
}

#[derive(Debug, Display, Clone, From, Error)]
pub enum ReadAllError {
    Interrupt(InterruptError),
    IO(IOError),
    OOM(OOMError),
    MetadataOverflow(MetadataOverflowError),
}

impl From<ReadError> for ReadAllError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::Interrupt(e) => e.into(),
            ReadError::IO(e) => e.into(),
            ReadError::OOM(e) => e.into(),
        }
    }
}

impl From<MetadataError> for ReadAllError {
    fn from(value: MetadataError) -> Self {
        match value {
            MetadataError::OOM(e) => e.into(),
            MetadataError::MetadataOverflow(e) => e.into(),
        }
    }
}

#[derive(Debug, Display, Clone, From, Error)]
pub enum CloseError {
    Interrupt(InterruptError),
    IO(IOError),
    StorageExhausted(StorageExhaustedError),
}

#[derive(Debug, Display, Clone, From, Error)]
pub enum LoadError {
    Access(AccessError),
    Interrupt(InterruptError),
    IO(IOError),
    ExcessiveLinks(ExcessiveLinksError),
    FileCount(FileCountError),
    PathLength(PathLengthError),
    MissingFile(MissingFileError),
    OOM(OOMError),
    NonDirComponent(NonDirComponentError),
    InvalidPath(InvalidPathError),
    Irregular(IrregularFileError),
    MetadataOverflow(MetadataOverflowError),
    StorageExhausted(StorageExhaustedError),
}

impl From<OpenError> for LoadError {
    fn from(value: OpenError) -> Self {
        match value {
            OpenError::Access(e) => e.into(),
            OpenError::Interrupt(e) => e.into(),
            OpenError::ExcessiveLinks(e) => e.into(),
            OpenError::FileCount(e) => e.into(),
            OpenError::PathLength(e) => e.into(),
            OpenError::MissingFile(e) => e.into(),
            OpenError::OOM(e) => e.into(),
            OpenError::NonDirComponent(e) => e.into(),
            OpenError::InvalidPath(e) => e.into(),
            OpenError::Irregular(e) => e.into(),
            OpenError::MetadataOverflow(e) => e.into(),
        }
    }
}

impl From<ReadAllError> for LoadError {
    fn from(value: ReadAllError) -> Self {
        match value {
            ReadAllError::Interrupt(e) => e.into(),
            ReadAllError::IO(e) => e.into(),
            ReadAllError::OOM(e) => e.into(),
            ReadAllError::MetadataOverflow(e) => e.into(),
        }
    }
}

impl From<CloseError> for LoadError {
    fn from(value: CloseError) -> Self {
        match value {
            CloseError::Interrupt(e) => e.into(),
            CloseError::IO(e) => e.into(),
            CloseError::StorageExhausted(e) => e.into(),
        }
    }
}
