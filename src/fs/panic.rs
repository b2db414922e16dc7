use std::error::Error;
use std::io::RawOsError;

use derive_more::{Display, Error};

/// Conditions which indicate corruption rather than a recoverable failure. These never surface
/// as [`Err`]s; they abort the operation with their own message.
pub(crate) trait Panic: Error {
    fn panic(&self) -> ! {
        panic!("{}", self)
    }
}

#[derive(Debug, Display, Error)]
#[display("file descriptor corruption")]
pub(crate) struct BadFdPanic;
impl Panic for BadFdPanic {}

#[derive(Debug, Display, Error)]
#[display("pointer exceeded stack space")]
pub(crate) struct BadStackAddrPanic;
impl Panic for BadStackAddrPanic {}

#[derive(Debug, Display, Error)]
#[display("unexpected OS error with code: {_0}")]
pub(crate) struct UnexpectedErrorPanic(#[error(not(source))] pub RawOsError);
impl Panic for UnexpectedErrorPanic {}
