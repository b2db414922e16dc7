//! A small foundational utility crate: numeric comparison helpers and linear interpolation, a
//! singly-linked list with conversions to and from a contiguous [`Array`], an in-place escape
//! sequence decoder and a whole-file reader built directly on syscalls.
//!
//! # Purpose
//! These are the helpers I keep rewriting at the bottom of every project, collected once and
//! written properly. None of them are complicated; the value is in pinning down the exact
//! semantics (what does `min` return for equal inputs? what happens to a trailing backslash?)
//! and documenting them, rather than re-deciding each time.
//!
//! # Method
//! The collection types are written from scratch over raw allocations instead of wrapping the
//! standard library's containers - this crate doesn't use [`Vec`] at all. I've tried to keep
//! unsafe code confined to small, commented blocks with the invariants stated next to them.
//!
//! # Error Handling
//! Fallible operations return strongly typed errors: an individual struct per failure condition,
//! composed into per-operation enums for static dispatch. Conditions that indicate corruption
//! rather than a recoverable failure (a bad file descriptor, for example) panic instead of
//! returning an [`Err`]. Infallible numeric operations stay infallible - integer overflow wraps
//! and float division by zero produces the usual IEEE 754 results, exactly as documented on each
//! function.
//!
//! # Dependencies
//! The [`fs`] module relies on `libc` for its thin syscall wrappers and is gated behind the `fs`
//! feature (enabled by default, Linux only). Derive macros from `derive_more` cover the
//! repetitive parts of the error types. Nothing else.
//!
//! [`Array`]: collections::contiguous::Array
#![feature(box_vec_non_null)]
#![feature(trusted_len)]
#![feature(debug_closure_helpers)]
#![feature(raw_os_error_ty)]

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
pub mod fs;
pub mod numeric;
pub mod text;

pub(crate) mod util;
