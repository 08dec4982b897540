//! Growable, index-validated dynamic array.
//!
//! [`DynArray`] owns a contiguous slot buffer and a logical length. It
//! supports appending, indexed insertion and removal, random access,
//! clearing, and an in-place quicksort driven by a caller-supplied
//! comparator.
//!
//! # Architecture
//!
//! ```text
//! DynArray<T> (length + bounds checks)
//! ├── SlotBuffer<T> (Box<[Option<T>]>, doubles when full)
//! └── sort::quicksort_by (last-element pivot, Lomuto partition)
//! ```
//!
//! # Capacity
//!
//! A new array holds [`DynArrayConfig::DEFAULT_INITIAL_CAPACITY`] slots.
//! Whenever an append or insert finds every slot occupied, the buffer
//! doubles before the write. The buffer never shrinks.
//!
//! # Threading
//!
//! The container is a plain owned value with no internal locking. It is
//! `Send`/`Sync` exactly when `T` is; every mutation takes `&mut self`, so
//! sharing it across threads for mutation requires external
//! synchronization.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
pub mod error;
pub mod sort;
mod storage;

// Public re-exports for the primary API surface.
pub use array::DynArray;
pub use config::{ConfigError, DynArrayConfig};
pub use error::DynArrayError;
pub use sort::quicksort_by;
