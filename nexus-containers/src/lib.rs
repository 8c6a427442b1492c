//! Owned containers: a doubling dynamic array and arena-backed linked
//! structures.
//!
//! # Containers
//!
//! | Container | Layout | Orientation | Key Operations |
//! |-----------|--------|-------------|----------------|
//! | [`Vector`] | Contiguous buffer | index 0 first | amortized O(1) push, explicit shrink |
//! | [`List`] | Linked nodes in an arena | index 0 is the front | O(1) push/pop at both ends |
//! | [`Queue`] | Linked nodes in an arena | index 0 is the head | O(1) join/fetch |
//! | [`Stack`] | Linked nodes in an arena | index 0 is the top | O(1) push/pop/peek |
//!
//! Every container supports deep copy ([`Clone`]), move ([`take`](Vector::take),
//! which leaves the source empty and reusable), element-wise equality,
//! bounds-checked indexing, search by value, and comma-separated
//! [`Display`](std::fmt::Display) rendering.
//!
//! # Quick Start
//!
//! ```
//! use nexus_containers::{Queue, Stack, Vector};
//!
//! let mut vector: Vector<u64> = Vector::new();
//! vector.push_back(1);
//! vector.push_back(2);
//! vector.push_back(3);
//! assert_eq!(vector.capacity(), 4);
//! assert_eq!(vector.index_of(&2), Some(1));
//!
//! let mut queue: Queue<u64> = vector.iter().copied().collect();
//! assert_eq!(queue.fetch_head(), Some(1));
//!
//! let mut stack: Stack<u64> = vector.iter().copied().collect();
//! assert_eq!(stack.pop(), Some(3));
//! ```
//!
//! # Underflow and Bounds
//!
//! Removing from or peeking into an empty container returns `None` and
//! leaves it untouched. Indexed accessors return [`OutOfRange`] without
//! mutating anything:
//!
//! ```
//! use nexus_containers::{List, OutOfRange};
//!
//! let mut list: List<u64> = List::new();
//! assert_eq!(list.pop_back(), None);
//! assert_eq!(list.set(0, 1), Err(OutOfRange { index: 0, len: 0 }));
//! ```
//!
//! # Linked Storage
//!
//! The linked containers store their nodes in an [`Arena`] they own and link
//! them by index rather than by pointer. Growing the arena never invalidates
//! a link, and a released slot is reused by the next push.
//!
//! The index type is a parameter (default `u32`); a smaller index shrinks
//! each node at the cost of a lower element limit:
//!
//! ```
//! use nexus_containers::List;
//!
//! let mut list: List<u8, u8> = (0..=253).collect();
//! assert_eq!(list.len(), 254);
//! list.push_back(254);
//! assert_eq!(list.get(254), Ok(&254));
//! ```
//!
//! # Logging
//!
//! Events go through `tracing`. The crate never installs a subscriber.
//!
//! | Level | Event | Fields |
//! |-------|-------|--------|
//! | `INFO` | [`Vector::preallocate`] clamped to length | `requested`, `len` |
//! | `TRACE` | [`Vector`] reallocation | `from`, `to` |

#![warn(missing_docs)]

#[macro_use]
mod owned;

mod chain;
pub mod config;
pub mod error;
pub mod index;
pub mod list;
pub mod queue;
mod render;
pub mod stack;
pub mod storage;
pub mod vector;

pub use config::{DEFAULT_INITIAL_CAPACITY, VectorConfig};
pub use error::OutOfRange;
pub use index::Index;
pub use list::List;
pub use owned::{IntoIter, Iter, IterMut};
pub use queue::Queue;
pub use stack::Stack;
pub use storage::{Arena, Storage};
pub use vector::{Clamped, Vector};
