//! Package implement a workload and oracle generator for red-black trees.
//!
//! An oracle run drives a trusted red-black tree with a randomized stream
//! of insert and delete operations, and after every operation emits a
//! canonical snapshot of the tree's color, key and shape. Independent
//! implementations can replay the same stream and diff their own snapshot
//! against the oracle, line by line.
//!
//! Output is line oriented:
//!
//! ```text
//! CMP ()
//! INS 5
//! CMP (B 5)
//! INS 3
//! CMP (B 5 (R 3) ())
//! DEL 5
//! CMP (B 3)
//! ```
//!
//! * [Policy] decides the next operation, biased by the tree's population.
//! * [Recorder] applies each decision to a [RedBlack] tree and streams
//!   [Record] values.
//! * [replay] reads a stream back and checks every snapshot.
//!
//! Trees are pluggable via the [RedBlack] and [Colored] traits. This package
//! ships two trusted implementations, a top-down red-black tree [rbt::Rbt]
//! and a left-leaning red-black tree [llrb::Llrb].

use std::{error, fmt, result};

/// Short form to compose Error values.
///
/// Here are few possible ways:
///
/// ```ignore
/// use crate::Error;
/// err_at!(InvalidInput, msg: "bad argument {}", arg);
/// ```
///
/// ```ignore
/// use crate::Error;
/// err_at!(IOError, out.write_all(buf));
/// ```
///
/// ```ignore
/// use crate::Error;
/// err_at!(InvalidFile, fs::read(file_path), "profile {:?}", file_path);
/// ```
#[macro_export]
macro_rules! err_at {
    ($v:ident, msg: $($arg:expr),+) => {{
        let prefix = format!("{}:{}", file!(), line!());
        Err(Error::$v(prefix, format!($($arg),+)))
    }};
    ($v:ident, $e:expr) => {{
        match $e {
            Ok(val) => Ok(val),
            Err(err) => {
                let prefix = format!("{}:{}", file!(), line!());
                Err(Error::$v(prefix, format!("{}", err)))
            }
        }
    }};
    ($v:ident, $e:expr, $($arg:expr),+) => {{
        match $e {
            Ok(val) => Ok(val),
            Err(err) => {
                let prefix = format!("{}:{}", file!(), line!());
                let msg = format!($($arg),+);
                Err(Error::$v(prefix, format!("{} {}", err, msg)))
            }
        }
    }};
}

mod config;
mod entropy;
mod keys;
mod policy;
mod record;
mod recorder;
mod replay;
mod shape;
mod snapshot;
mod stats;
mod tree;

pub mod llrb;
pub mod rbt;
pub mod util;

pub use crate::config::{Config, TreeKind};
pub use crate::entropy::Entropy;
pub use crate::keys::LiveKeys;
pub use crate::policy::{Decision, Policy};
pub use crate::record::{Op, Record};
pub use crate::recorder::{generate, Recorder};
pub use crate::replay::{replay, ReplayStats};
pub use crate::shape::{height_bound, Shape};
pub use crate::snapshot::{encode, Snapshot};
pub use crate::stats::Stats;
pub use crate::tree::{to_height, validate, Colored, RedBlack};

/// Error variants that can be returned by this package's API.
///
/// Each variant carries a prefix, typically identifying the
/// error location, and a message.
pub enum Error {
    /// Broken invariant, either in the reference tree or in the
    /// live-key bookkeeping. Always a bug.
    Fatal(String, String),
    IOError(String, String),
    InvalidInput(String, String),
    InvalidFile(String, String),
    FailConvert(String, String),
    /// Reference tree was asked to insert a key it already holds.
    DuplicateKey(String, String),
    /// Reference tree was asked to delete a key it does not hold.
    KeyNotFound(String, String),
    /// Replayed snapshot does not match the recorded one.
    Mismatch(String, String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        use Error::*;

        match self {
            Fatal(p, msg) => write!(f, "{} Fatal: {}", p, msg),
            IOError(p, msg) => write!(f, "{} IOError: {}", p, msg),
            InvalidInput(p, msg) => write!(f, "{} InvalidInput: {}", p, msg),
            InvalidFile(p, msg) => write!(f, "{} InvalidFile: {}", p, msg),
            FailConvert(p, msg) => write!(f, "{} FailConvert: {}", p, msg),
            DuplicateKey(p, msg) => write!(f, "{} DuplicateKey: {}", p, msg),
            KeyNotFound(p, msg) => write!(f, "{} KeyNotFound: {}", p, msg),
            Mismatch(p, msg) => write!(f, "{} Mismatch: {}", p, msg),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        write!(f, "{}", self)
    }
}

impl error::Error for Error {}

/// Type alias for Result return type, used by this package.
pub type Result<T> = result::Result<T, Error>;
