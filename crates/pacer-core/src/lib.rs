#![deny(missing_docs)]
#![doc = "Core vocabulary for the Pacer derived-quantity engine: edits, locks, lock history, commit rounding, and the validation error type."]

pub mod edit;
pub mod errors;
pub mod lock;
pub mod round;

pub use edit::Edit;
pub use errors::{check_positive, PacerError};
pub use lock::{BodyLock, FormLock, LockHistory, RunLock};
pub use round::{floor_milli, floor_whole};
