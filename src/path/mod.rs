//! Path Module
//!
//! Deterministic mapping from `(location, folder, key)` to a file path.
//!
//! ## Responsibilities
//! - Normalize joined path segments (no empty or `.` segments)
//! - Encode keys into file names that cannot escape the namespace folder
//! - Recover keys from bare file names
//!
//! ## On-Disk Layout
//! ```text
//! {location}/{folder}/{encode_key(key)}
//!
//! "alpha"    → alpha
//! "a/b c"    → a%2Fb%20c
//! ".hidden"  → %2Ehidden
//! ""         → %
//! ```

mod codec;
mod resolve;

pub use codec::{decode_file_name, encode_key, EMPTY_KEY_NAME};
pub use resolve::resolve_path;
