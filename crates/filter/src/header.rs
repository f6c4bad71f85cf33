//! Header map accessors exposed by the host.

use crate::error::HeaderError;

/// Read and write access to one header map (request or response headers, or trailers).
///
/// Values are returned as borrowed byte slices so that a host backed by foreign memory can
/// hand them out without copying. Keys are matched case-insensitively.
pub trait HeaderAccess {
    /// Returns every value of `key`, in insertion order. Unknown keys yield an empty list.
    fn get(&self, key: &str) -> Vec<&[u8]>;

    /// Returns the first value of `key`.
    fn get_one(&self, key: &str) -> Option<&[u8]>;

    /// Returns every `(name, value)` pair of the map.
    fn get_all(&self) -> Vec<(&str, &[u8])>;

    /// Replaces all values of `key` with `value`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), HeaderError>;

    /// Adds `value` after the existing values of `key`.
    fn add(&mut self, key: &str, value: &str) -> Result<(), HeaderError>;

    /// Removes every value of `key`. Removing an unknown key does nothing.
    fn remove(&mut self, key: &str);
}
