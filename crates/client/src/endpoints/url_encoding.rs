//! URL encoding utilities for constructing safe API paths.
//!
//! Provides percent-encoding for URL path segments to handle special characters
//! in account names that could otherwise cause path traversal or incorrect
//! URL resolution.
//!
//! # Security Considerations
//!
//! Without percent-encoding, special characters in resource names could:
//! - Escape the `user/{name}` template (`spez/../../api/v1/me` would hit another route)
//! - Break URL parsing (`spez?limit=1` would inject a query parameter)
//!
//! # Example
//!
//! ```
//! use reddit_client::endpoints::url_encoding::encode_path_segment;
//!
//! let path = format!("user/{}/about", encode_path_segment("some/user"));
//! assert_eq!(path, "user/some%2Fuser/about");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
///
/// RFC 3986 section 3.3 reserved and unsafe characters. Account names are
/// `[A-Za-z0-9_-]`, so anything else in a name is encoded rather than
/// rejected and the server decides whether it exists.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    // path and query delimiters
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'%')
    // unsafe in URLs
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'\\')
    .add(b'^')
    .add(b'|')
    .add(b'~')
    // sub-delims and template brackets
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'{')
    .add(b'}')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
///
/// Every account name interpolated into a path goes through here.
///
/// ```
/// use reddit_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("spez"), "spez");
/// assert_eq!(encode_path_segment("user name"), "user%20name");
/// assert_eq!(encode_path_segment("a/../b"), "a%2F..%2Fb");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
