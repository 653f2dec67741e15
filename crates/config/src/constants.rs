//! Centralized constants for the Reddit client workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// API host used when requests carry an OAuth bearer token.
pub const DEFAULT_OAUTH_BASE_URL: &str = "https://oauth.reddit.com";

/// API host used for anonymous, read-only requests.
pub const DEFAULT_PUBLIC_BASE_URL: &str = "https://www.reddit.com";

/// User agent sent when none is configured.
///
/// The service rejects or throttles requests with generic user agents, so
/// deployments should set their own.
pub const DEFAULT_USER_AGENT: &str = concat!("reddit-client/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Listing Defaults
// =============================================================================

/// Largest page the listing endpoints will return per request.
pub const MAX_LISTING_PAGE_SIZE: usize = 100;

// =============================================================================
// Gilding
// =============================================================================

/// Smallest number of months of gold that can be given in one call.
pub const MIN_GILD_MONTHS: u32 = 1;

/// Largest number of months of gold that can be given in one call.
pub const MAX_GILD_MONTHS: u32 = 36;

// =============================================================================
// Config File
// =============================================================================

/// Name of the JSON config file inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Application name used for platform config directory lookup.
pub const APP_NAME: &str = "reddit-client";
