//! Security requirement entity.

use super::map::Map;

/// One alternative set of security schemes required by an operation.
///
/// Keys name a security scheme, values list the scopes required for it.
pub type SecurityRequirement = Map<String, Vec<String>>;
