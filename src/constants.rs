pub const EXTENSION_PREFIX: &str = "x-";

pub const REFERENCE_KEY: &str = "$ref";

pub const DEFINITIONS_POINTER: &str = "#/definitions/";

pub const PARAMETERS_POINTER: &str = "#/parameters/";

/// Host used for synthesized servers when the document has none. It already
/// ends in `/`, so combined with the default base path the address carries `//`.
pub const DEFAULT_HOST: &str = "example.org/";

pub const DEFAULT_BASE_PATH: &str = "/";

pub const DEFAULT_MAX_DEPTH: usize = 128;

#[inline]
pub fn is_extension_key(key: &str) -> bool {
    key.starts_with(EXTENSION_PREFIX)
}

#[inline]
pub fn is_path_key(key: &str) -> bool {
    key.starts_with('/')
}
