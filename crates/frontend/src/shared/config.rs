//! Client configuration constants

/// Port the catalog API listens on when no explicit base URL is configured
pub const API_PORT: u16 = 3000;

/// Compile-time override for the API base URL, e.g. `https://api.example.com`
pub const API_BASE_OVERRIDE: Option<&str> = option_env!("CATALOG_API_BASE");

/// How long a toast stays on screen before it is dismissed automatically
pub const TOAST_AUTO_CLOSE_MS: u32 = 5000;

/// Rows per table page before the operator picks another size
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page sizes offered by the table pager
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [10, 15, 20, 25, 30];
