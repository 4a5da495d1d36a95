//! Startup banner display.

use std::path::Path;

/// Session configuration for display in the startup banner.
pub struct BannerInfo<'a> {
    pub model: &'a str,
    pub catalog_path: &'a Path,
    pub listings: usize,
    pub store_path: &'a Path,
    pub known_users: usize,
}

/// Print the startup banner with session info.
pub fn print_banner(info: &BannerInfo) {
    println!(
        r#"
   ╔═══════════════════════════════════════╗
   ║              D I S H A                ║
   ║   a compass needle for internships    ║
   ╚═══════════════════════════════════════╝

   version   {}
   model     {}
   catalog   {} ({} listings)
   store     {} ({} known users)
"#,
        env!("CARGO_PKG_VERSION"),
        info.model,
        info.catalog_path.display(),
        info.listings,
        info.store_path.display(),
        info.known_users,
    );
}
