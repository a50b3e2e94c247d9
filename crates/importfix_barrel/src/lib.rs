//! Barrel (`index.js`) regeneration for service directories.
//!
//! Every directory that directly contains a file ending in the marker
//! suffix (`Service.js` by default) gets an `index.js` re-exporting each
//! sibling module, both as `export *` and as a named default.

mod barrel;
mod config;

// Re-export public API
pub use barrel::{BarrelResult, print_barrels, run_barrel};
pub use config::Config;
