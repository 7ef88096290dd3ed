//! Slot 0 of the registry.
//!
//! Index 0 addresses the whole default batch, so this entry exists only
//! to keep the table's numbering aligned with external tooling. It can
//! still be called directly through the registry API.

use tracing::info;

pub fn run() {
    info!("reserved slot executed directly");
}
