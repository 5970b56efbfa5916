//! Panic hook that gives the user their terminal back.

use super::setup::emergency_restore;
use std::panic;

/// Restore the terminal before the previous hook prints the panic.
///
/// Install after `color_eyre::install()` so the eyre report hook is the one
/// that runs second.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
