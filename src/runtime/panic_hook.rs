//! A panic hook that logs before delegating to the previous hook.
//!
//! If anything anywhere ever panics, we want it in the logs, not just on
//! stderr of whatever terminal happened to start the process.

use std::backtrace::Backtrace;
use std::panic;

/// Installs the panic hook.
pub fn install()
{
	let old_panic_hook = panic::take_hook();

	panic::set_hook(Box::new(move |panic_info| {
		tracing::error_span!("runtime::panic_hook").in_scope(|| {
			let backtrace = Backtrace::force_capture();
			tracing::error!("{panic_info}\n\nstack backtrace:\n{backtrace}");
		});

		old_panic_hook(panic_info)
	}));
}
