//! Exit handling: exit codes, signal handlers, and process hardening.

pub const SUCCESS: i32 = 0;
pub const INVALID_REQUEST: i32 = 1;
pub const USAGE: i32 = 2;
pub const IO_FAILURE: i32 = 3;
pub const INTERRUPTED: i32 = 130;

/// Signal handler for SIGINT/SIGTERM/SIGHUP. Password buffers live on the
/// heap of this process only, so leaving immediately is enough.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::_exit(INTERRUPTED) }
}

/// Install signal handlers. Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::signal(
            libc::SIGINT,
            signal_handler as *const () as libc::sighandler_t,
        );
        libc::signal(
            libc::SIGTERM,
            signal_handler as *const () as libc::sighandler_t,
        );
        libc::signal(
            libc::SIGHUP,
            signal_handler as *const () as libc::sighandler_t,
        );
    }
}

/// Keep generated passwords out of core dumps and away from ptrace.
#[cfg(target_os = "linux")]
pub fn harden() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
pub fn harden() {}
