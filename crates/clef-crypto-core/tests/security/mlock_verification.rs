//! Memory-locking verification.
//!
//! `mlock` is best-effort: it fails under RLIMIT_MEMLOCK quotas and in
//! some container runtimes, and the containers deliberately fall back to
//! unlocked memory rather than refusing to work. These tests therefore
//! report status rather than demand it, except where the kernel gives a
//! definitive answer (VmLck accounting, RLIMIT_CORE).

use clef_crypto_core::{disable_core_dumps, SecretBuffer};

#[test]
fn mlock_status_is_observable() {
    let buf = SecretBuffer::new(b"mlock observation probe").expect("allocation should succeed");
    // No assert: quota-restricted environments legitimately report false.
    eprintln!("mlock status: {}", buf.is_mlocked());
}

/// Parse the VmLck line of /proc/self/status, in kB.
#[cfg(target_os = "linux")]
fn read_vmlck_kb() -> Option<u64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    for line in status.lines() {
        if let Some(rest) = line.strip_prefix("VmLck:") {
            return rest.split_whitespace().next()?.parse().ok();
        }
    }
    None
}

#[cfg(target_os = "linux")]
#[test]
fn vmlck_accounts_for_a_locked_buffer() {
    let Some(before_kb) = read_vmlck_kb() else {
        eprintln!("no VmLck line in /proc/self/status, skipping");
        return;
    };

    // 64 KiB spans enough pages that a successful lock must move VmLck.
    let buf = SecretBuffer::new(&vec![0x5A; 64 * 1024]).expect("allocation should succeed");
    let Some(after_kb) = read_vmlck_kb() else {
        eprintln!("no VmLck line in /proc/self/status, skipping");
        return;
    };

    eprintln!("VmLck before: {before_kb} kB, after: {after_kb} kB");
    if buf.is_mlocked() {
        assert!(
            after_kb > before_kb,
            "buffer reports locked but VmLck did not grow"
        );
    }
}

#[cfg(unix)]
#[test]
fn core_dumps_stay_disabled() {
    disable_core_dumps().expect("disable_core_dumps should succeed");

    let mut limit = libc::rlimit {
        rlim_cur: 1,
        rlim_max: 1,
    };
    // SAFETY: getrlimit writes into the provided struct; the pointer is
    // valid for the duration of the call.
    let ret = unsafe { libc::getrlimit(libc::RLIMIT_CORE, &raw mut limit) };
    assert_eq!(ret, 0);
    assert_eq!(limit.rlim_cur, 0);
    assert_eq!(limit.rlim_max, 0);
}
