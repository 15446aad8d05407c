use super::*;

#[test]
fn guard_grants_only_the_first_claim() {
    let guard = BootGuard::new();
    assert!(!guard.is_booted());
    assert!(guard.claim());
    assert!(guard.is_booted());
    assert!(!guard.claim());
    assert!(!guard.claim());
}

#[test]
fn separate_guards_are_independent() {
    let first = BootGuard::default();
    let second = BootGuard::default();
    assert!(first.claim());
    assert!(second.claim());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn repeated_boot_is_harmless() {
    boot(false);
    boot(false);
    assert!(BOOT.is_booted());
}
