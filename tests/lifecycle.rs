extern crate glpop;

use glpop::application::lifecycle::{Lifecycle, LifecycleError};

#[test]
fn forward() {
    let mut state = Lifecycle::default();
    assert_eq!(state, Lifecycle::Uninitialized);

    for &next in &[
        Lifecycle::WindowCreated,
        Lifecycle::ResourcesBound,
        Lifecycle::Running,
        Lifecycle::Terminated,
    ] {
        state = state.advance(next).unwrap();
        assert_eq!(state, next);
    }

    assert_eq!(state.next(), None);
}

#[test]
fn skipping() {
    assert_eq!(
        Lifecycle::Uninitialized.advance(Lifecycle::Running),
        Err(LifecycleError::InvalidTransition {
            from: Lifecycle::Uninitialized,
            to: Lifecycle::Running,
        })
    );

    assert!(Lifecycle::WindowCreated.advance(Lifecycle::Terminated).is_err());
}

#[test]
fn no_reentry() {
    assert!(Lifecycle::Running.advance(Lifecycle::Running).is_err());
    assert!(Lifecycle::Running.advance(Lifecycle::ResourcesBound).is_err());
    assert!(Lifecycle::Terminated.advance(Lifecycle::Uninitialized).is_err());
}

#[test]
fn terminate_from_any_live_state() {
    for &from in &[
        Lifecycle::Uninitialized,
        Lifecycle::WindowCreated,
        Lifecycle::ResourcesBound,
        Lifecycle::Running,
    ] {
        assert_eq!(from.terminate(), Ok(Lifecycle::Terminated));
    }
}

#[test]
fn terminate_once() {
    assert_eq!(
        Lifecycle::Terminated.terminate(),
        Err(LifecycleError::InvalidTransition {
            from: Lifecycle::Terminated,
            to: Lifecycle::Terminated,
        })
    );
}

#[test]
fn ordered() {
    assert!(Lifecycle::Uninitialized < Lifecycle::WindowCreated);
    assert!(Lifecycle::Running < Lifecycle::Terminated);
}
