//! # Condition Flag Tests

use std::cmp::Ordering;

use ls8_core::common::Trap;
use ls8_core::core::arch::flags::{FlagState, Flags};

#[test]
fn test_flags_from_ordering() {
    assert_eq!(
        Flags::from_ordering(Ordering::Equal),
        Flags { equal: true, greater: false, less: false }
    );
    assert_eq!(
        Flags::from_ordering(Ordering::Greater),
        Flags { equal: false, greater: true, less: false }
    );
    assert_eq!(
        Flags::from_ordering(Ordering::Less),
        Flags { equal: false, greater: false, less: true }
    );
}

#[test]
fn test_flag_state_unset_until_first_compare() {
    let mut state = FlagState::default();
    assert_eq!(state.get(), Err(Trap::FlagsUnset));
    state.set(Flags::from_ordering(Ordering::Greater));
    assert!(state.is_set());
    assert_eq!(state.equal(), Ok(false));
}
