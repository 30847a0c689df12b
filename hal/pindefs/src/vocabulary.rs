//! Reserved pin vocabulary and the identifier-collision guard
//!
//! The enums in this crate are commonly glob-imported
//! (`use pindefs::PinMode::*`) and their identifiers end up in generated
//! code. A consumer item named `Input` or `Active` silently shadows or
//! becomes ambiguous with the vocabulary, so collisions are rejected at
//! compile time instead.
//!
//! ```
//! pindefs::assert_not_reserved!(StatusLed, MotorEnable);
//! ```
//!
//! A reserved identifier stops the build with a diagnostic naming it:
//!
//! ```compile_fail
//! pindefs::assert_not_reserved!(Input);
//! ```
//!
//! ```compile_fail
//! pindefs::assert_not_reserved!(Heater, Active);
//! ```

use crate::level::{ActiveLevel, ElectricalLevel, LogicLevel};
use crate::mode::PinMode;

/// Every identifier owned by the pin vocabulary
///
/// Covers all variants of [`ActiveLevel`], [`PinMode`], [`LogicLevel`] and
/// [`ElectricalLevel`], plus the retired `Disable` and `Analog` names that
/// older consumers still carry.
pub const RESERVED: &[&str] = &[
    "Unset",
    "ActiveLow",
    "ActiveHigh",
    "Input",
    "InputPullup",
    "InputPulldown",
    "Output",
    "OutputOpenDrain",
    "InputOutput",
    "AnalogInput",
    "AnalogOutput",
    "Inactive",
    "Active",
    "Low",
    "High",
    "Disable",
    "Analog",
];

/// Identifier deliberately shared by more than one enum
pub const SHARED_SENTINEL: &str = "Unset";

/// Check whether `ident` exactly matches a reserved identifier
pub const fn is_reserved(ident: &str) -> bool {
    let mut i = 0;
    while i < RESERVED.len() {
        if str_eq(RESERVED[i], ident) {
            return true;
        }
        i += 1;
    }
    false
}

/// Find the reserved identifier `label` would collide with
///
/// Comparison ignores ASCII case and underscores, so `input_pullup`,
/// `INPUT_PULLUP` and `InputPullup` all collide with `InputPullup`. Used by
/// code generators that derive item names from free-form labels.
pub const fn collision(label: &str) -> Option<&'static str> {
    let mut i = 0;
    while i < RESERVED.len() {
        if loose_eq(RESERVED[i], label) {
            return Some(RESERVED[i]);
        }
        i += 1;
    }
    None
}

/// `assert!` at compile time that none of the given identifiers is reserved
///
/// Expands to one `const` assertion per identifier; a collision fails the
/// build with `naming conflict: `<ident>` is reserved by the pin vocabulary`.
#[macro_export]
macro_rules! assert_not_reserved {
    ($($ident:ident),+ $(,)?) => {
        $(
            const _: () = ::core::assert!(
                !$crate::vocabulary::is_reserved(::core::stringify!($ident)),
                ::core::concat!(
                    "naming conflict: `",
                    ::core::stringify!($ident),
                    "` is reserved by the pin vocabulary"
                )
            );
        )+
    };
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn loose_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let (mut i, mut j) = (0, 0);
    loop {
        while i < a.len() && a[i] == b'_' {
            i += 1;
        }
        while j < b.len() && b[j] == b'_' {
            j += 1;
        }
        match (i < a.len(), j < b.len()) {
            (false, false) => return true,
            (true, true) => {
                if a[i].to_ascii_lowercase() != b[j].to_ascii_lowercase() {
                    return false;
                }
                i += 1;
                j += 1;
            }
            _ => return false,
        }
    }
}

const fn contains(list: &[&str], ident: &str) -> bool {
    let mut i = 0;
    while i < list.len() {
        if str_eq(list[i], ident) {
            return true;
        }
        i += 1;
    }
    false
}

/// Every identifier of `idents` is listed in [`RESERVED`]
const fn covered(idents: &[&str]) -> bool {
    let mut i = 0;
    while i < idents.len() {
        if !is_reserved(idents[i]) {
            return false;
        }
        i += 1;
    }
    true
}

/// `a` and `b` share no identifier except the sentinel
const fn disjoint(a: &[&str], b: &[&str]) -> bool {
    let mut i = 0;
    while i < a.len() {
        if !str_eq(a[i], SHARED_SENTINEL) && contains(b, a[i]) {
            return false;
        }
        i += 1;
    }
    true
}

const fn unique(list: &[&str]) -> bool {
    let mut i = 0;
    while i < list.len() {
        let mut j = i + 1;
        while j < list.len() {
            if str_eq(list[i], list[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(unique(RESERVED), "duplicate entry in RESERVED");
const _: () = assert!(covered(ActiveLevel::IDENTS), "ActiveLevel variant missing from RESERVED");
const _: () = assert!(covered(PinMode::IDENTS), "PinMode variant missing from RESERVED");
const _: () = assert!(covered(LogicLevel::IDENTS), "LogicLevel variant missing from RESERVED");
const _: () = assert!(
    covered(ElectricalLevel::IDENTS),
    "ElectricalLevel variant missing from RESERVED"
);
const _: () = assert!(
    disjoint(ActiveLevel::IDENTS, PinMode::IDENTS)
        && disjoint(ActiveLevel::IDENTS, LogicLevel::IDENTS)
        && disjoint(ActiveLevel::IDENTS, ElectricalLevel::IDENTS)
        && disjoint(PinMode::IDENTS, LogicLevel::IDENTS)
        && disjoint(PinMode::IDENTS, ElectricalLevel::IDENTS)
        && disjoint(LogicLevel::IDENTS, ElectricalLevel::IDENTS),
    "vocabulary identifier reused across enums"
);

crate::assert_not_reserved!(PinConfig, PinError, Pull, LogicPin);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(is_reserved("Input"));
        assert!(is_reserved("OutputOpenDrain"));
        assert!(is_reserved("Disable"));
        assert!(!is_reserved("input"));
        assert!(!is_reserved("StatusLed"));
    }

    #[test]
    fn test_collision_ignores_case_and_underscores() {
        assert_eq!(collision("input_pullup"), Some("InputPullup"));
        assert_eq!(collision("ACTIVE_LOW"), Some("ActiveLow"));
        assert_eq!(collision("high"), Some("High"));
        assert_eq!(collision("_analog_"), Some("Analog"));
        assert_eq!(collision("status_led"), None);
        assert_eq!(collision("inputs"), None);
        assert_eq!(collision(""), None);
    }

    #[test]
    fn test_every_variant_is_reserved() {
        let tables = [
            ActiveLevel::IDENTS,
            PinMode::IDENTS,
            LogicLevel::IDENTS,
            ElectricalLevel::IDENTS,
        ];
        for table in tables {
            for ident in table {
                assert!(is_reserved(ident), "{}", ident);
            }
        }
    }
}
