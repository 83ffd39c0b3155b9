//! # Destinations
//!
//! Every screen the catalogue can show above the root is a `Destination`.
//! The set is closed: adding a screen means adding a variant here, and the
//! compiler then points at every `match` that has to learn about it.
//!
//! ```text
//! Destination            Kind
//! ───────────            ────
//! Toasts          ──▶    Kind::Toasts
//! Charts          ──▶    Kind::Charts
//! TextFields      ──▶    Kind::TextFields
//! Detail { id }   ──▶    Kind::Detail      (payload ignored)
//! ```
//!
//! Stack operations match entries by `Kind` only. Two `Detail` entries with
//! different ids are the same kind, so `pop_up_to(Kind::Detail, ..)` stops at
//! the nearest one whatever its id.

use std::fmt;

/// A navigation target: a variant tag plus its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Toasts,
    Charts,
    TextFields,
    Detail { id: u32 },
}

/// The identity of a destination, independent of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Toasts,
    Charts,
    TextFields,
    Detail,
}

impl Kind {
    /// Every kind, in catalogue order.
    pub const ALL: [Kind; 4] = [Kind::Toasts, Kind::Charts, Kind::TextFields, Kind::Detail];

    pub fn label(self) -> &'static str {
        match self {
            Kind::Toasts => "Toasts",
            Kind::Charts => "Charts",
            Kind::TextFields => "Text fields",
            Kind::Detail => "Detail",
        }
    }

    /// One-line blurb shown next to the kind in the catalogue.
    pub fn description(self) -> &'static str {
        match self {
            Kind::Toasts => "Transient notifications",
            Kind::Charts => "Bar charts over sample series",
            Kind::TextFields => "Single-line text input",
            Kind::Detail => "Parameterized detail screen",
        }
    }

    /// The destination the catalogue opens for this kind.
    pub fn default_destination(self) -> Destination {
        match self {
            Kind::Toasts => Destination::Toasts,
            Kind::Charts => Destination::Charts,
            Kind::TextFields => Destination::TextFields,
            Kind::Detail => Destination::Detail { id: 1 },
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Destination {
    pub fn kind(&self) -> Kind {
        match self {
            Destination::Toasts => Kind::Toasts,
            Destination::Charts => Kind::Charts,
            Destination::TextFields => Kind::TextFields,
            Destination::Detail { .. } => Kind::Detail,
        }
    }

    /// Screen title, including the payload where there is one.
    pub fn title(&self) -> String {
        match self {
            Destination::Detail { id } => format!("Detail #{id}"),
            other => other.kind().label().to_string(),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title())
    }
}

/// True when both destinations have the same kind. Payloads are not compared.
pub fn same_kind(a: &Destination, b: &Destination) -> bool {
    a.kind() == b.kind()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_ignores_payload() {
        let a = Destination::Detail { id: 5 };
        let b = Destination::Detail { id: 7 };
        assert!(same_kind(&a, &b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_distinct_kinds_do_not_match() {
        assert!(!same_kind(&Destination::Toasts, &Destination::Charts));
        assert!(!same_kind(&Destination::TextFields, &Destination::Detail { id: 1 }));
    }

    #[test]
    fn test_default_destination_round_trips_kind() {
        for kind in Kind::ALL {
            assert_eq!(kind.default_destination().kind(), kind);
        }
    }

    #[test]
    fn test_titles() {
        assert_eq!(Destination::Detail { id: 3 }.title(), "Detail #3");
        assert_eq!(Destination::TextFields.title(), "Text fields");
        assert_eq!(Kind::Charts.to_string(), "Charts");
    }
}
