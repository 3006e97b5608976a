//! WMI scripting flag families and bitmask aggregation
//!
//! Each family lists the members accepted by one group of operations. Member
//! weights within a family are distinct single bits, so summing them is the
//! same as OR-ing them. Members whose scripting value is zero are not listed:
//! an empty flag list is sent as the omitted marker, which lets the service
//! apply its own default.

/// A member of a flag family
pub trait Flag: Copy {
    /// Value this member contributes to the mask
    fn weight(self) -> i32;
}

/// Fold flags into one mask; `None` when no flag was given
pub fn aggregate<F: Flag>(flags: &[F]) -> Option<i32> {
    if flags.is_empty() {
        return None;
    }
    Some(flags.iter().map(|flag| flag.weight()).sum())
}

/// wbemFlagReturnImmediately
pub const RETURN_IMMEDIATELY: i32 = 0x10;
/// wbemFlagForwardOnly
pub const FORWARD_ONLY: i32 = 0x20;
/// wbemFlagUseAmendedQualifiers
pub const USE_AMENDED_QUALIFIERS: i32 = 0x20000;
/// wbemQueryFlagShallow
pub const SHALLOW: i32 = 0x1;
/// wbemQueryFlagPrototype
pub const PROTOTYPE: i32 = 0x2;
/// wbemFlagEnsureLocatable
pub const ENSURE_LOCATABLE: i32 = 0x100;
/// wbemFlagDirectRead
pub const DIRECT_READ: i32 = 0x200;
/// The only legal flags value for ExecNotificationQuery
/// (wbemFlagReturnImmediately | wbemFlagForwardOnly)
pub const NOTIFICATION_QUERY_FLAGS: i32 = RETURN_IMMEDIATELY | FORWARD_ONLY;

macro_rules! flag_family {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident = $value:expr),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl Flag for $name {
            fn weight(self) -> i32 {
                match self {
                    $(Self::$variant => $value),+
                }
            }
        }
    };
}

flag_family! {
    /// Flags for `AssociatorsOf` / `Associators_`
    AssociatorsFlag {
        /// Return without waiting for the whole result set
        ReturnImmediately = RETURN_IMMEDIATELY,
        /// Forward-only enumerator
        ForwardOnly = FORWARD_ONLY,
        /// Return localized qualifiers
        UseAmendedQualifiers = USE_AMENDED_QUALIFIERS,
    }
}

flag_family! {
    /// Flags for `ReferencesTo` / `References_`
    ReferencesFlag {
        /// Return without waiting for the whole result set
        ReturnImmediately = RETURN_IMMEDIATELY,
        /// Forward-only enumerator
        ForwardOnly = FORWARD_ONLY,
        /// Return localized qualifiers
        UseAmendedQualifiers = USE_AMENDED_QUALIFIERS,
    }
}

flag_family! {
    /// Flags for `ExecQuery`
    ExecQueryFlag {
        /// Return the class layout of the result instead of the instances
        Prototype = PROTOTYPE,
        /// Return without waiting for the whole result set
        ReturnImmediately = RETURN_IMMEDIATELY,
        /// Forward-only enumerator
        ForwardOnly = FORWARD_ONLY,
        /// Returned objects carry enough information to build their path
        EnsureLocatable = ENSURE_LOCATABLE,
        /// Go straight to the provider
        DirectRead = DIRECT_READ,
        /// Return localized qualifiers
        UseAmendedQualifiers = USE_AMENDED_QUALIFIERS,
    }
}

flag_family! {
    /// Flags for `Get`
    GetFlag {
        /// Return localized qualifiers
        UseAmendedQualifiers = USE_AMENDED_QUALIFIERS,
    }
}

flag_family! {
    /// Flags for `InstancesOf` / `Instances_`
    InstancesFlag {
        /// Only the named class, not subclasses
        Shallow = SHALLOW,
        /// Return without waiting for the whole result set
        ReturnImmediately = RETURN_IMMEDIATELY,
        /// Forward-only enumerator
        ForwardOnly = FORWARD_ONLY,
        /// Go straight to the provider
        DirectRead = DIRECT_READ,
        /// Return localized qualifiers
        UseAmendedQualifiers = USE_AMENDED_QUALIFIERS,
    }
}

flag_family! {
    /// Flags for `SubclassesOf` / `Subclasses_`
    SubclassesFlag {
        /// Only immediate subclasses
        Shallow = SHALLOW,
        /// Return without waiting for the whole result set
        ReturnImmediately = RETURN_IMMEDIATELY,
        /// Forward-only enumerator
        ForwardOnly = FORWARD_ONLY,
        /// Return localized qualifiers
        UseAmendedQualifiers = USE_AMENDED_QUALIFIERS,
    }
}
