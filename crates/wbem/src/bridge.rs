//! Invocation bridge shared by every typed operation
//!
//! Typed operations validate their arguments, encode them with the helpers
//! below, then hand the positional list to one of the `call_*` functions,
//! chosen by the kind of result the operation declares.

use automation::{Decoded, FromVariant, RemoteHandle, Variant};
use tracing::trace;

use crate::error::{Result, WbemError};
use crate::flags::{aggregate, Flag};
use crate::narrow::narrow_to;
use crate::objects::ScriptingObject;

/// The only accepted query language
pub const WQL: &str = "WQL";

/// Call a member that returns nothing
pub(crate) fn call_void(handle: &RemoteHandle, name: &str, args: &[Variant]) -> Result<()> {
    if let Decoded::Object(stray) = handle.call(name, args)? {
        trace!("{} returned object {}, releasing it", name, stray.id());
    }
    Ok(())
}

/// Call a member that returns a primitive
pub(crate) fn call_value<T: FromVariant>(
    handle: &RemoteHandle,
    name: &str,
    args: &[Variant],
) -> Result<T> {
    Ok(handle.call(name, args)?.into_value(name)?)
}

/// Call a member that returns an object and narrow it into `T`
pub(crate) fn call_object<T: ScriptingObject>(
    handle: &RemoteHandle,
    name: &str,
    args: &[Variant],
) -> Result<T> {
    let object = handle.call(name, args)?.into_object(name)?;
    narrow_to(object)
}

/// Read a primitive property
pub(crate) fn property_value<T: FromVariant>(handle: &RemoteHandle, name: &str) -> Result<T> {
    Ok(handle.property(name)?.into_value(name)?)
}

/// Read an object-valued property and narrow it into `T`
pub(crate) fn property_object<T: ScriptingObject>(handle: &RemoteHandle, name: &str) -> Result<T> {
    let object = handle.property(name)?.into_object(name)?;
    narrow_to(object)
}

/// Encode a required string; empty is rejected
pub(crate) fn required_text(value: &str, what: &str) -> Result<Variant> {
    if value.is_empty() {
        return Err(WbemError::invalid(format!("{what} is empty.")));
    }
    Ok(Variant::from(value))
}

/// Encode a reserved flags argument: zero or not given
pub(crate) fn reserved_flags(flags: Option<i32>) -> Result<Variant> {
    match flags {
        Some(value) if value != 0 => Err(WbemError::invalid("Flags must be zero.")),
        other => Ok(Variant::from(other)),
    }
}

/// Encode a flags argument that has exactly one legal value
pub(crate) fn fixed_flags(flags: Option<i32>, legal: i32) -> Result<Variant> {
    match flags {
        Some(value) if value != legal => {
            Err(WbemError::invalid(format!("Flags must be {legal}.")))
        }
        other => Ok(Variant::from(other)),
    }
}

/// Encode a flag list as one mask, or the omitted marker when empty
pub(crate) fn flag_mask<F: Flag>(flags: &[F]) -> Variant {
    Variant::from(aggregate(flags))
}

/// Encode an optional query language; when given it must be WQL
pub(crate) fn query_language(language: Option<&str>) -> Result<Variant> {
    match language {
        Some(lang) if lang != WQL => {
            Err(WbemError::invalid(format!("Query language must be \"{WQL}\".")))
        }
        other => Ok(Variant::from(other)),
    }
}

/// Encode an optional wrapper as the reference it owns
pub(crate) fn object_arg<T: ScriptingObject>(object: Option<&T>) -> Variant {
    object.map_or(Variant::Omitted, |o| o.handle().to_variant())
}
