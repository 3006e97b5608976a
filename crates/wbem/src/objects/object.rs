//! SWbemObject

use automation::{FromVariant, RemoteHandle, Variant};

use crate::bridge::{
    call_object, call_value, call_void, flag_mask, object_arg, property_value, required_text,
    reserved_flags,
};
use crate::error::Result;
use crate::flags::{InstancesFlag, SubclassesFlag};

use super::{
    AssociatorsOptions, CallOptions, DeleteOptions, ExecMethodOptions, ObjectSet,
    ReferencesOptions, SecurityCapable,
};

/// A WMI class or instance
#[derive(Debug)]
pub struct Object {
    handle: RemoteHandle,
}

scripting_object!(Object);

impl SecurityCapable for Object {}

impl Object {
    /// Read the property `name` of this object
    pub fn property<T: FromVariant>(&self, name: &str) -> Result<T> {
        required_text(name, "Property name")?;
        property_value(&self.handle, name)
    }

    /// MOF text of this object
    pub fn get_object_text(&self) -> Result<String> {
        call_value(&self.handle, "GetObjectText_", &[Variant::Omitted])
    }

    /// Objects associated with this one
    pub fn associators(&self) -> Result<ObjectSet> {
        self.associators_with(&AssociatorsOptions::default())
    }

    pub fn associators_with(&self, options: &AssociatorsOptions<'_>) -> Result<ObjectSet> {
        let args = [
            Variant::optional_text(options.assoc_class),
            Variant::optional_text(options.result_class),
            Variant::optional_text(options.result_role),
            Variant::optional_text(options.role),
            Variant::from(options.classes_only),
            Variant::from(options.schema_only),
            Variant::optional_text(options.required_assoc_qualifier),
            Variant::optional_text(options.required_qualifier),
            flag_mask(options.flags),
            object_arg(options.context),
        ];
        call_object(&self.handle, "Associators_", &args)
    }

    /// Associations that refer to this object
    pub fn references(&self) -> Result<ObjectSet> {
        self.references_with(&ReferencesOptions::default())
    }

    pub fn references_with(&self, options: &ReferencesOptions<'_>) -> Result<ObjectSet> {
        let args = [
            Variant::optional_text(options.result_class),
            Variant::optional_text(options.role),
            Variant::from(options.classes_only),
            Variant::from(options.schema_only),
            Variant::optional_text(options.required_qualifier),
            flag_mask(options.flags),
            object_arg(options.context),
        ];
        call_object(&self.handle, "References_", &args)
    }

    /// Instances of this class
    pub fn instances(&self) -> Result<ObjectSet> {
        self.instances_with(&CallOptions::default())
    }

    pub fn instances_with(&self, options: &CallOptions<'_, InstancesFlag>) -> Result<ObjectSet> {
        let args = [flag_mask(options.flags), object_arg(options.context)];
        call_object(&self.handle, "Instances_", &args)
    }

    /// Subclasses of this class
    pub fn subclasses(&self) -> Result<ObjectSet> {
        self.subclasses_with(&CallOptions::default())
    }

    pub fn subclasses_with(&self, options: &CallOptions<'_, SubclassesFlag>) -> Result<ObjectSet> {
        let args = [flag_mask(options.flags), object_arg(options.context)];
        call_object(&self.handle, "Subclasses_", &args)
    }

    /// Execute `method` on this object, returning its out parameters
    pub fn exec_method(&self, method: &str) -> Result<Object> {
        self.exec_method_with(method, &ExecMethodOptions::default())
    }

    pub fn exec_method_with(&self, method: &str, options: &ExecMethodOptions<'_>) -> Result<Object> {
        let args = [
            required_text(method, "Method name")?,
            object_arg(options.in_parameters),
            reserved_flags(options.flags)?,
            object_arg(options.context),
        ];
        call_object(&self.handle, "ExecMethod_", &args)
    }

    /// Delete this object from the namespace
    pub fn delete(&self) -> Result<()> {
        self.delete_with(&DeleteOptions::default())
    }

    pub fn delete_with(&self, options: &DeleteOptions<'_>) -> Result<()> {
        let args = [reserved_flags(options.flags)?, object_arg(options.context)];
        call_void(&self.handle, "Delete_", &args)
    }

    /// A local copy of this object
    pub fn clone_object(&self) -> Result<Object> {
        call_object(&self.handle, "Clone_", &[])
    }

    /// A new instance of this class
    pub fn spawn_instance(&self) -> Result<Object> {
        call_object(&self.handle, "SpawnInstance_", &[Variant::Omitted])
    }

    /// A new class derived from this one
    pub fn spawn_derived_class(&self) -> Result<Object> {
        call_object(&self.handle, "SpawnDerivedClass_", &[Variant::Omitted])
    }
}
