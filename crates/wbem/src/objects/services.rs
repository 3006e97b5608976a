//! SWbemServices

use automation::{RemoteHandle, Variant};

use crate::bridge::{
    call_object, call_void, fixed_flags, flag_mask, object_arg, query_language, required_text,
    reserved_flags,
};
use crate::error::Result;
use crate::flags::{GetFlag, InstancesFlag, SubclassesFlag, NOTIFICATION_QUERY_FLAGS};

use super::{
    AssociatorsOptions, CallOptions, DeleteOptions, EventSource, ExecMethodOptions,
    ExecQueryOptions, NotificationQueryOptions, Object, ObjectSet, ReferencesOptions,
    SecurityCapable,
};

/// A connection to one WMI namespace
///
/// Every operation blocks until the service answers. Operations taking
/// optional parameters come in two forms: `op(..)` leaves all of them
/// unspecified, `op_with(.., options)` takes them from an options struct.
#[derive(Debug)]
pub struct Services {
    handle: RemoteHandle,
}

scripting_object!(Services);

impl SecurityCapable for Services {}

impl Services {
    /// Objects associated with the object at `path`
    pub fn associators_of(&self, path: &str) -> Result<ObjectSet> {
        self.associators_of_with(path, &AssociatorsOptions::default())
    }

    pub fn associators_of_with(
        &self,
        path: &str,
        options: &AssociatorsOptions<'_>,
    ) -> Result<ObjectSet> {
        let args = [
            required_text(path, "Object path")?,
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
        call_object(&self.handle, "AssociatorsOf", &args)
    }

    /// Delete the class or instance at `path`
    pub fn delete(&self, path: &str) -> Result<()> {
        self.delete_with(path, &DeleteOptions::default())
    }

    pub fn delete_with(&self, path: &str, options: &DeleteOptions<'_>) -> Result<()> {
        let args = [
            required_text(path, "Object path")?,
            reserved_flags(options.flags)?,
            object_arg(options.context),
        ];
        call_void(&self.handle, "Delete", &args)
    }

    /// Execute `method` on the object at `path`, returning its out parameters
    pub fn exec_method(&self, path: &str, method: &str) -> Result<Object> {
        self.exec_method_with(path, method, &ExecMethodOptions::default())
    }

    pub fn exec_method_with(
        &self,
        path: &str,
        method: &str,
        options: &ExecMethodOptions<'_>,
    ) -> Result<Object> {
        let args = [
            required_text(path, "Object path")?,
            required_text(method, "Method name")?,
            object_arg(options.in_parameters),
            reserved_flags(options.flags)?,
            object_arg(options.context),
        ];
        call_object(&self.handle, "ExecMethod", &args)
    }

    /// Subscribe to the events selected by `query`
    pub fn exec_notification_query(&self, query: &str) -> Result<EventSource> {
        self.exec_notification_query_with(query, &NotificationQueryOptions::default())
    }

    pub fn exec_notification_query_with(
        &self,
        query: &str,
        options: &NotificationQueryOptions<'_>,
    ) -> Result<EventSource> {
        let args = [
            required_text(query, "Query string")?,
            query_language(options.language)?,
            fixed_flags(options.flags, NOTIFICATION_QUERY_FLAGS)?,
            object_arg(options.context),
        ];
        call_object(&self.handle, "ExecNotificationQuery", &args)
    }

    /// Run a WQL query
    pub fn exec_query(&self, query: &str) -> Result<ObjectSet> {
        self.exec_query_with(query, &ExecQueryOptions::default())
    }

    pub fn exec_query_with(&self, query: &str, options: &ExecQueryOptions<'_>) -> Result<ObjectSet> {
        let args = [
            required_text(query, "Query string")?,
            query_language(options.language)?,
            flag_mask(options.flags),
            object_arg(options.context),
        ];
        call_object(&self.handle, "ExecQuery", &args)
    }

    /// Fetch the class or instance at `path`
    ///
    /// Without a path the service returns a new, empty class.
    pub fn get(&self, path: Option<&str>) -> Result<Object> {
        self.get_with(path, &CallOptions::default())
    }

    pub fn get_with(&self, path: Option<&str>, options: &CallOptions<'_, GetFlag>) -> Result<Object> {
        let args = [
            Variant::optional_text(path),
            flag_mask(options.flags),
            object_arg(options.context),
        ];
        call_object(&self.handle, "Get", &args)
    }

    /// Instances of `class`
    pub fn instances_of(&self, class: &str) -> Result<ObjectSet> {
        self.instances_of_with(class, &CallOptions::default())
    }

    pub fn instances_of_with(
        &self,
        class: &str,
        options: &CallOptions<'_, InstancesFlag>,
    ) -> Result<ObjectSet> {
        let args = [
            required_text(class, "Class name")?,
            flag_mask(options.flags),
            object_arg(options.context),
        ];
        call_object(&self.handle, "InstancesOf", &args)
    }

    /// Association objects that refer to the object at `path`
    pub fn references_to(&self, path: &str) -> Result<ObjectSet> {
        self.references_to_with(path, &ReferencesOptions::default())
    }

    pub fn references_to_with(
        &self,
        path: &str,
        options: &ReferencesOptions<'_>,
    ) -> Result<ObjectSet> {
        let args = [
            required_text(path, "Object path")?,
            Variant::optional_text(options.result_class),
            Variant::optional_text(options.role),
            Variant::from(options.classes_only),
            Variant::from(options.schema_only),
            Variant::optional_text(options.required_qualifier),
            flag_mask(options.flags),
            object_arg(options.context),
        ];
        call_object(&self.handle, "ReferencesTo", &args)
    }

    /// Subclasses of `superclass`, or every top-level class without one
    pub fn subclasses_of(&self, superclass: Option<&str>) -> Result<ObjectSet> {
        self.subclasses_of_with(superclass, &CallOptions::default())
    }

    pub fn subclasses_of_with(
        &self,
        superclass: Option<&str>,
        options: &CallOptions<'_, SubclassesFlag>,
    ) -> Result<ObjectSet> {
        let args = [
            Variant::optional_text(superclass),
            flag_mask(options.flags),
            object_arg(options.context),
        ];
        call_object(&self.handle, "SubclassesOf", &args)
    }
}
