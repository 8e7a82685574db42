//! Request, result and nested models, one module per service.
//!
//! All models follow the same conventions:
//!
//! - Request-side fields are `Option<T>`; `None` means "never set" and is
//!   omitted from the payload
//! - Getters return the type default for unset scalars, strings, lists
//!   and enums, and `Option<&T>` for nested models
//! - `set_*` and `with_*` behave identically; `with_*` consumes and
//!   returns the model for chaining
//! - Result models expose getters only and are filled through
//!   [`FromWire`](crate::wire::FromWire); a mistyped value reads as the field's
//!   default instead of failing the whole result

pub mod amplifyuibuilder;
pub mod mediaconvert;
pub mod timestream_query;
