pub mod config;
pub mod logging;

pub mod registry;
pub mod report;
pub mod validate;

pub use registry::{Registry, RegistryError};
pub use report::{validate_field, FieldErrors};
pub use validate::{validate, ErrorKind, HostMode, InvalidUrl, UrlValidator};
