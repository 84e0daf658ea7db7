//! Resource definitions module.
//!
//! Each resource is defined in its own file and implements
//! [`ResourceDefinition`].

pub mod providers;

pub use providers::SupportedProvidersResource;

/// Metadata and content of a read-only resource.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Render the resource content.
    fn render() -> Result<String, String>;
}
