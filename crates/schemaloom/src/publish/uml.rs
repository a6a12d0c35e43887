//! The UML/XMI interchange publisher.
//!
//! Serializes the model into a single `uml.xmi.xml` document: one package,
//! one `uml:Class` per item type in model order, one `uml:Property` per
//! property in declaration order with its cardinality bounds, and a
//! generalization edge for each declared supertype. Every identifier in the
//! document passes through an export-scoped [`IdRegistry`]; a collision
//! aborts the export before the filesystem is touched.

use std::{
    fs,
    io::Write as _,
    path::{Path, PathBuf},
};

use log::{debug, info};
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, Event},
};

use schemaloom_core::{ItemType, MaxCardinality, ModelGraph, Property as ModelProperty};

use crate::{
    error::ExportError,
    publish::{Publisher, registry::IdRegistry},
};

/// Output file name inside the target directory.
const OUTPUT_FILE_NAME: &str = "uml.xmi.xml";

/// Namespace of the XMI interchange schema.
const XMI_NAMESPACE: &str = "http://www.omg.org/spec/XMI/20110701";

/// Namespace of the UML metamodel.
const UML_NAMESPACE: &str = "http://www.omg.org/spec/UML/20110701";

/// Fallback for the model and package names when the model carries no
/// `Title` setting.
const DEFAULT_MODEL_NAME: &str = "Model";

/// Publisher for the UML/XMI interchange format.
///
/// # Examples
///
/// ```rust,no_run
/// use schemaloom::{ItemType, ModelGraph, Property};
/// use schemaloom::publish::{Publisher, UmlXmiPublisher};
///
/// let model = ModelGraph::new()
///     .with_setting("Title", "RestaurantMenu")
///     .with_item_type(
///         ItemType::new("Menu").with_property(Property::new("Name", "string")),
///     );
///
/// let publisher = UmlXmiPublisher::new("out").with_overwrite(true);
/// publisher.publish(&model).expect("Failed to publish");
/// ```
#[derive(Debug, Clone)]
pub struct UmlXmiPublisher {
    target_directory: PathBuf,
    overwrite: bool,
}

impl UmlXmiPublisher {
    /// Create a publisher writing into `target_directory`.
    ///
    /// Overwriting is off by default: publishing onto an existing
    /// destination fails with [`ExportError::DestinationExists`].
    pub fn new(target_directory: impl Into<PathBuf>) -> Self {
        Self {
            target_directory: target_directory.into(),
            overwrite: false,
        }
    }

    /// Replace an existing destination instead of failing on it.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// The directory the document is written into.
    pub fn target_directory(&self) -> &Path {
        &self.target_directory
    }

    /// Serialize the whole model into an indented document.
    ///
    /// Rendering assigns every identifier through a registry scoped to this
    /// call, so a collision surfaces here, before any write.
    fn render(&self, model: &ModelGraph) -> Result<Vec<u8>, ExportError> {
        let mut registry = IdRegistry::new();
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

        let mut root = BytesStart::new("xmi:XMI");
        root.push_attribute(("xmlns:uml", UML_NAMESPACE));
        root.push_attribute(("xmlns:xmi", XMI_NAMESPACE));
        writer.write_event(Event::Start(root))?;

        let mut documentation = BytesStart::new("xmi:Documentation");
        documentation.push_attribute(("exporter", env!("CARGO_PKG_NAME")));
        documentation.push_attribute(("exporterVersion", env!("CARGO_PKG_VERSION")));
        writer.write_event(Event::Empty(documentation))?;

        let title = model.title().unwrap_or(DEFAULT_MODEL_NAME);
        let mut model_element = BytesStart::new("uml:Model");
        model_element.push_attribute(("xmi:type", "uml:Model"));
        model_element.push_attribute(("name", title));
        writer.write_event(Event::Start(model_element))?;

        // The slug is the identifier-like setting; the title is display text.
        let package_id = registry.assign(model.slug().unwrap_or(title).to_string())?;
        let mut package = BytesStart::new("packagedElement");
        package.push_attribute(("xmi:type", "uml:Package"));
        package.push_attribute(("xmi:id", package_id.as_str()));
        package.push_attribute(("name", title));
        writer.write_event(Event::Start(package))?;

        for item_type in model.item_types() {
            write_class(&mut writer, &mut registry, item_type)?;
        }

        writer.write_event(Event::End(BytesEnd::new("packagedElement")))?;
        writer.write_event(Event::End(BytesEnd::new("uml:Model")))?;
        writer.write_event(Event::End(BytesEnd::new("xmi:XMI")))?;

        Ok(writer.into_inner())
    }
}

impl Publisher for UmlXmiPublisher {
    /// Export the model as `uml.xmi.xml` inside the target directory.
    ///
    /// The document is rendered fully in memory first, so identifier
    /// collisions abort before the filesystem is touched. The file then
    /// lands atomically via a temporary file in the target directory; no
    /// partial document is ever the final artifact.
    ///
    /// # Errors
    ///
    /// - [`ExportError::DestinationExists`] when the target directory
    ///   exists and overwrite was not requested
    /// - [`ExportError::DuplicateId`] when two elements derive the same
    ///   identifier
    /// - [`ExportError::Io`] for filesystem failures
    fn publish(&self, model: &ModelGraph) -> Result<(), ExportError> {
        info!(directory:? = self.target_directory; "Publishing UML interchange document");

        if self.target_directory.exists() && !self.overwrite {
            return Err(ExportError::DestinationExists(self.target_directory.clone()));
        }

        let document = self.render(model)?;

        if self.target_directory.exists() {
            fs::remove_dir_all(&self.target_directory)?;
        }
        fs::create_dir_all(&self.target_directory)?;

        let output_path = self.target_directory.join(OUTPUT_FILE_NAME);
        let mut temp_file = tempfile::NamedTempFile::new_in(&self.target_directory)?;
        temp_file.write_all(&document)?;
        temp_file.persist(&output_path)?;

        debug!(path:? = output_path; "Interchange document written");
        Ok(())
    }
}

/// Write one `uml:Class` element with its properties and generalization.
fn write_class(
    writer: &mut Writer<Vec<u8>>,
    registry: &mut IdRegistry,
    item_type: &ItemType,
) -> Result<(), ExportError> {
    let class_id = registry.assign(item_type.name().to_string())?;
    let mut class = BytesStart::new("packagedElement");
    class.push_attribute(("xmi:type", "uml:Class"));
    class.push_attribute(("xmi:id", class_id.as_str()));
    class.push_attribute(("name", item_type.name()));

    if item_type.properties().is_empty() && item_type.extends_type_name().is_none() {
        writer.write_event(Event::Empty(class))?;
        return Ok(());
    }
    writer.write_event(Event::Start(class))?;

    for property in item_type.properties() {
        write_property(writer, registry, item_type.name(), property)?;
    }

    if let Some(supertype) = item_type.extends_type_name() {
        let generalization_id =
            registry.assign(format!("{}.Generalization", item_type.name()))?;
        let mut generalization = BytesStart::new("generalization");
        generalization.push_attribute(("xmi:type", "uml:Generalization"));
        generalization.push_attribute(("xmi:id", generalization_id.as_str()));
        generalization.push_attribute(("general", supertype));
        writer.write_event(Event::Empty(generalization))?;
    }

    writer.write_event(Event::End(BytesEnd::new("packagedElement")))?;
    Ok(())
}

/// Write one `uml:Property` element with its type reference and bounds.
///
/// Absent cardinality bounds produce no element at all, never a default.
fn write_property(
    writer: &mut Writer<Vec<u8>>,
    registry: &mut IdRegistry,
    type_name: &str,
    property: &ModelProperty,
) -> Result<(), ExportError> {
    let property_id = registry.assign(format!("{}.{}", type_name, property.name()))?;
    let mut attribute = BytesStart::new("ownedAttribute");
    attribute.push_attribute(("xmi:type", "uml:Property"));
    attribute.push_attribute(("xmi:id", property_id.as_str()));
    attribute.push_attribute(("name", property.name()));
    writer.write_event(Event::Start(attribute))?;

    // The reference stays unresolved; referential correctness was already
    // the validator's job.
    let mut type_ref = BytesStart::new("type");
    type_ref.push_attribute(("xmi:idref", property.data_type_name()));
    writer.write_event(Event::Empty(type_ref))?;

    if let Some(min) = property.min_cardinality() {
        let lower_id = registry.assign(format!(
            "{}.{}.MinCardinality",
            type_name,
            property.name()
        ))?;
        let mut lower = BytesStart::new("lowerValue");
        lower.push_attribute(("xmi:type", "uml:LiteralInteger"));
        lower.push_attribute(("xmi:id", lower_id.as_str()));
        lower.push_attribute(("value", min.to_string().as_str()));
        writer.write_event(Event::Empty(lower))?;
    }

    if let Some(max) = property.max_cardinality() {
        let upper_id = registry.assign(format!(
            "{}.{}.MaxCardinality",
            type_name,
            property.name()
        ))?;
        // Unbounded renders as the interchange marker, not the source
        // sentinel.
        let value = match max {
            MaxCardinality::Bounded(bound) => bound.to_string(),
            MaxCardinality::Unbounded => "*".to_string(),
        };
        let mut upper = BytesStart::new("upperValue");
        upper.push_attribute(("xmi:type", "uml:LiteralUnlimitedNatural"));
        upper.push_attribute(("xmi:id", upper_id.as_str()));
        upper.push_attribute(("value", value.as_str()));
        writer.write_event(Event::Empty(upper))?;
    }

    writer.write_event(Event::End(BytesEnd::new("ownedAttribute")))?;
    Ok(())
}
