// ── Configuration-property descriptors ───────────────────────────────────────
//
// The host platform builds its design-time configuration forms from these
// declarations. A connector ships one descriptor set per surface (connected
// system, each operation); values entered against them come back as the raw
// strings/ids the operation handlers translate.

use serde::{Deserialize, Serialize};

/// The value kinds the host's form builder distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyKind {
    Text,
    /// Stored encrypted by the host; never echoed in diagnostics or logs.
    EncryptedText,
    /// An opaque document handle from the host's document store.
    Document,
    /// An opaque folder id in the host's document store.
    Folder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    pub key: String,
    pub label: String,
    pub kind: PropertyKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub expressionable: bool,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub instruction_text: Option<String>,
}

impl PropertyDescriptor {
    pub fn text(key: &str) -> PropertyDescriptorBuilder {
        PropertyDescriptorBuilder::new(key, PropertyKind::Text)
    }

    pub fn encrypted_text(key: &str) -> PropertyDescriptorBuilder {
        PropertyDescriptorBuilder::new(key, PropertyKind::EncryptedText)
    }

    pub fn document(key: &str) -> PropertyDescriptorBuilder {
        PropertyDescriptorBuilder::new(key, PropertyKind::Document)
    }

    pub fn folder(key: &str) -> PropertyDescriptorBuilder {
        PropertyDescriptorBuilder::new(key, PropertyKind::Folder)
    }

    /// Whether values for this property must stay out of diagnostics/logs.
    pub fn is_secret(&self) -> bool {
        self.kind == PropertyKind::EncryptedText
    }
}

pub struct PropertyDescriptorBuilder {
    inner: PropertyDescriptor,
}

impl PropertyDescriptorBuilder {
    fn new(key: &str, kind: PropertyKind) -> Self {
        PropertyDescriptorBuilder {
            inner: PropertyDescriptor {
                key: key.to_string(),
                label: key.to_string(),
                kind,
                required: false,
                expressionable: false,
                read_only: false,
                description: None,
                instruction_text: None,
            },
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.inner.label = label.to_string();
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.inner.required = required;
        self
    }

    pub fn expressionable(mut self, expressionable: bool) -> Self {
        self.inner.expressionable = expressionable;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.inner.read_only = read_only;
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.inner.description = Some(description.to_string());
        self
    }

    pub fn instruction_text(mut self, text: &str) -> Self {
        self.inner.instruction_text = Some(text.to_string());
        self
    }

    pub fn build(self) -> PropertyDescriptor {
        self.inner
    }
}
