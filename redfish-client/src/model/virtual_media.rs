//! The virtual media resource: remote images a manager can present to its
//! host as local devices.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::RedfishResult;
use crate::http::SharedClient;
use crate::model::common::ActionTarget;
use crate::resource::{get_resource, post_action, Entity, Resource, Updatable, WritableField};

/// How a virtual media image is connected to the host.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ConnectedVia {
    /// No current connection.
    #[default]
    NotConnected,
    /// Connected to a URI location.
    URI,
    /// Connected to a client application.
    Applet,
    /// Connected through an OEM-defined method.
    Oem,
}

/// The device types a virtual media slot can emulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum MediaType {
    /// A CD-ROM format image.
    CD,
    /// A DVD format image.
    DVD,
    /// An emulated USB stick.
    USBStick,
    /// A floppy disk image.
    Floppy,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VirtualMediaActions {
    #[serde(rename = "#VirtualMedia.InsertMedia")]
    insert_media: ActionTarget,
    #[serde(rename = "#VirtualMedia.EjectMedia")]
    eject_media: ActionTarget,
}

#[derive(Serialize)]
struct InsertMediaRequest<'a> {
    #[serde(rename = "Image")]
    image: &'a str,
    #[serde(rename = "Inserted")]
    inserted: bool,
    #[serde(rename = "WriteProtected")]
    write_protected: bool,
}

/// A virtual media service slot of a manager.
///
/// Services that implement the insert/eject actions expect them to be used;
/// older ones only honor direct writes to the media fields.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VirtualMedia {
    #[serde(flatten)]
    entity: Entity,
    /// How the image is connected, if at all.
    #[serde(rename = "ConnectedVia")]
    pub connected_via: ConnectedVia,
    /// The URI of the mounted image. Writable.
    #[serde(rename = "Image")]
    pub image: Option<String>,
    /// The file name of the mounted image. Read-only.
    #[serde(rename = "ImageName")]
    pub image_name: Option<String>,
    /// Whether the image is currently inserted. Writable.
    #[serde(rename = "Inserted")]
    pub inserted: bool,
    /// Whether the image is presented write-protected. Writable.
    #[serde(rename = "WriteProtected")]
    pub write_protected: bool,
    /// The device types this slot can emulate.
    #[serde(rename = "MediaTypes")]
    pub media_types: Vec<MediaType>,
    #[serde(rename = "Actions")]
    actions: VirtualMediaActions,
}

impl Resource for VirtualMedia {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

impl Updatable for VirtualMedia {
    fn writable_fields() -> &'static [WritableField<Self>] {
        const FIELDS: &[WritableField<VirtualMedia>] = &[
            WritableField {
                key: "Image",
                value: |media| json!(media.image),
            },
            WritableField {
                key: "Inserted",
                value: |media| json!(media.inserted),
            },
            WritableField {
                key: "WriteProtected",
                value: |media| json!(media.write_protected),
            },
        ];
        FIELDS
    }
}

impl VirtualMedia {
    /// Fetch a virtual media slot from the service.
    pub fn get(client: &SharedClient, location: &str) -> RedfishResult<Self> {
        get_resource(client, location)
    }

    /// Mount an image into this slot.
    pub fn insert_media(
        &self,
        image: &str,
        inserted: bool,
        write_protected: bool,
    ) -> RedfishResult<()> {
        post_action(
            self.entity.client()?,
            "VirtualMedia.InsertMedia",
            &self.actions.insert_media.target,
            &InsertMediaRequest {
                image,
                inserted,
                write_protected,
            },
        )
    }

    /// Detach the mounted image from this slot.
    pub fn eject_media(&self) -> RedfishResult<()> {
        post_action(
            self.entity.client()?,
            "VirtualMedia.EjectMedia",
            &self.actions.eject_media.target,
            &json!({}),
        )
    }
}
