// ── Designer property descriptors ────────────────────────────────────────────
//
// Key strings are wire names; they appear verbatim in host payloads and
// must never change.

use appdock_core::properties::PropertyDescriptor;

// Connected-system configuration keys.
pub const CS_PROP_HOST_NAME: &str = "hostName";
pub const CS_PROP_PORT: &str = "port";
pub const CS_PROP_USERNAME: &str = "username";
pub const CS_PROP_PASSWORD: &str = "password";
pub const CS_PROP_BASE_FOLDER: &str = "baseFolder";

// Download operation keys.
pub const PROP_SOURCE_SFTP_FOLDER_PATH: &str = "sourceSFTPFolderPath";
pub const PROP_DEST_APPIAN_FOLDER: &str = "destinationAppianFolder";
pub const PROP_APPIAN_FILE_NAME: &str = "appianDocumentFileName";

// Upload operation keys.
pub const PROP_SOURCE_APPIAN_DOCUMENT: &str = "sourceAppianDocument";
pub const PROP_DESTINATION_SFTP_FOLDER_PATH: &str = "destinationSFTPFolderPath";

/// Configuration form shown when a designer creates the connected system.
pub fn connected_system_properties() -> Vec<PropertyDescriptor> {
    vec![
        PropertyDescriptor::text(CS_PROP_HOST_NAME)
            .label("Host Name")
            .required(true)
            .description("SFTP server host name or IP address")
            .build(),
        PropertyDescriptor::text(CS_PROP_PORT)
            .label("Port")
            .required(true)
            .description("SFTP server port, usually 22")
            .build(),
        PropertyDescriptor::text(CS_PROP_USERNAME)
            .label("Username")
            .required(true)
            .build(),
        PropertyDescriptor::encrypted_text(CS_PROP_PASSWORD)
            .label("Password")
            .required(true)
            .build(),
        PropertyDescriptor::text(CS_PROP_BASE_FOLDER)
            .label("Base Folder")
            .required(false)
            .description("Folder on the server that relative paths are resolved against")
            .build(),
    ]
}

/// Configuration form for the download integration.
pub fn download_properties() -> Vec<PropertyDescriptor> {
    vec![
        PropertyDescriptor::text(PROP_SOURCE_SFTP_FOLDER_PATH)
            .label("Source SFTP Folder Path")
            .required(false)
            .expressionable(true)
            .instruction_text("Path of the remote file, relative to the base folder")
            .build(),
        PropertyDescriptor::folder(PROP_DEST_APPIAN_FOLDER)
            .label("Destination Folder")
            .required(true)
            .expressionable(true)
            .build(),
        PropertyDescriptor::text(PROP_APPIAN_FILE_NAME)
            .label("Document File Name")
            .required(false)
            .expressionable(true)
            .instruction_text("Name to store the document under; defaults to the remote file name")
            .build(),
    ]
}

/// Configuration form for the upload integration.
pub fn upload_properties() -> Vec<PropertyDescriptor> {
    vec![
        PropertyDescriptor::document(PROP_SOURCE_APPIAN_DOCUMENT)
            .label("Source Document")
            .required(true)
            .expressionable(true)
            .build(),
        PropertyDescriptor::text(PROP_DESTINATION_SFTP_FOLDER_PATH)
            .label("Destination SFTP Folder Path")
            .required(false)
            .expressionable(true)
            .instruction_text("Folder on the server to write into, relative to the base folder")
            .build(),
    ]
}
