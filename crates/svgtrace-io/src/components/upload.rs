//! File upload component with drag-and-drop and file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use svgtrace_protocol::upload;

/// Element id of the hidden file input, used to clear it after a
/// successful upload.
pub const FILE_INPUT_ID: &str = "fileInput";

/// Props for the [`FileUpload`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileUploadProps {
    /// Fired as soon as a file is chosen, before it is read.
    on_select: EventHandler<()>,
    /// Called with the raw file bytes and filename once read.
    on_upload: EventHandler<(Vec<u8>, String)>,
    /// Called when the chosen file could not be read.
    on_read_error: EventHandler<String>,
}

/// A drag-and-drop zone with a file picker button.
///
/// The picker is filtered to the formats the server converts, but any
/// dropped file is forwarded; the server decides what it accepts.
#[component]
pub fn FileUpload(props: FileUploadProps) -> Element {
    let mut dragging = use_signal(|| false);
    let accept = upload::accept_attribute();

    // Shared by the picker and drop paths.
    let process_files = move |files: Vec<FileData>| async move {
        let Some(file) = files.first() else {
            return;
        };
        props.on_select.call(());
        let name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => props.on_upload.call((bytes.to_vec(), name)),
            Err(e) => props
                .on_read_error
                .call(format!("Failed to read {name}: {e}")),
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let zone_class = if dragging() {
        "upload-zone upload-zone--active"
    } else {
        "upload-zone"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            p { class: "muted", "Drop an image here or " }

            label { class: "btn btn-primary",
                input {
                    r#type: "file",
                    id: FILE_INPUT_ID,
                    accept: "{accept}",
                    class: "hidden",
                    onchange: handle_files,
                }
                "Choose File"
            }

            p { class: "muted small", "PNG, JPEG, GIF" }
        }
    }
}
