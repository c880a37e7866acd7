//! Export panel with SVG and PNG download buttons.

use dioxus::prelude::*;
use svgtrace_protocol::ClientConfig;

use crate::download;

/// Props for the [`ExportPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ExportPanelProps {
    /// Whether the buttons are shown at all. They appear once the first
    /// upload has finished, successful or not.
    visible: bool,
    /// URL of the displayed SVG. `None` disables the SVG button.
    svg_src: Option<String>,
}

/// Download buttons for the current output.
///
/// The SVG button saves the displayed image's URL verbatim; the PNG
/// button navigates to the server's PNG endpoint. Reads the download
/// filename and PNG path from the [`ClientConfig`] context.
#[component]
pub fn ExportPanel(props: ExportPanelProps) -> Element {
    let config = use_context::<ClientConfig>();
    let mut export_error = use_signal(|| Option::<String>::None);

    if !props.visible {
        return rsx! {};
    }

    let svg_click = {
        let src = props.svg_src.clone();
        let filename = config.svg_download_name.clone();
        move |_| {
            let Some(ref href) = src else {
                log::warn!("SVG download clicked with nothing displayed");
                return;
            };
            if let Err(e) = download::download_url(href, &filename) {
                export_error.set(Some(format!("Download failed: {e}")));
            } else {
                export_error.set(None);
            }
        }
    };

    let png_click = {
        let path = config.png_download_path;
        move |_| {
            if let Err(e) = download::download_via_navigation(&path) {
                export_error.set(Some(format!("Download failed: {e}")));
            }
        }
    };

    let has_svg = props.svg_src.is_some();

    rsx! {
        div { class: "export",
            h3 { "Export" }

            if let Some(ref err) = export_error() {
                p { class: "error-text", "{err}" }
            }

            div { class: "export-buttons",
                button {
                    id: "downloadSvgButton",
                    class: "btn btn-primary",
                    disabled: !has_svg,
                    onclick: svg_click,
                    "Download SVG"
                }
                button {
                    id: "downloadPngButton",
                    class: "btn btn-primary",
                    onclick: png_click,
                    "Download PNG"
                }
            }
        }
    }
}
