//! Output area: loading indicator or the server-rendered SVG.

use dioxus::prelude::*;
use svgtrace_protocol::Visibility;

/// Element id of the output image.
pub const SVG_OUTPUT_ID: &str = "svgOutput";

/// Props for the [`SvgPreview`] component.
#[derive(Props, Clone, PartialEq)]
pub struct SvgPreviewProps {
    /// Which of loading indicator / output is shown.
    visibility: Visibility,
    /// Cache-busted URL of the current SVG, if any has been rendered.
    src: Option<String>,
}

/// Shows the loading indicator while an upload is in flight, otherwise
/// the most recent SVG as an `<img>`.
///
/// The SVG is loaded by URL rather than inlined, so the browser renders
/// exactly the file the download button saves.
#[component]
pub fn SvgPreview(props: SvgPreviewProps) -> Element {
    let visibility = props.visibility;

    rsx! {
        div { class: "preview",
            if visibility.loading {
                div { class: "loading",
                    p { class: "pulse", "Converting..." }
                }
            }
            if visibility.output_visible {
                if let Some(ref src) = props.src {
                    img {
                        id: SVG_OUTPUT_ID,
                        src: "{src}",
                        alt: "Vectorized output",
                    }
                }
            } else if !visibility.loading {
                p { class: "placeholder", "Upload an image to get started" }
            }
        }
    }
}
