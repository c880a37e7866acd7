use dioxus::prelude::*;
use svgtrace_io::{
    ExportPanel, FILE_INPUT_ID, FileUpload, ParamControls, RequestError, SvgPreview, browser,
};
use svgtrace_protocol::{AppState, ClientConfig, ParamField, RequestFailure};

fn main() {
    init_logging();
    dioxus::launch(app);
}

/// Route panics and `log` records to the browser console.
fn init_logging() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already initialised: {e}").into());
    }
}

/// Log a failed request and reduce it to what the user is told.
fn classify(result: Result<String, RequestError>) -> Result<String, RequestFailure> {
    result.map_err(|err| {
        match &err {
            RequestError::Server(text) => log::info!("server rejected request: {text}"),
            other => log::error!("request failed: {other}"),
        }
        RequestFailure::from(&err)
    })
}

/// Root application component.
///
/// Owns the [`AppState`] and wires it to the upload zone, controls,
/// preview and export panel. State transitions live on `AppState`;
/// this component only performs the requests, timers and alerts they
/// call for.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    // --- Application state ---
    let config = use_context_provider(browser::load_config);
    let mut state = use_signal(AppState::default);

    // --- File selection: show loading before anything is sent ---
    let on_select = move |()| {
        state.write().begin_upload();
    };

    // --- Upload handler ---
    let upload_config = config.clone();
    let on_upload = move |(bytes, name): (Vec<u8>, String)| {
        let config = upload_config.clone();
        spawn(async move {
            let result = svgtrace_io::upload_file(&config.endpoint, &bytes, &name).await;
            let outcome = classify(result);
            if outcome.is_ok() {
                log::info!("converted {name}");
            }
            let effects = state
                .write()
                .finish_upload(outcome, &config, browser::now_ms());
            if effects.reset_file_input {
                browser::reset_file_input(FILE_INPUT_ID);
            }
            if let Some(message) = effects.alert {
                browser::alert(&message);
            }
        });
    };

    let read_error_config = config.clone();
    let on_read_error = move |message: String| {
        log::error!("{message}");
        let effects = state.write().finish_upload(
            Err(RequestFailure::Transport),
            &read_error_config,
            browser::now_ms(),
        );
        if let Some(message) = effects.alert {
            browser::alert(&message);
        }
    };

    // --- Parameter change handler (debounced) ---
    // The task whose ticket is still newest when it wakes reads the
    // parameters at that moment; responses are applied in arrival order.
    let update_config = config.clone();
    let on_param_change = move |(field, raw): (ParamField, String)| {
        let ticket = match state.write().change_param(field, &raw) {
            Ok(ticket) => ticket,
            Err(err) => {
                log::warn!("ignoring {field} input: {err}");
                return;
            }
        };
        let config = update_config.clone();
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(config.debounce_ms).await;
            let Some(params) = state.write().take_update(ticket) else {
                return;
            };
            let result = svgtrace_io::submit_update(&config.endpoint, &params).await;
            let alert = state
                .write()
                .finish_update(classify(result), &config, browser::now_ms());
            if let Some(message) = alert {
                browser::alert(&message);
            }
        });
    };

    let current = state.read().clone();

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/style.css") }

        div { class: "app",
            header {
                h1 { "svgtrace" }
                p { class: "muted", "Convert images to outline SVGs and tune the trace live" }
            }

            div { class: "main",
                SvgPreview {
                    visibility: current.visibility,
                    src: current.svg_src.clone(),
                }

                div { class: "sidebar",
                    ParamControls {
                        params: current.params.clone(),
                        on_change: on_param_change,
                    }
                    ExportPanel {
                        visible: current.visibility.output_visible,
                        svg_src: current.svg_src.clone(),
                    }
                }
            }

            FileUpload {
                on_select: on_select,
                on_upload: on_upload,
                on_read_error: on_read_error,
            }
        }
    }
}
