use std::cell::RefCell;
use std::rc::Rc;

use api::AnalysisClient;
use dioxus::prelude::*;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use super::{DashboardState, SelectedFile, UploadStatus};
use crate::charts::{AnalysisCharts, ChartCache, ChartsConfig};
use crate::t;

/// File picker plus the analyze button. Owns the client and the chart cache
/// for the lifetime of the page.
#[component]
pub fn UploadPanel(mut state: Signal<DashboardState>) -> Element {
    let client = use_hook(AnalysisClient::default);
    let cache = use_hook(|| Rc::new(RefCell::new(ChartCache::new())));

    let on_pick = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(path) = engine.files().into_iter().next() else {
            return;
        };
        let Some(bytes) = engine.read_file(&path).await else {
            warn!(file = %path, "selected file could not be read");
            state.write().reject(t!("upload-read-failed"));
            return;
        };
        let name = file_name(&path);
        info!(file = %name, size = bytes.len(), "event log selected");
        state.write().select(SelectedFile { name, bytes });
    };

    let on_analyze = move |_| {
        let Some(file) = state.read().file.clone() else {
            return;
        };
        if state.read().is_busy() {
            return;
        }
        let generation = state.write().start();

        let client = client.clone();
        let cache = cache.clone();
        spawn(async move {
            match client.upload(&file.name, file.bytes).await {
                Ok(payload) => {
                    let charts = AnalysisCharts::from_payload(
                        &payload,
                        &ChartsConfig::default(),
                        &mut cache.borrow_mut(),
                    );
                    if !state.write().finish(generation, charts, analyzed_at()) {
                        debug!(file = %file.name, "dropping reply for a replaced file");
                    }
                }
                Err(err) => {
                    warn!(error = %err, "analysis failed");
                    if !state.write().fail(generation, err.advisory()) {
                        debug!(file = %file.name, "dropping error for a replaced file");
                    }
                }
            }
        });
    };

    let current = state.read();
    let selected = current.file.as_ref().map(|f| f.name.clone());
    let busy = current.is_busy();
    let disabled = !current.can_analyze();
    let feedback = match &current.status {
        UploadStatus::Idle | UploadStatus::Selected => None,
        UploadStatus::Analyzing => Some(("upload__status", t!("upload-analyzing"))),
        UploadStatus::Done => Some(("upload__status upload__status--success", t!("upload-success"))),
        UploadStatus::Error(message) => Some(("upload__status upload__status--error", message.clone())),
    };
    let analyzed_at = current.analyzed_at.clone();
    drop(current);

    rsx! {
        section { class: "dashboard-card upload",
            div { class: "dashboard-card__header",
                h2 { {t!("upload-title")} }
            }

            label { class: "upload__picker",
                input {
                    r#type: "file",
                    accept: ".xes",
                    multiple: false,
                    class: "upload__input",
                    onchange: on_pick,
                }
                span { class: "button button--ghost upload__button", {t!("upload-choose")} }
                span { class: "upload__file",
                    if let Some(name) = selected {
                        "{name}"
                    } else {
                        {t!("upload-no-file")}
                    }
                }
            }

            button {
                class: "button button--primary upload__submit",
                disabled: disabled,
                onclick: on_analyze,
                if busy {
                    {t!("upload-analyzing")}
                } else {
                    {t!("upload-analyze")}
                }
            }

            if let Some((class, message)) = feedback {
                p { class: "{class}", "{message}" }
            }
            if let Some(at) = analyzed_at {
                p { class: "dashboard-card__caption", {t!("upload-analyzed-at", time = at.as_str())} }
            }
        }
    }
}

/// Desktop pickers report a full path; the service only wants the name.
fn file_name(path: &str) -> String {
    path.rsplit(['/', '\\'])
        .next()
        .unwrap_or(path)
        .to_string()
}

fn analyzed_at() -> Option<String> {
    let format = format_description!("[hour]:[minute] UTC");
    OffsetDateTime::now_utc().format(&format).ok()
}
