//! Clip upload page.

use std::path::Path;

use dioxus::{events::KeyboardEvent, prelude::*};

use crate::backend::uploads::UploadLog;
use crate::frontend::services::SessionState;

#[component]
pub fn Upload() -> Element {
    let session = use_context::<SessionState>();
    let log = use_signal(UploadLog::new);
    let mut entries = use_signal(|| log.with(|l| l.entries()));
    let mut path_input = use_signal(String::new);
    let mut status = use_signal(String::new);

    let server_label = session
        .selected_server
        .read()
        .as_ref()
        .map_or_else(
            || "No server selected yet".to_string(),
            |server| format!("Sending to {}", server.name),
        );

    let submit = move || {
        let path_text = path_input().trim().to_string();
        if path_text.is_empty() {
            status.set("Enter the path of a clip to send".to_string());
            return;
        }
        let server_id = session
            .selected_server
            .read()
            .as_ref()
            .map(|server| server.id.clone());
        spawn(async move {
            match tokio::fs::metadata(&path_text).await {
                Ok(meta) if meta.is_file() => {
                    let file_name = Path::new(&path_text)
                        .file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path_text.clone());
                    status.set(format!("{file_name} added to your uploads"));
                    log.with(|l| l.record(file_name, meta.len(), server_id));
                    entries.set(log.with(|l| l.entries()));
                    path_input.set(String::new());
                }
                Ok(_) => status.set("That path is a folder, not a clip".to_string()),
                Err(_) => status.set("No file found at that path".to_string()),
            }
        });
    };
    let mut submit_on_key = submit.clone();
    let mut submit_on_click = submit;

    rsx! {
        div { class: "page upload",
            h1 { class: "page-title", "Share a clip" }
            p { class: "page-subtitle", "{server_label}" }

            div { class: "upload-form",
                input {
                    class: "text-input",
                    r#type: "text",
                    value: "{path_input()}",
                    oninput: move |e| path_input.set(e.value()),
                    onkeypress: move |e: KeyboardEvent| {
                        if e.key() == Key::Enter {
                            submit_on_key();
                        }
                    },
                    placeholder: "Path to a clip on this computer"
                }
                button {
                    class: "primary-button",
                    onclick: move |_| submit_on_click(),
                    "Send"
                }
            }

            if !status().is_empty() {
                div { class: "status-message", "{status}" }
            }

            div { class: "upload-history",
                h2 { class: "section-title", "Your uploads" }
                if entries().is_empty() {
                    p { class: "empty-hint", "Nothing shared yet." }
                }
                for entry in entries() {
                    div {
                        key: "{entry.file_name}-{entry.uploaded_at}",
                        class: "upload-row",
                        span { class: "upload-name", "{entry.file_name}" }
                        span { class: "upload-meta",
                            {UploadLog::format_size(entry.size_bytes)}
                        }
                        span { class: "upload-meta",
                            {entry.uploaded_at.format("%Y-%m-%d %H:%M").to_string()}
                        }
                        span { class: "upload-meta",
                            {entry.server_id.clone().unwrap_or_else(|| "no server".to_string())}
                        }
                    }
                }
            }
        }
    }
}
