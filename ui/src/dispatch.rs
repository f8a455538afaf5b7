//! Side-effecting output actions: open the report link, deliver the CSV file.
//!
//! Web builds go through the DOM. Native builds write into the per-user data
//! directory and use the system clipboard.

use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("window unavailable")]
    NoWindow,
    #[error("{0}")]
    Dom(&'static str),
    #[error("unable to write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to open link: {0}")]
    Eval(String),
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
    #[error("unable to determine export directory")]
    NoExportDir,
}

/// How an action reached the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Link handed to the browser.
    Opened,
    /// Link handed to the webview and placed on the clipboard.
    OpenedAndCopied,
    /// Browser download started.
    DownloadStarted,
    /// File written to the given path.
    Saved(String),
}

/// Hand the report link to the browser. On native builds the webview opens
/// it and the link is also copied to the clipboard when one is available.
pub async fn open_report_link(url: &str) -> Result<Delivery, DispatchError> {
    info!(len = url.len(), "opening report link");

    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or(DispatchError::NoWindow)?;
        window
            .open_with_url_and_target(url, "_blank")
            .map_err(|_| DispatchError::Dom("Unable to open link"))?;
        Ok(Delivery::Opened)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let literal = serde_json::to_string(url).map_err(|_| DispatchError::Dom("Bad link"))?;
        dioxus::prelude::document::eval(&format!("window.open({literal}, '_blank');"))
            .await
            .map_err(|err| DispatchError::Eval(err.to_string()))?;

        Ok(opened_delivery(copy_to_clipboard(url)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn copy_to_clipboard(text: &str) -> Result<(), DispatchError> {
    use arboard::Clipboard;

    let mut clipboard = Clipboard::new().map_err(|err| DispatchError::Clipboard(err.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|err| DispatchError::Clipboard(err.to_string()))
}

/// The link is already open by now; a clipboard failure only loses the copy.
#[cfg(not(target_arch = "wasm32"))]
fn opened_delivery(copied: Result<(), DispatchError>) -> Delivery {
    match copied {
        Ok(()) => Delivery::OpenedAndCopied,
        Err(err) => {
            tracing::warn!(%err, "link opened but not copied");
            Delivery::Opened
        }
    }
}

/// Deliver the CSV export. On the web the file is a `data:` URI clicked
/// through a hidden anchor.
pub fn download_csv(filename: &str, csv: &str) -> Result<Delivery, DispatchError> {
    info!(filename, bytes = csv.len(), "exporting csv");

    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::HtmlAnchorElement;

        let uri = crate::core::link::csv_data_uri(csv);
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(DispatchError::NoWindow)?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| DispatchError::Dom("Unable to create anchor"))?
            .dyn_into()
            .map_err(|_| DispatchError::Dom("Anchor cast failed"))?;
        anchor.set_href(&uri);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or(DispatchError::Dom("Missing body"))?
            .append_child(&anchor)
            .map_err(|_| DispatchError::Dom("Unable to attach anchor"))?;
        anchor.click();
        anchor.remove();

        Ok(Delivery::DownloadStarted)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let dir = project_dirs()
            .ok_or(DispatchError::NoExportDir)?
            .data_dir()
            .join("exports");
        write_export(&dir, filename, csv)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_export(
    dir: &std::path::Path,
    filename: &str,
    csv: &str,
) -> Result<Delivery, DispatchError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    std::fs::write(&path, csv.as_bytes())?;
    Ok(Delivery::Saved(path.to_string_lossy().to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "ControlInventario", "ControlInventario")
}
