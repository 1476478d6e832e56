use crate::constants::*;
use crate::dom;
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Copy `text` via a temporary textarea and flash feedback on every copy
/// button. Failures are logged only.
#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: &str) {
    match try_copy(text) {
        Ok(document) => show_copy_feedback(&document),
        Err(e) => log::error!("Failed to copy text: {:?}", e),
    }
}

fn try_copy(text: &str) -> anyhow::Result<web::Document> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;
    let textarea = document
        .create_element("textarea")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlTextAreaElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    textarea.set_value(text);
    body.append_child(&textarea).map_err(|e| anyhow!("{:?}", e))?;
    textarea.select();

    let copied = document
        .dyn_ref::<web::HtmlDocument>()
        .ok_or_else(|| anyhow!("document does not support execCommand"))
        .and_then(|doc| doc.exec_command("copy").map_err(|e| anyhow!("{:?}", e)));

    // the textarea goes away whatever happened
    let _ = body.remove_child(&textarea);
    copied?;
    Ok(document)
}

fn show_copy_feedback(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    for button in dom::query_all(document, COPY_BUTTON_SELECTOR) {
        let original = button.text_content();
        button.set_text_content(Some(COPY_FEEDBACK_TEXT));
        set_disabled(&button, true);

        let restore = Closure::once_into_js(move || {
            button.set_text_content(original.as_deref());
            set_disabled(&button, false);
        });
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            restore.unchecked_ref(),
            COPY_FEEDBACK_MS,
        );
    }
}

#[inline]
fn set_disabled(element: &web::Element, disabled: bool) {
    if let Some(button) = element.dyn_ref::<web::HtmlButtonElement>() {
        button.set_disabled(disabled);
    }
}
