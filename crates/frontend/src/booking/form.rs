//! DOM side of the submission flow: reading a form and listening for submit.

use std::rc::Rc;

use contracts::booking::FormSnapshot;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, File, FormData, HtmlFormElement, SubmitEvent};

use super::api::GlooTransport;
use super::config::SubmissionConfig;
use super::navigation::LocationNavigator;
use super::submission::{
    ConsoleSink, DiagnosticSink, Navigator, SubmissionHandler, SubmitError, Transport,
};

pub type BrowserSubmissionHandler = SubmissionHandler<GlooTransport, LocationNavigator, ConsoleSink>;

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Current field values of `form`, in the order `FormData` yields them.
///
/// File inputs contribute the selected file's name.
pub fn snapshot_form(form: &HtmlFormElement) -> Result<FormSnapshot, String> {
    let data = FormData::new_with_form(form).map_err(js_error)?;
    let entries = js_sys::try_iter(&data)
        .map_err(js_error)?
        .ok_or_else(|| "FormData is not iterable".to_string())?;

    let mut pairs = Vec::new();
    for entry in entries {
        let pair = Array::from(&entry.map_err(js_error)?);
        pairs.push((pair.get(0).as_string(), entry_value(pair.get(1))));
    }
    collect_entries(pairs)
}

/// Fold `(name, value)` entries into a snapshot, last value winning.
///
/// An entry without a string name fails the capture.
pub fn collect_entries<I>(entries: I) -> Result<FormSnapshot, String>
where
    I: IntoIterator<Item = (Option<String>, String)>,
{
    let mut snapshot = FormSnapshot::new();
    for (index, (name, value)) in entries.into_iter().enumerate() {
        let name = name.ok_or_else(|| format!("form entry {} has no string name", index))?;
        snapshot.insert(name, value);
    }
    Ok(snapshot)
}

fn entry_value(value: JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    value
        .dyn_ref::<File>()
        .map(File::name)
        .unwrap_or_default()
}

/// Route every submit of `form` through `handler`.
///
/// The listener lives as long as the page.
pub fn bind_form<T, N, S>(
    form: HtmlFormElement,
    handler: Rc<SubmissionHandler<T, N, S>>,
) -> Result<(), String>
where
    T: Transport + 'static,
    N: Navigator + 'static,
    S: DiagnosticSink + 'static,
{
    let target = form.clone();
    let on_submit = Closure::<dyn FnMut(SubmitEvent)>::new(move |ev: SubmitEvent| {
        ev.prevent_default();

        match snapshot_form(&target) {
            Ok(snapshot) => {
                let handler = Rc::clone(&handler);
                spawn_local(async move {
                    // failures are already written to the sink
                    let _ = handler.on_submit(snapshot).await;
                });
            }
            Err(e) => handler.report(&SubmitError::Capture(e)),
        }
    });

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .map_err(js_error)?;
    on_submit.forget();
    Ok(())
}

/// Look up `config.form_id` in `document` and bind the browser handler to it.
///
/// Returns `false` without side effects when the page has no such form.
pub fn attach(document: &Document, config: SubmissionConfig) -> bool {
    let Some(form) = document
        .get_element_by_id(&config.form_id)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        log::debug!("No form #{} on this page", config.form_id);
        return false;
    };

    let form_id = config.form_id.clone();
    let handler = Rc::new(BrowserSubmissionHandler::new(
        config,
        GlooTransport,
        LocationNavigator,
        ConsoleSink,
    ));

    match bind_form(form, handler) {
        Ok(()) => {
            log::debug!("Bound submit handler to #{}", form_id);
            true
        }
        Err(e) => {
            log::warn!("Failed to bind #{}: {}", form_id, e);
            false
        }
    }
}
