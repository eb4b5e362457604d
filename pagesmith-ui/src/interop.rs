use js_sys::{Function, Promise, Reflect, Uint8Array};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, EventTarget, ReadableStream, ReadableStreamDefaultReader};

/// Origin of the host page, e.g. `http://localhost:8080`
pub fn window_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Milliseconds since the epoch, from the browser clock
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// An event listener that is removed again when the handle is dropped.
pub struct ListenerHandle {
    target: EventTarget,
    event: &'static str,
    capture: bool,
    callback: Closure<dyn FnMut(Event)>,
}

impl ListenerHandle {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        capture: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback_and_bool(
            event,
            callback.as_ref().unchecked_ref(),
            capture,
        )?;
        Ok(Self {
            target: target.clone(),
            event,
            capture,
            callback,
        })
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            self.event,
            self.callback.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

/// Drain a response body, handing every chunk to `on_chunk` as it arrives.
pub async fn read_stream(
    stream: ReadableStream,
    mut on_chunk: impl FnMut(&[u8]),
) -> Result<(), String> {
    let reader: ReadableStreamDefaultReader = stream.get_reader().unchecked_into();

    loop {
        let result = JsFuture::from(reader.read()).await.map_err(js_error)?;
        let done = Reflect::get(&result, &JsValue::from_str("done"))
            .map_err(js_error)?
            .as_bool()
            .unwrap_or(true);
        if done {
            break;
        }

        let value = Reflect::get(&result, &JsValue::from_str("value")).map_err(js_error)?;
        let bytes = Uint8Array::new(&value).to_vec();
        on_chunk(&bytes);
    }

    let _ = reader.release_lock();
    Ok(())
}

/// Write `text` to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "No window".to_string())?;
    let navigator: JsValue = window.navigator().into();

    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard")).map_err(js_error)?;
    if clipboard.is_undefined() {
        return Err("Clipboard is not available".to_string());
    }
    let write_text: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    let promise: Promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    JsFuture::from(promise).await.map_err(js_error)?;
    Ok(())
}
