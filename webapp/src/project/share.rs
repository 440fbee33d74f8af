use async_trait::async_trait;
use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use common::share::{SharePayload, ShareTarget};

fn js_error(err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{err:?}"))
}

// looks up a method by name, so that a missing api reads as None instead of a throw
fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

async fn call(target: &JsValue, name: &str, arg: &JsValue) -> anyhow::Result<()> {
    let function = method(target, name)
        .ok_or_else(|| anyhow::Error::msg(format!("{name} is not available")))?;

    let promise = function
        .call1(target, arg)
        .map_err(js_error)?
        .dyn_into::<Promise>()
        .map_err(js_error)?;

    JsFuture::from(promise).await.map_err(js_error)?;

    Ok(())
}

// browser share target
//
// navigator.share and navigator.clipboard are both optional (clipboard is missing outside
// secure contexts), so they are probed at call time rather than bound through web-sys
pub struct BrowserShare {
    navigator: Option<JsValue>,
}

impl BrowserShare {
    pub fn new() -> Self {
        BrowserShare {
            navigator: web_sys::window().map(|w| JsValue::from(w.navigator())),
        }
    }

    fn navigator(&self) -> anyhow::Result<&JsValue> {
        self.navigator
            .as_ref()
            .ok_or_else(|| anyhow::Error::msg("no navigator"))
    }

    fn clipboard(&self) -> anyhow::Result<JsValue> {
        let clipboard =
            Reflect::get(self.navigator()?, &JsValue::from_str("clipboard")).map_err(js_error)?;

        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(anyhow::Error::msg("clipboard is not available"));
        }

        Ok(clipboard)
    }
}

#[async_trait(?Send)]
impl ShareTarget for BrowserShare {
    fn can_share(&self) -> bool {
        self.navigator
            .as_ref()
            .and_then(|n| method(n, "share"))
            .is_some()
    }

    async fn share(&self, payload: &SharePayload) -> anyhow::Result<()> {
        let data = Object::new();

        for (key, value) in [
            ("title", &payload.title),
            ("text", &payload.text),
            ("url", &payload.url),
        ] {
            Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(value))
                .map_err(js_error)?;
        }

        call(self.navigator()?, "share", &data).await
    }

    async fn copy_to_clipboard(&self, text: &str) -> anyhow::Result<()> {
        call(&self.clipboard()?, "writeText", &JsValue::from_str(text)).await
    }
}
