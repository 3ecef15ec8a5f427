//! ブラウザ fetch によるJSONドキュメント取得

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use portfolio_common::{check_status, Error, Result};

/// 相対パスのドキュメントを文字列で取得
///
/// 通信エラーと非2xxステータスはどちらも `Error::Network`。
pub async fn fetch_text(path: &str) -> Result<String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(path, &opts)
        .map_err(|e| Error::network(path, describe(&e)))?;

    let window = web_sys::window().ok_or_else(|| Error::network(path, "window is unavailable"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| Error::network(path, describe(&e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| Error::network(path, describe(&e)))?;

    check_status(path, resp.status())?;

    let text = JsFuture::from(resp.text().map_err(|e| Error::network(path, describe(&e)))?)
        .await
        .map_err(|e| Error::network(path, describe(&e)))?;

    text.as_string()
        .ok_or_else(|| Error::network(path, "response body is not text"))
}

/// JsValueのエラーを文字列化
fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
