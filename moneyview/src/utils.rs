use wasm_bindgen::UnwrapThrowExt;
use web_sys::UrlSearchParams;

/// Build an app URL carrying the search query
pub fn build_app_url(query: &str) -> String {
    format!("?q={}", js_sys::encode_uri_component(query))
}

/// Read the search query from the current location
pub fn parse_app_url() -> String {
    let window = web_sys::window().unwrap_throw();
    let search = window.location().search().unwrap_throw();
    let params = UrlSearchParams::new_with_str(&search).unwrap_throw();
    params.get("q").unwrap_or_default()
}
