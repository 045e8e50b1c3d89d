use web_sys::window;

pub fn get_api_base_url() -> String {
    // Deployed builds sit behind the API gateway on the same origin, so
    // relative URLs are enough there.
    if let Some(window) = window() {
        if let Ok(host) = window.location().host() {
            if !host.contains("127.0.0.1") && !host.contains("localhost") {
                return "".to_string();
            }
        }
    }

    // Local development talks to the gateway directly
    "http://127.0.0.1:8080".to_string()
}
