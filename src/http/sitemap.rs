use axum::response::Html;

/// Every route the router serves, as (method, path).
pub const ENDPOINTS: &[(&str, &str)] = &[
    ("GET", "/"),
    ("POST", "/contact"),
    ("POST", "/v2/contact"),
];

pub async fn sitemap() -> Html<String> {
    let items: String = ENDPOINTS
        .iter()
        .map(|(method, path)| {
            format!("<li><code>{method}</code> <a href=\"{path}\">{path}</a></li>")
        })
        .collect();
    Html(format!(
        "<!DOCTYPE html><html><head><title>contact-api</title></head><body>\
         <h1>contact-api</h1><p>Available endpoints:</p><ul>{items}</ul></body></html>"
    ))
}
