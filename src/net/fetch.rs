use crate::net::{Request, RequestBody, Response};

// Sends a single request and returns the buffered response, or the transport error as-is
pub async fn fetch(client: &reqwest::Client, request: Request) -> Result<Response, reqwest::Error> {
    let Request { method, url, headers, body } = request;

    let mut builder = client.request(method, url).headers(headers);
    builder = match body {
        RequestBody::Empty => builder,
        RequestBody::Text(text) => builder.body(text),
        RequestBody::Multipart(form) => builder.multipart(form),
    };

    let res = builder.send().await?;

    // Fetch results
    let final_url = res.url().clone();
    let status = res.status().as_u16();
    let status_text = res.status().canonical_reason().unwrap_or("Unknown").to_string();
    let headers = res.headers().clone();

    // Fetch body. We don't do streaming yet
    let body = res.bytes().await?.to_vec();

    Ok(Response {
        url: final_url,
        status,
        status_text,
        headers,
        body,
    })
}
