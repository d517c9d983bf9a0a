use async_trait::async_trait;
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

use super::error::ApiError;
use super::payload::{Part, Payload, UploadFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Payload,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request. The browser implementation is [`GlooTransport`].
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `fetch` through gloo-net.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

fn js_error(e: JsValue) -> ApiError {
    ApiError::Transport(format!("{e:?}"))
}

fn file_blob(file: &UploadFile) -> Result<Blob, ApiError> {
    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(&file.mime);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)
}

fn form_data(parts: &[(String, Part)]) -> Result<FormData, ApiError> {
    let data = FormData::new().map_err(js_error)?;
    for (name, part) in parts {
        match part {
            Part::Text(text) => data.append_with_str(name, text),
            Part::File(file) => {
                data.append_with_blob_and_filename(name, &file_blob(file)?, &file.file_name)
            }
        }
        .map_err(js_error)?;
    }
    Ok(data)
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = request.url.as_str();
        let mut builder = match request.method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let built = match &request.body {
            Payload::Empty => builder.build(),
            Payload::Json(body) => builder.json(body),
            // The browser sets the multipart boundary header itself.
            Payload::Multipart(parts) => builder.body(form_data(parts)?),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = built
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}
