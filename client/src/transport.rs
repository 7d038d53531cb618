use gloo_net::http::{Request, RequestBuilder};
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HttpMethod {
	Get,
	Post,
	Put,
	Delete,
}

impl HttpMethod {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Get => "GET",
			Self::Post => "POST",
			Self::Put => "PUT",
			Self::Delete => "DELETE",
		}
	}
}

impl fmt::Display for HttpMethod {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// A fully prepared HTTP request
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApiRequest {
	pub method: HttpMethod,
	pub url: String,
	pub headers: Vec<(String, String)>,
	pub body: Option<String>,
}

#[cfg(test)]
impl ApiRequest {
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(header_name, _)| header_name.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApiResponse {
	pub status: u16,
	pub body: String,
}

impl ApiResponse {
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// A network-level failure: the request never produced a response
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransportError(String);

impl TransportError {
	#[cfg(test)]
	pub fn new(message: impl Into<String>) -> Self {
		Self(message.into())
	}
}

impl fmt::Display for TransportError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<gloo_net::Error> for TransportError {
	fn from(error: gloo_net::Error) -> Self {
		Self(error.to_string())
	}
}

/// Sends requests to the backend
#[allow(async_fn_in_trait)]
pub trait Transport {
	async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Sends requests through the browser's `fetch`
#[derive(Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
	async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
		let mut builder: RequestBuilder = match request.method {
			HttpMethod::Get => Request::get(&request.url),
			HttpMethod::Post => Request::post(&request.url),
			HttpMethod::Put => Request::put(&request.url),
			HttpMethod::Delete => Request::delete(&request.url),
		};
		for (name, value) in request.headers.iter() {
			builder = builder.header(name, value);
		}
		let prepared = match request.body {
			Some(body) => builder.body(body)?,
			None => builder.build()?,
		};

		let response = prepared.send().await?;
		let status = response.status();
		let body = response.text().await?;
		Ok(ApiResponse { status, body })
	}
}
