mod http;
mod quote_client;

pub use {
    http::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient},
    quote_client::QuoteClient,
};
