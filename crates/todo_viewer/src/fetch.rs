//! Fetching a URL as text.

/// Why a fetch produced no text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never got a response (DNS, TLS, connection refused, …).
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("Response status code does not indicate success: {status} ({status_text}).")]
    Status { status: u16, status_text: String },

    #[error("response body is not valid UTF-8")]
    NotText,
}

/// Called exactly once with the outcome of a fetch, possibly from another thread.
pub type OnDone = Box<dyn FnOnce(Result<String, FetchError>) + Send + 'static>;

/// Something that can GET a URL in the background.
pub trait Fetcher {
    /// Start fetching `url`. Must not block.
    fn fetch_text(&self, url: &str, on_done: OnDone);
}

/// The parts of an HTTP response we care about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub status_text: String,
    pub bytes: Vec<u8>,
}

impl From<ehttp::Response> for HttpReply {
    fn from(response: ehttp::Response) -> Self {
        let ehttp::Response {
            status,
            status_text,
            bytes,
            ..
        } = response;
        Self {
            status,
            status_text,
            bytes,
        }
    }
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body, verbatim.
    ///
    /// # Errors
    /// On a non-2xx status, or if the body isn't UTF-8.
    pub fn into_text(self) -> Result<String, FetchError> {
        if !self.is_success() {
            return Err(FetchError::Status {
                status: self.status,
                status_text: self.status_text,
            });
        }
        String::from_utf8(self.bytes).map_err(|_err| FetchError::NotText)
    }
}

/// Fetches using [`ehttp`], which runs the request on a background thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct EhttpFetcher;

impl Fetcher for EhttpFetcher {
    fn fetch_text(&self, url: &str, on_done: OnDone) {
        log::debug!("GET {url}");
        let request = ehttp::Request::get(url);
        ehttp::fetch(request, move |response| {
            let result = match response {
                Ok(response) => HttpReply::from(response).into_text(),
                Err(error) => Err(FetchError::Transport(error)),
            };
            on_done(result);
        });
    }
}
