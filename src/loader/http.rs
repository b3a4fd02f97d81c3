//! HTTP data source backed by the job-market API.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::model::{AnalysisSummary, JobRecord};

use super::{DataSource, Endpoint, LoadError};

/// Default API base URL of the scraper backend.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Blocking HTTP client for `/api/jobs` and `/api/analysis`.
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    /// Creates a source for `base_url`. `timeout` of `None` disables the
    /// per-request timeout.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> reqwest::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("jobscope/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of an endpoint.
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, LoadError> {
        let url = self.url(endpoint);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| LoadError::Transport {
                endpoint,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("GET {} returned {}", url, status);
            return Err(LoadError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|e| LoadError::Transport {
            endpoint,
            message: e.to_string(),
        })?;

        serde_json::from_str(&body).map_err(|e| {
            error!("GET {} returned malformed JSON: {}", url, e);
            LoadError::Decode {
                endpoint,
                message: e.to_string(),
            }
        })
    }
}

impl DataSource for HttpSource {
    fn fetch_jobs(&self) -> Result<Vec<JobRecord>, LoadError> {
        self.get_json(Endpoint::Jobs)
    }

    fn fetch_analysis(&self) -> Result<AnalysisSummary, LoadError> {
        self.get_json(Endpoint::Analysis)
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serves one canned response per connection, in order, on a loopback port.
    fn serve(responses: Vec<(u16, &'static str)>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            for (status, body) in responses {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let response = format!(
                    "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        format!("http://{}", addr)
    }

    fn source(base_url: &str) -> HttpSource {
        HttpSource::new(base_url, Some(Duration::from_secs(5))).unwrap()
    }

    #[test]
    fn url_joins_base_and_path() {
        let src = source("http://localhost:5000/");
        assert_eq!(src.url(Endpoint::Jobs), "http://localhost:5000/api/jobs");
        assert_eq!(
            src.url(Endpoint::Analysis),
            "http://localhost:5000/api/analysis"
        );
    }

    #[test]
    fn fetches_jobs_and_analysis() {
        let base = serve(vec![
            (200, r#"[{"title":"X","company":"Y","url":"http://a"}]"#),
            (200, r#"{"top_titles":{"Engineer":3,"Analyst":1},"top_companies":{}}"#),
        ]);
        let src = source(&base);

        let jobs = src.fetch_jobs().unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].url, "http://a");

        let analysis = src.fetch_analysis().unwrap();
        assert_eq!(analysis.top_titles.get("Engineer"), Some(3));
        assert!(analysis.top_companies.is_empty());
    }

    #[test]
    fn non_success_status_is_status_error() {
        let base = serve(vec![(500, r#"{"error":"boom"}"#)]);
        let err = source(&base).fetch_jobs().unwrap_err();
        assert_eq!(
            err,
            LoadError::Status {
                endpoint: Endpoint::Jobs,
                status: 500
            }
        );
    }

    #[test]
    fn malformed_body_is_decode_error() {
        let base = serve(vec![(200, r#"{"top_titles":"nope"}"#)]);
        let err = source(&base).fetch_analysis().unwrap_err();
        assert!(matches!(
            err,
            LoadError::Decode {
                endpoint: Endpoint::Analysis,
                ..
            }
        ));
    }

    #[test]
    fn refused_connection_is_transport_error() {
        // Bind then drop to get a port nobody listens on.
        let addr = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();
        let err = source(&format!("http://{}", addr))
            .fetch_jobs()
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::Transport {
                endpoint: Endpoint::Jobs,
                ..
            }
        ));
    }
}
