//! Thin client over the analysis service's two endpoints.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;

use crate::error::ApiError;
use crate::report::{AnalysisEnvelope, AnalysisReport};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// A file captured by the upload form, held fully in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// The six validated fields of a submission, ready to be packaged.
#[derive(Debug, Clone)]
pub struct SubmissionParts {
    pub resume: FilePart,
    pub linkedin_profile: FilePart,
    pub company_data: FilePart,
    pub career_goals: String,
    pub job_descriptions: String,
    pub company_urls: Vec<String>,
}

/// Acknowledgement returned by `POST /analyze-compatibility`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisReceipt {
    pub analysis_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PartPayload {
    File(FilePart),
    Text(String),
}

/// Map a submission onto named multipart payloads. Kept separate from the
/// opaque `reqwest` form so part naming stays inspectable.
pub(crate) fn part_specs(parts: SubmissionParts) -> Result<Vec<(&'static str, PartPayload)>, ApiError> {
    let urls_json = serde_json::to_string(&parts.company_urls)
        .map_err(|err| ApiError::Unexpected(err.to_string()))?;

    Ok(vec![
        ("resume_file", PartPayload::File(parts.resume)),
        ("linkedin_profile", PartPayload::File(parts.linkedin_profile)),
        ("company_data", PartPayload::File(parts.company_data)),
        ("career_goals", PartPayload::Text(parts.career_goals)),
        ("job_descriptions", PartPayload::Text(parts.job_descriptions)),
        ("company_urls", PartPayload::Text(urls_json)),
    ])
}

/// Client for the compatibility-analysis service.
///
/// The base URL is injected at construction; nothing in this crate holds a
/// hidden global address.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Submit the six fields as one multipart POST and return the receipt
    /// carrying the server-issued analysis identifier.
    pub async fn analyze_compatibility(
        &self,
        parts: SubmissionParts,
    ) -> Result<AnalysisReceipt, ApiError> {
        let mut form = Form::new();
        for (name, payload) in part_specs(parts)? {
            let part = match payload {
                PartPayload::File(file) => Part::bytes(file.bytes)
                    .file_name(file.file_name)
                    .mime_str(&file.mime)
                    .map_err(|err| ApiError::Unexpected(err.to_string()))?,
                PartPayload::Text(value) => Part::text(value),
            };
            form = form.part(name, part);
        }

        let request = self
            .http
            .post(self.url("/analyze-compatibility"))
            .multipart(form);
        let response = send(request).await?;
        decode(response).await
    }

    /// Fetch a previously computed report by identifier.
    pub async fn fetch_analysis(&self, analysis_id: &str) -> Result<AnalysisReport, ApiError> {
        let request = self.http.get(self.url(&format!("/analysis/{analysis_id}")));
        let response = send(request).await?;
        let envelope: AnalysisEnvelope = decode(response).await?;
        Ok(envelope.flatten())
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    request
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await
        .map_err(ApiError::from_transport)
}

// reqwest has no builder timeout on wasm; race the request against a timer
// and surface expiry as a connectivity failure, matching the native path.
#[cfg(target_arch = "wasm32")]
async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    use futures_util::FutureExt;

    let send = request.send().fuse();
    let deadline = gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT.as_millis() as u32).fuse();
    futures_util::pin_mut!(send, deadline);

    futures_util::select! {
        result = send => result.map_err(ApiError::from_transport),
        _ = deadline => Err(ApiError::Network),
    }
}

async fn decode<T: for<'de> Deserialize<'de>>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_response(status.as_u16(), &body));
    }

    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Unexpected(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, mime: &str) -> FilePart {
        FilePart {
            file_name: name.to_string(),
            mime: mime.to_string(),
            bytes: vec![1, 2, 3],
        }
    }

    fn submission() -> SubmissionParts {
        SubmissionParts {
            resume: file("resume.pdf", "application/pdf"),
            linkedin_profile: file("profile.txt", "text/plain"),
            company_data: file("company.pdf", "application/pdf"),
            career_goals: "Become a platform engineer.".to_string(),
            job_descriptions: "Backend engineer role.".to_string(),
            company_urls: vec![
                "https://example.com".to_string(),
                "https://example.org".to_string(),
            ],
        }
    }

    #[test]
    fn all_six_parts_are_present_and_named() {
        let specs = part_specs(submission()).expect("specs build");
        let names: Vec<&str> = specs.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "resume_file",
                "linkedin_profile",
                "company_data",
                "career_goals",
                "job_descriptions",
                "company_urls",
            ]
        );
    }

    #[test]
    fn company_urls_part_is_a_json_array() {
        let specs = part_specs(submission()).expect("specs build");
        let (_, payload) = specs.last().expect("urls part exists");
        match payload {
            PartPayload::Text(json) => {
                let urls: Vec<String> = serde_json::from_str(json).expect("valid JSON array");
                assert_eq!(urls, vec!["https://example.com", "https://example.org"]);
            }
            other => panic!("expected text payload, got {other:?}"),
        }
    }

    #[test]
    fn file_parts_keep_their_names_and_mime_types() {
        let specs = part_specs(submission()).expect("specs build");
        match &specs[0].1 {
            PartPayload::File(part) => {
                assert_eq!(part.file_name, "resume.pdf");
                assert_eq!(part.mime, "application/pdf");
            }
            other => panic!("expected file payload, got {other:?}"),
        }
    }

    #[test]
    fn base_url_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.url("/analysis/abc"),
            "http://localhost:8000/analysis/abc"
        );
    }
}
