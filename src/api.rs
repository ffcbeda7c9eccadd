// API client module: a small blocking HTTP client for the SharpAPI service.
// It submits jobs, then polls the returned status URL until the job settles.
// The dispatcher only talks to the `SharpApi` trait, so tests can swap the
// network client for an in-memory fake.

use crate::config::Settings;
use crate::error::ApiError;
use crate::requests::{JobRequest, Payload};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::{multipart, Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, RETRY_AFTER};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;
use std::thread;
use std::time::{Duration, Instant};

/// Operations of the remote service used by the harness.
pub trait SharpApi {
    fn ping(&self) -> Result<Value, ApiError>;
    fn quota(&self) -> Result<Quota, ApiError>;
    /// Submit a job and return the handle used to fetch its result.
    fn submit(&self, request: &JobRequest) -> Result<JobHandle, ApiError>;
    /// Block until the job behind `handle` succeeds, fails or times out.
    fn fetch_results(&self, handle: &JobHandle) -> Result<ApiJob, ApiError>;
}

/// Reference to a submitted job, exchanged for its result once complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHandle {
    status_url: String,
    job_id: Option<String>,
}

impl JobHandle {
    pub fn new(status_url: impl Into<String>, job_id: Option<String>) -> Self {
        Self {
            status_url: status_url.into(),
            job_id,
        }
    }

    pub fn status_url(&self) -> &str {
        &self.status_url
    }

    pub fn job_id(&self) -> Option<&str> {
        self.job_id.as_deref()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    New,
    Pending,
    Success,
    Failed,
}

/// A finished job as reported by the status endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiJob {
    pub id: String,
    pub job_type: String,
    pub status: JobStatus,
    pub result: Value,
}

impl ApiJob {
    /// Pretty-printed JSON of the job result.
    pub fn result_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.result)
    }
}

/// Subscription and word quota information. Unknown fields are ignored so
/// the struct keeps parsing when the service adds more.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Quota {
    pub timestamp: Option<String>,
    pub on_trial: Option<bool>,
    pub trial_ends: Option<String>,
    pub subscribed: Option<bool>,
    pub current_subscription_start: Option<String>,
    pub current_subscription_end: Option<String>,
    // Counters sometimes arrive as strings; see `lenient_number`.
    #[serde(deserialize_with = "lenient_number")]
    pub subscription_words_quota: Option<u64>,
    #[serde(deserialize_with = "lenient_number")]
    pub subscription_words_used: Option<u64>,
    #[serde(deserialize_with = "lenient_number")]
    pub subscription_words_used_percentage: Option<f64>,
}

/// Accept a number, a numeric string or null. Anything else reads as `None`
/// rather than failing the whole quota document.
fn lenient_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(_) => serde_json::from_value(value).ok(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

#[derive(Deserialize, Debug)]
struct SubmitResponse {
    status_url: String,
    #[serde(default)]
    job_id: Option<Value>,
}

#[derive(Deserialize, Debug)]
struct StatusEnvelope {
    data: StatusData,
}

#[derive(Deserialize, Debug)]
struct StatusData {
    id: Value,
    attributes: StatusAttributes,
}

#[derive(Deserialize, Debug)]
struct StatusAttributes {
    status: JobStatus,
    #[serde(rename = "type", default)]
    job_type: String,
    #[serde(default)]
    result: Value,
}

/// Blocking client holding a reqwest client with the bearer credential
/// baked into its default headers.
#[derive(Clone)]
pub struct SharpApiClient {
    client: Client,
    base_url: String,
    poll_interval: Duration,
    max_wait: Duration,
}

impl SharpApiClient {
    pub fn new(settings: &Settings) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", settings.api_key))
            .map_err(|_| ApiError::InvalidCredential)?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("sharpapi-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(SharpApiClient {
            client,
            base_url: settings.base_url.clone(),
            poll_interval: settings.poll_interval,
            max_wait: settings.max_wait,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("GET {}", url);
        let res = check(self.client.get(&url).send()?)?;
        Ok(serde_json::from_str(&res.text()?)?)
    }

    fn upload_resume(&self, url: &str, file: &Path, language: &str) -> Result<Response, ApiError> {
        let handle = File::open(file).map_err(|source| ApiError::Io {
            path: file.to_path_buf(),
            source,
        })?;
        let file_name = file
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("resume.pdf")
            .to_string();
        let part = multipart::Part::reader(handle)
            .file_name(file_name)
            .mime_str(resume_mime(file))?;
        let form = multipart::Form::new()
            .text("language", language.to_string())
            .part("file", part);
        Ok(self.client.post(url).multipart(form).send()?)
    }

    fn status(&self, handle: &JobHandle) -> Result<(StatusEnvelope, Option<Duration>), ApiError> {
        log::debug!("GET {}", handle.status_url());
        let res = check(self.client.get(handle.status_url()).send()?)?;
        let retry_after = res
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs);
        let envelope: StatusEnvelope = serde_json::from_str(&res.text()?)?;
        Ok((envelope, retry_after))
    }
}

impl SharpApi for SharpApiClient {
    fn ping(&self) -> Result<Value, ApiError> {
        self.get_json("/ping")
    }

    fn quota(&self) -> Result<Quota, ApiError> {
        self.get_json("/quota")
    }

    fn submit(&self, request: &JobRequest) -> Result<JobHandle, ApiError> {
        let url = self.url(request.endpoint());
        log::debug!("POST {}", url);
        let res = match request.payload()? {
            Payload::Json(body) => self.client.post(&url).json(&body).send()?,
            Payload::ResumeUpload { file, language } => self.upload_resume(&url, file, language)?,
        };
        let submitted: SubmitResponse = serde_json::from_str(&check(res)?.text()?)?;
        let job_id = submitted.job_id.map(|id| id_to_string(&id));
        log::info!(
            "submitted job {} at {}",
            job_id.as_deref().unwrap_or("?"),
            submitted.status_url
        );
        Ok(JobHandle::new(submitted.status_url, job_id))
    }

    fn fetch_results(&self, handle: &JobHandle) -> Result<ApiJob, ApiError> {
        let spinner = spinner("Waiting for job result...");
        let started = Instant::now();
        let mut poll_count = 0u32;
        let outcome = loop {
            poll_count += 1;
            let (envelope, retry_after) = match self.status(handle) {
                Ok(v) => v,
                Err(e) => break Err(e),
            };
            let data = envelope.data;
            let attrs = data.attributes;
            log::info!("poll attempt {}: status = {:?}", poll_count, attrs.status);

            match attrs.status {
                JobStatus::Success => {
                    break Ok(ApiJob {
                        id: id_to_string(&data.id),
                        job_type: attrs.job_type,
                        status: attrs.status,
                        result: attrs.result,
                    })
                }
                JobStatus::Failed => {
                    break Err(ApiError::JobFailed {
                        job_id: id_to_string(&data.id),
                        result: attrs.result.to_string(),
                    })
                }
                JobStatus::New | JobStatus::Pending => {
                    let wait = retry_after.unwrap_or(self.poll_interval);
                    let waited = started.elapsed();
                    if waited + wait > self.max_wait {
                        break Err(ApiError::Timeout { waited });
                    }
                    spinner.set_message(format!(
                        "Job {}, next check in {}s",
                        attrs.status_label(),
                        wait.as_secs()
                    ));
                    thread::sleep(wait);
                }
            }
        };
        spinner.finish_and_clear();
        outcome
    }
}

impl StatusAttributes {
    fn status_label(&self) -> &'static str {
        match self.status {
            JobStatus::New => "queued",
            JobStatus::Pending => "pending",
            JobStatus::Success => "done",
            JobStatus::Failed => "failed",
        }
    }
}

/// Turn a non-success response into `ApiError::Http` carrying the body.
fn check(res: Response) -> Result<Response, ApiError> {
    if res.status().is_success() {
        return Ok(res);
    }
    let status = res.status().as_u16();
    let body = res.text().unwrap_or_default();
    log::debug!("request failed: {} - {}", status, body);
    Err(ApiError::Http { status, body })
}

/// Job ids come back as strings or numbers depending on the endpoint.
fn id_to_string(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn resume_mime(file: &Path) -> &'static str {
    let ext = file
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("rtf") => "application/rtf",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
