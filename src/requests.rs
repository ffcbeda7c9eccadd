// Request payloads for the asynchronous SharpAPI jobs. Field names mirror
// the JSON bodies the service expects; optional fields are left out of the
// body when unset.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Parameters of the job description generator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JobDescriptionParameters {
    pub name: String,
    pub company_name: String,
    pub minimum_work_experience: String,
    pub minimum_education: String,
    pub employment_type: String,
    pub required_skills: Vec<String>,
    pub optional_skills: Vec<String>,
    pub country: String,
    pub remote: bool,
    pub visa_sponsored: bool,
    pub voice_tone: String,
    pub context: String,
    pub language: String,
}

/// Plain text analysed as-is (detectors, sentiment, proofreading).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TextQuery {
    pub content: String,
}

/// Text plus an upper bound on the number of returned items.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuantityQuery {
    pub content: String,
    pub language: String,
    pub max_quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Text plus an upper bound on the length of the generated text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LengthQuery {
    pub content: String,
    pub language: String,
    pub max_length: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TranslationQuery {
    pub content: String,
    /// Target language.
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SeoQuery {
    pub content: String,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_tone: Option<String>,
}

/// Travel and hospitality product categorisation, scoped to a location.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LocationQuery {
    pub content: String,
    pub city: String,
    pub country: String,
    pub language: String,
    pub max_quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// One submission to an asynchronous job endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum JobRequest {
    ParseResume { file: PathBuf, language: String },
    JobDescription(JobDescriptionParameters),
    RelatedSkills(QuantityQuery),
    RelatedJobPositions(QuantityQuery),
    ProductReviewSentiment(TextQuery),
    ProductCategories(QuantityQuery),
    ProductIntro(LengthQuery),
    ThankYouEmail(LengthQuery),
    DetectPhones(TextQuery),
    DetectEmails(TextQuery),
    DetectSpam(TextQuery),
    Summarize(LengthQuery),
    Keywords(QuantityQuery),
    Translate(TranslationQuery),
    Paraphrase(LengthQuery),
    Proofread(TextQuery),
    SeoTags(SeoQuery),
    TravelReviewSentiment(TextQuery),
    ToursAndActivitiesCategories(LocationQuery),
    HospitalityCategories(LocationQuery),
}

/// How a request travels on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<'a> {
    Json(Value),
    ResumeUpload { file: &'a Path, language: &'a str },
}

impl JobRequest {
    /// Path of the submit endpoint, relative to the API base URL.
    pub fn endpoint(&self) -> &'static str {
        match self {
            JobRequest::ParseResume { .. } => "/hr/parse_resume",
            JobRequest::JobDescription(_) => "/hr/job_description",
            JobRequest::RelatedSkills(_) => "/hr/related_skills",
            JobRequest::RelatedJobPositions(_) => "/hr/related_job_positions",
            JobRequest::ProductReviewSentiment(_) => "/ecommerce/review_sentiment",
            JobRequest::ProductCategories(_) => "/ecommerce/product_categories",
            JobRequest::ProductIntro(_) => "/ecommerce/product_intro",
            JobRequest::ThankYouEmail(_) => "/ecommerce/thank_you_email",
            JobRequest::DetectPhones(_) => "/content/detect_phones",
            JobRequest::DetectEmails(_) => "/content/detect_emails",
            JobRequest::DetectSpam(_) => "/content/detect_spam",
            JobRequest::Summarize(_) => "/content/summarize",
            JobRequest::Keywords(_) => "/content/keywords",
            JobRequest::Translate(_) => "/content/translate",
            JobRequest::Paraphrase(_) => "/content/paraphrase",
            JobRequest::Proofread(_) => "/content/proofread",
            JobRequest::SeoTags(_) => "/seo/generate_tags",
            JobRequest::TravelReviewSentiment(_) => "/tth/review_sentiment",
            JobRequest::ToursAndActivitiesCategories(_) => "/tth/ta_product_categories",
            JobRequest::HospitalityCategories(_) => "/tth/hospitality_product_categories",
        }
    }

    pub fn payload(&self) -> Result<Payload<'_>, serde_json::Error> {
        let body = match self {
            JobRequest::ParseResume { file, language } => {
                return Ok(Payload::ResumeUpload {
                    file: file.as_path(),
                    language: language.as_str(),
                });
            }
            JobRequest::JobDescription(p) => serde_json::to_value(p)?,
            JobRequest::RelatedSkills(q)
            | JobRequest::RelatedJobPositions(q)
            | JobRequest::ProductCategories(q)
            | JobRequest::Keywords(q) => serde_json::to_value(q)?,
            JobRequest::ProductIntro(q)
            | JobRequest::ThankYouEmail(q)
            | JobRequest::Summarize(q)
            | JobRequest::Paraphrase(q) => serde_json::to_value(q)?,
            JobRequest::ProductReviewSentiment(q)
            | JobRequest::DetectPhones(q)
            | JobRequest::DetectEmails(q)
            | JobRequest::DetectSpam(q)
            | JobRequest::Proofread(q)
            | JobRequest::TravelReviewSentiment(q) => serde_json::to_value(q)?,
            JobRequest::Translate(q) => serde_json::to_value(q)?,
            JobRequest::SeoTags(q) => serde_json::to_value(q)?,
            JobRequest::ToursAndActivitiesCategories(q)
            | JobRequest::HospitalityCategories(q) => serde_json::to_value(q)?,
        };
        Ok(Payload::Json(body))
    }
}
