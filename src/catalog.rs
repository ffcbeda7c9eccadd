// Operation catalog: every API job the harness can exercise, in the order
// it is listed in the menu and run by "Run All". Each entry knows its
// labels, how to build its sample input and how to print its report.

use crate::api::SharpApi;
use crate::config::Settings;
use crate::requests::JobRequest;
use crate::samples;
use anyhow::{Context, Result};
use rand::Rng;
use std::io::Write;

/// Width of the rule printed after each report.
pub const RULE_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Ping,
    Quota,
    ParseResume,
    GenerateJobDescription,
    RelatedSkills,
    RelatedJobPositions,
    ProductReviewSentiment,
    ProductCategories,
    GenerateProductIntro,
    GenerateThankYouEmail,
    DetectPhones,
    DetectEmails,
    DetectSpam,
    SummarizeText,
    GenerateKeywords,
    Translate,
    Paraphrase,
    Proofread,
    GenerateSeoTags,
    TravelReviewSentiment,
    ToursAndActivitiesProductCategories,
    HospitalityProductCategories,
}

/// What a single run ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed,
    Skipped,
}

/// What running an operation amounts to, decided before any network call.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    Ping,
    Quota,
    Job(JobRequest),
    Skip(String),
}

impl Operation {
    pub const ALL: [Operation; 22] = [
        Operation::Ping,
        Operation::Quota,
        Operation::ParseResume,
        Operation::GenerateJobDescription,
        Operation::RelatedSkills,
        Operation::RelatedJobPositions,
        Operation::ProductReviewSentiment,
        Operation::ProductCategories,
        Operation::GenerateProductIntro,
        Operation::GenerateThankYouEmail,
        Operation::DetectPhones,
        Operation::DetectEmails,
        Operation::DetectSpam,
        Operation::SummarizeText,
        Operation::GenerateKeywords,
        Operation::Translate,
        Operation::Paraphrase,
        Operation::Proofread,
        Operation::GenerateSeoTags,
        Operation::TravelReviewSentiment,
        Operation::ToursAndActivitiesProductCategories,
        Operation::HospitalityProductCategories,
    ];

    /// Stable identifier, also the client method the entry exercises.
    pub fn key(self) -> &'static str {
        match self {
            Operation::Ping => "ping",
            Operation::Quota => "quota",
            Operation::ParseResume => "parseResume",
            Operation::GenerateJobDescription => "generateJobDescription",
            Operation::RelatedSkills => "relatedSkills",
            Operation::RelatedJobPositions => "relatedJobPositions",
            Operation::ProductReviewSentiment => "productReviewSentiment",
            Operation::ProductCategories => "productCategories",
            Operation::GenerateProductIntro => "generateProductIntro",
            Operation::GenerateThankYouEmail => "generateThankYouEmail",
            Operation::DetectPhones => "detectPhones",
            Operation::DetectEmails => "detectEmails",
            Operation::DetectSpam => "detectSpam",
            Operation::SummarizeText => "summarizeText",
            Operation::GenerateKeywords => "generateKeywords",
            Operation::Translate => "translate",
            Operation::Paraphrase => "paraphrase",
            Operation::Proofread => "proofread",
            Operation::GenerateSeoTags => "generateSeoTags",
            Operation::TravelReviewSentiment => "travelReviewSentiment",
            Operation::ToursAndActivitiesProductCategories => "toursAndActivitiesProductCategories",
            Operation::HospitalityProductCategories => "hospitalityProductCategories",
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Ping => "Ping Test",
            Operation::Quota => "Quota Test",
            Operation::ParseResume => "Parse Resume Test",
            Operation::GenerateJobDescription => "Generate Job Description Test",
            Operation::RelatedSkills => "Related Skills Test",
            Operation::RelatedJobPositions => "Related Job Positions Test",
            Operation::ProductReviewSentiment => "Product Review Sentiment Test",
            Operation::ProductCategories => "Product Categories Test",
            Operation::GenerateProductIntro => "Generate Product Intro Test",
            Operation::GenerateThankYouEmail => "Generate Thank You Email Test",
            Operation::DetectPhones => "Detect Phones Test",
            Operation::DetectEmails => "Detect Emails Test",
            Operation::DetectSpam => "Detect Spam Test",
            Operation::SummarizeText => "Summarize Text Test",
            Operation::GenerateKeywords => "Generate Keywords Test",
            Operation::Translate => "Translate Text Test",
            Operation::Paraphrase => "Paraphrase Text Test",
            Operation::Proofread => "Proofread Text Test",
            Operation::GenerateSeoTags => "Generate SEO Tags Test",
            Operation::TravelReviewSentiment => "Travel Review Sentiment Test",
            Operation::ToursAndActivitiesProductCategories => {
                "Tours and Activities Product Categories Test"
            }
            Operation::HospitalityProductCategories => "Hospitality Product Categories Test",
        }
    }

    /// Heading printed above the result.
    pub fn result_title(self) -> &'static str {
        match self {
            Operation::Ping => "Ping Response",
            Operation::Quota => "Quota Information",
            Operation::ParseResume => "Parsed Resume Result",
            Operation::GenerateJobDescription => "Generated Job Description Result",
            Operation::RelatedSkills => "Related Skills Result",
            Operation::RelatedJobPositions => "Related Job Positions Result",
            Operation::ProductReviewSentiment => "Product Review Sentiment Result",
            Operation::ProductCategories => "Product Categories Result",
            Operation::GenerateProductIntro => "Generated Product Intro Result",
            Operation::GenerateThankYouEmail => "Generated Thank You Email Result",
            Operation::DetectPhones => "Detected Phones Result",
            Operation::DetectEmails => "Detected Emails Result",
            Operation::DetectSpam => "Spam Detection Result",
            Operation::SummarizeText => "Summarized Text Result",
            Operation::GenerateKeywords => "Generated Keywords Result",
            Operation::Translate => "Translated Text Result",
            Operation::Paraphrase => "Paraphrased Text Result",
            Operation::Proofread => "Proofread Text Result",
            Operation::GenerateSeoTags => "Generated SEO Tags Result",
            Operation::TravelReviewSentiment => "Travel Review Sentiment Result",
            Operation::ToursAndActivitiesProductCategories => {
                "Tours and Activities Product Categories Result"
            }
            Operation::HospitalityProductCategories => "Hospitality Product Categories Result",
        }
    }

    /// Build fresh sample input for this operation.
    pub fn prepare<R: Rng + ?Sized>(self, settings: &Settings, rng: &mut R) -> Invocation {
        let request = match self {
            Operation::Ping => return Invocation::Ping,
            Operation::Quota => return Invocation::Quota,
            Operation::ParseResume => {
                let path = &settings.resume_path;
                // Only ever read, never created.
                if !path.is_file() {
                    return Invocation::Skip(format!(
                        "Resume file '{}' not found. Skipping parseResume test.",
                        path.display()
                    ));
                }
                JobRequest::ParseResume {
                    file: path.clone(),
                    language: samples::LANGUAGE.to_string(),
                }
            }
            Operation::GenerateJobDescription => {
                JobRequest::JobDescription(samples::job_description(rng))
            }
            Operation::RelatedSkills => JobRequest::RelatedSkills(samples::related_skills()),
            Operation::RelatedJobPositions => {
                JobRequest::RelatedJobPositions(samples::related_job_positions())
            }
            Operation::ProductReviewSentiment => {
                JobRequest::ProductReviewSentiment(samples::product_review(rng))
            }
            Operation::ProductCategories => {
                JobRequest::ProductCategories(samples::product_categories(rng))
            }
            Operation::GenerateProductIntro => JobRequest::ProductIntro(samples::product_intro(rng)),
            Operation::GenerateThankYouEmail => {
                JobRequest::ThankYouEmail(samples::thank_you_email(rng))
            }
            Operation::DetectPhones => JobRequest::DetectPhones(samples::text_with_phone(rng)),
            Operation::DetectEmails => JobRequest::DetectEmails(samples::text_with_email(rng)),
            Operation::DetectSpam => JobRequest::DetectSpam(samples::spam_text(rng)),
            Operation::SummarizeText => JobRequest::Summarize(samples::long_text(rng)),
            Operation::GenerateKeywords => JobRequest::Keywords(samples::keyword_content(rng)),
            Operation::Translate => JobRequest::Translate(samples::translation(rng)),
            Operation::Paraphrase => JobRequest::Paraphrase(samples::paraphrase(rng)),
            Operation::Proofread => JobRequest::Proofread(samples::text_with_typos(rng)),
            Operation::GenerateSeoTags => JobRequest::SeoTags(samples::seo_content(rng)),
            Operation::TravelReviewSentiment => {
                JobRequest::TravelReviewSentiment(samples::travel_review(rng))
            }
            Operation::ToursAndActivitiesProductCategories => {
                JobRequest::ToursAndActivitiesCategories(samples::tour_product(rng))
            }
            Operation::HospitalityProductCategories => {
                JobRequest::HospitalityCategories(samples::hospitality_product(rng))
            }
        };
        Invocation::Job(request)
    }
}

/// Run one catalog entry against `api`. The report goes to `out`; a skip
/// notice goes to `err`.
pub fn run_operation(
    op: Operation,
    api: &dyn SharpApi,
    settings: &Settings,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<RunStatus> {
    writeln!(out, "\nTesting {}() method...", op.key())?;
    let invocation = op.prepare(settings, &mut rand::thread_rng());

    let status = match invocation {
        Invocation::Ping => {
            let pong = api.ping().with_context(|| format!("{} failed", op.label()))?;
            writeln!(out, "{}:", op.result_title())?;
            writeln!(out, "{}", serde_json::to_string_pretty(&pong)?)?;
            RunStatus::Completed
        }
        Invocation::Quota => {
            let quota = api.quota().with_context(|| format!("{} failed", op.label()))?;
            writeln!(out, "{}:", op.result_title())?;
            writeln!(out, "{}", serde_json::to_string_pretty(&quota)?)?;
            RunStatus::Completed
        }
        Invocation::Job(request) => {
            let handle = api
                .submit(&request)
                .with_context(|| format!("{} failed to submit", op.label()))?;
            let job = api
                .fetch_results(&handle)
                .with_context(|| format!("{} failed while waiting for the result", op.label()))?;
            writeln!(out, "{}:", op.result_title())?;
            writeln!(out, "{}", job.result_json()?)?;
            RunStatus::Completed
        }
        Invocation::Skip(reason) => {
            log::warn!("{}", reason);
            writeln!(err, "{}", reason)?;
            RunStatus::Skipped
        }
    };
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    Ok(status)
}
