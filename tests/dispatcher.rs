//! Menu loop tests driven by a scripted prompter and an in-memory API.

use anyhow::{anyhow, Result};
use serde_json::{json, Value};
use sharpapi_cli::api::{ApiJob, JobHandle, JobStatus, Quota, SharpApi};
use sharpapi_cli::catalog::{Invocation, Operation};
use sharpapi_cli::config::Settings;
use sharpapi_cli::error::ApiError;
use sharpapi_cli::requests::JobRequest;
use sharpapi_cli::ui::{main_menu, run_all, MenuChoice, Prompter, FAREWELL};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Duration;

/// Records every call and fails submissions to the listed endpoints.
#[derive(Default)]
struct RecordingApi {
    calls: RefCell<Vec<String>>,
    requests: RefCell<Vec<JobRequest>>,
    failing: Vec<&'static str>,
}

impl RecordingApi {
    fn failing_on(endpoints: &[&'static str]) -> Self {
        RecordingApi {
            failing: endpoints.to_vec(),
            ..Default::default()
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl SharpApi for RecordingApi {
    fn ping(&self) -> Result<Value, ApiError> {
        self.calls.borrow_mut().push("ping".to_string());
        Ok(json!({ "ping": "pong" }))
    }

    fn quota(&self) -> Result<Quota, ApiError> {
        self.calls.borrow_mut().push("quota".to_string());
        Ok(Quota::default())
    }

    fn submit(&self, request: &JobRequest) -> Result<JobHandle, ApiError> {
        let endpoint = request.endpoint();
        self.calls.borrow_mut().push(endpoint.to_string());
        self.requests.borrow_mut().push(request.clone());
        if self.failing.contains(&endpoint) {
            return Err(ApiError::Http {
                status: 500,
                body: "upstream exploded".to_string(),
            });
        }
        Ok(JobHandle::new(format!("memory://{}", endpoint), None))
    }

    fn fetch_results(&self, handle: &JobHandle) -> Result<ApiJob, ApiError> {
        Ok(ApiJob {
            id: "job".to_string(),
            job_type: "test".to_string(),
            status: JobStatus::Success,
            result: json!({ "source": handle.status_url() }),
        })
    }
}

/// Answers prompts from a fixed script.
struct ScriptedPrompter {
    selections: VecDeque<MenuChoice>,
    confirms: VecDeque<bool>,
    menus_shown: usize,
}

impl ScriptedPrompter {
    fn new(selections: &[MenuChoice], confirms: &[bool]) -> Self {
        ScriptedPrompter {
            selections: selections.iter().copied().collect(),
            confirms: confirms.iter().copied().collect(),
            menus_shown: 0,
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, _prompt: &str, items: &[&str]) -> Result<usize> {
        self.menus_shown += 1;
        let choice = self
            .selections
            .pop_front()
            .ok_or_else(|| anyhow!("no selection scripted"))?;
        items
            .iter()
            .position(|label| *label == choice.label())
            .ok_or_else(|| anyhow!("{} is not on the menu", choice.label()))
    }

    fn confirm(&mut self, _prompt: &str, _default: bool) -> Result<bool> {
        self.confirms
            .pop_front()
            .ok_or_else(|| anyhow!("no confirmation scripted"))
    }
}

fn settings(resume_path: PathBuf) -> Settings {
    Settings {
        api_key: "test-key".to_string(),
        base_url: "memory://".to_string(),
        resume_path,
        poll_interval: Duration::from_secs(0),
        max_wait: Duration::from_secs(0),
    }
}

fn no_resume() -> Settings {
    settings(PathBuf::from("/definitely/not/here/sample_resume.pdf"))
}

/// Output of one menu session, split by stream.
struct Session {
    result: Result<()>,
    out: String,
    err: String,
}

fn run_menu(api: &RecordingApi, settings: &Settings, prompter: &mut ScriptedPrompter) -> Session {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let result = main_menu(api, settings, prompter, &mut out, &mut err);
    Session {
        result,
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
    }
}

#[test]
fn exit_invokes_nothing() {
    let api = RecordingApi::default();
    let mut prompter = ScriptedPrompter::new(&[MenuChoice::Exit], &[]);

    let session = run_menu(&api, &no_resume(), &mut prompter);

    assert!(session.result.is_ok());
    assert!(api.calls().is_empty());
    assert!(session.out.contains(FAREWELL));
    assert!(session.err.is_empty());
    assert_eq!(prompter.menus_shown, 1);
}

#[test]
fn run_all_invokes_every_operation_once_in_order() {
    let api = RecordingApi::default();
    let settings = no_resume();
    let mut prompter = ScriptedPrompter::new(&[MenuChoice::RunAll], &[false]);

    let session = run_menu(&api, &settings, &mut prompter);
    assert!(session.result.is_ok());

    let mut rng = rand::thread_rng();
    let expected: Vec<String> = Operation::ALL
        .iter()
        .filter_map(|op| match op.prepare(&settings, &mut rng) {
            Invocation::Ping => Some("ping".to_string()),
            Invocation::Quota => Some("quota".to_string()),
            Invocation::Job(request) => Some(request.endpoint().to_string()),
            Invocation::Skip(_) => None,
        })
        .collect();
    assert_eq!(api.calls(), expected);
    assert!(session.err.contains("Skipping parseResume test."));
    assert!(session.out.contains("Run All finished: 21 completed, 1 skipped, 0 failed"));
    assert!(session.out.trim_end().ends_with(FAREWELL));
}

#[test]
fn consecutive_batches_use_fresh_samples() {
    let api = RecordingApi::default();
    let mut prompter = ScriptedPrompter::new(
        &[MenuChoice::RunAll, MenuChoice::RunAll],
        &[true, false],
    );

    let session = run_menu(&api, &no_resume(), &mut prompter);
    assert!(session.result.is_ok());

    let requests = api.requests.borrow();
    assert_eq!(requests.len() % 2, 0);
    let (first, second) = requests.split_at(requests.len() / 2);
    // Related skills and positions use fixed inputs; the spam amount has a
    // small range.
    let fixed = ["/hr/related_skills", "/hr/related_job_positions", "/content/detect_spam"];
    for (a, b) in first.iter().zip(second) {
        assert_eq!(a.endpoint(), b.endpoint());
        if fixed.contains(&a.endpoint()) {
            continue;
        }
        assert_ne!(a, b, "{} repeated its sample input", a.endpoint());
    }
}

#[test]
fn failing_operation_keeps_loop_alive() {
    let api = RecordingApi::failing_on(&["/content/translate"]);
    let mut prompter = ScriptedPrompter::new(
        &[MenuChoice::Single(Operation::Translate), MenuChoice::Exit],
        &[true],
    );

    let session = run_menu(&api, &no_resume(), &mut prompter);

    assert!(session.result.is_ok());
    assert!(session.err.contains("An error occurred:"));
    assert!(session.err.contains("upstream exploded"));
    assert!(!session.out.contains("An error occurred:"));
    assert_eq!(prompter.menus_shown, 2);
    assert!(session.out.contains(FAREWELL));
}

#[test]
fn run_all_continues_past_a_failure() {
    let api = RecordingApi::failing_on(&["/content/summarize"]);
    let mut out = Vec::new();
    let mut err = Vec::new();

    let summary = run_all(&api, &no_resume(), &mut out, &mut err).unwrap();

    assert_eq!(summary.failed, vec![Operation::SummarizeText]);
    assert_eq!(summary.completed, 20);
    assert_eq!(summary.skipped, 1);
    let calls = api.calls();
    assert_eq!(calls.last().map(String::as_str), Some("/tth/hospitality_product_categories"));
    let errors = String::from_utf8(err).unwrap();
    assert!(errors.contains("Summarize Text Test failed to submit"));
    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("Run All finished: 20 completed, 1 skipped, 1 failed"));
}

#[test]
fn missing_resume_is_a_warning_not_an_error() {
    let api = RecordingApi::default();
    let mut prompter =
        ScriptedPrompter::new(&[MenuChoice::Single(Operation::ParseResume)], &[false]);

    let session = run_menu(&api, &no_resume(), &mut prompter);

    assert!(session.result.is_ok());
    assert!(api.calls().is_empty());
    assert!(session.err.contains("not found. Skipping parseResume test."));
    assert!(!session.err.contains("An error occurred"));
    assert!(!session.out.contains("Skipping"));
}

#[test]
fn present_resume_is_submitted() {
    let file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    let api = RecordingApi::default();
    let mut prompter =
        ScriptedPrompter::new(&[MenuChoice::Single(Operation::ParseResume)], &[false]);

    let session = run_menu(&api, &settings(file.path().to_path_buf()), &mut prompter);

    assert!(session.result.is_ok());
    assert_eq!(api.calls(), vec!["/hr/parse_resume".to_string()]);
    assert!(session.out.contains("Parsed Resume Result:"));
    assert!(session.out.contains(&"-".repeat(50)));
}

#[test]
fn single_report_has_heading_title_and_rule() {
    let api = RecordingApi::default();
    let mut prompter = ScriptedPrompter::new(&[MenuChoice::Single(Operation::Ping)], &[false]);

    let session = run_menu(&api, &no_resume(), &mut prompter);

    assert!(session.result.is_ok());
    let lines: Vec<&str> = session.out.lines().collect();
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "Testing ping() method...");
    assert_eq!(lines[2], "Ping Response:");
    assert!(session.out.contains("\"pong\""));
    assert!(lines.contains(&"-".repeat(50).as_str()));
}
