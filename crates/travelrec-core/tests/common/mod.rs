#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;
use travelrec_core::{DatasetSource, DisplayRecord, Renderer, Result, StatusMessage, TravelError};

/// One country with two cities, one temple, one beach.
pub const INDIA_JSON: &str = r#"{
  "countries": [
    {
      "name": "India",
      "cities": [
        { "name": "Delhi", "imageUrl": "delhi.jpg", "description": "Capital territory with Mughal monuments." },
        { "name": "Mumbai", "imageUrl": "mumbai.jpg", "description": "Financial centre on the Arabian Sea." }
      ]
    }
  ],
  "temples": [
    { "name": "Golden Temple", "imageUrl": "golden.jpg", "description": "Sikh gurdwara in Amritsar." }
  ],
  "beaches": [
    { "name": "Goa Beach", "imageUrl": "goa.jpg", "description": "Palm-lined sand and sunsets." }
  ]
}"#;

/// Records every call so tests can assert on what a user would have seen.
#[derive(Default)]
pub struct RecordingRenderer {
    pub results: Mutex<Vec<Vec<String>>>,
    pub statuses: Mutex<Vec<StatusMessage>>,
    pub input: Mutex<String>,
}

impl RecordingRenderer {
    pub fn last_results(&self) -> Option<Vec<String>> {
        self.results.lock().unwrap().last().cloned()
    }

    pub fn last_status(&self) -> Option<StatusMessage> {
        self.statuses.lock().unwrap().last().cloned()
    }

    pub fn input(&self) -> String {
        self.input.lock().unwrap().clone()
    }
}

impl Renderer for RecordingRenderer {
    fn show_results(&self, records: &[&DisplayRecord]) {
        let names = records.iter().map(|r| r.name.clone()).collect();
        self.results.lock().unwrap().push(names);
    }

    fn show_status(&self, status: &StatusMessage) {
        self.statuses.lock().unwrap().push(status.clone());
    }

    fn set_input(&self, keyword: &str) {
        *self.input.lock().unwrap() = keyword.to_owned();
    }

    fn reset_input(&self) {
        self.input.lock().unwrap().clear();
    }
}

/// Holds every fetch until `open` is called.
pub struct GatedSource {
    gate: Notify,
    bytes: Vec<u8>,
    calls: AtomicUsize,
}

impl GatedSource {
    pub fn new(json: &str) -> Self {
        GatedSource {
            gate: Notify::new(),
            bytes: json.as_bytes().to_vec(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn open(&self) {
        self.gate.notify_waiters();
        self.gate.notify_one();
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DatasetSource for GatedSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        Ok(self.bytes.clone())
    }

    fn describe(&self) -> String {
        "gated".into()
    }
}

/// Fails with an HTTP status for the first `failures` fetches, then serves
/// `INDIA_JSON`.
pub struct FlakySource {
    status: u16,
    failures: AtomicUsize,
    calls: AtomicUsize,
}

impl FlakySource {
    pub fn new(status: u16, failures: usize) -> Self {
        FlakySource {
            status,
            failures: AtomicUsize::new(failures),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn always(status: u16) -> Self {
        Self::new(status, usize::MAX)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DatasetSource for FlakySource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let left = self.failures.load(Ordering::SeqCst);
        if left > 0 {
            self.failures.store(left - 1, Ordering::SeqCst);
            return Err(TravelError::Load {
                status: self.status,
            });
        }
        Ok(INDIA_JSON.as_bytes().to_vec())
    }

    fn describe(&self) -> String {
        format!("flaky({})", self.status)
    }
}
