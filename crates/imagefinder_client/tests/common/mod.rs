#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Once};

use imagefinder_client::{DispatchError, Dispatcher, HttpMethod, UiSink};
use imagefinder_core::TerminalResult;
use serde_json::{json, Value};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(finder_logging::initialize_for_tests);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Loading(bool),
    Terminal(TerminalResult),
}

#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SinkEvent>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn terminals(&self) -> Vec<TerminalResult> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SinkEvent::Terminal(result) => Some(result),
                SinkEvent::Loading(_) => None,
            })
            .collect()
    }
}

impl UiSink for RecordingSink {
    fn set_loading_visible(&self, visible: bool) {
        self.events.lock().unwrap().push(SinkEvent::Loading(visible));
    }

    fn on_terminal_result(&self, result: &TerminalResult) {
        self.events
            .lock()
            .unwrap()
            .push(SinkEvent::Terminal(result.clone()));
    }
}

/// Answers calls from a queue; once it runs dry every call is `in_progress`.
#[derive(Default)]
pub struct ScriptedDispatcher {
    answers: Mutex<VecDeque<Result<Option<Value>, DispatchError>>>,
    calls: Mutex<Vec<(HttpMethod, String)>>,
}

impl ScriptedDispatcher {
    pub fn new(answers: Vec<Result<Option<Value>, DispatchError>>) -> Arc<Self> {
        Arc::new(Self {
            answers: Mutex::new(answers.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<(HttpMethod, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, method: HttpMethod) -> usize {
        self.calls().iter().filter(|(m, _)| *m == method).count()
    }
}

#[async_trait::async_trait]
impl Dispatcher for ScriptedDispatcher {
    async fn call(
        &self,
        endpoint: &str,
        method: HttpMethod,
        _body: Option<&Value>,
    ) -> Result<Option<Value>, DispatchError> {
        self.calls
            .lock()
            .unwrap()
            .push((method, endpoint.to_string()));
        let next = self.answers.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(Some(in_progress())))
    }
}

pub fn in_progress() -> Value {
    json!({ "status": "in_progress", "message": "Crawling is still in progress. Try again later." })
}

pub fn completed(images: &[&str], logos: &[&str]) -> Value {
    json!({
        "status": "completed",
        "message": "Crawling completed successfully.",
        "images": serde_json::to_string(images).unwrap(),
        "logos": serde_json::to_string(logos).unwrap(),
    })
}
