//! Test doubles for the submit pipeline and the chart lifecycle.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use common::PredictionResponse;
use serde_json::Value;

use crate::chart::{DonutRenderer, DonutSpec};
use crate::error::Result;
use crate::response::interpret_reply;
use crate::validate::{FormInput, validate};
use crate::view::ScoreView;

/// Canned `/predict` exchange standing in for the HTTP client.
#[derive(Debug, Clone)]
pub struct ScriptedReply {
    pub status_ok: bool,
    pub body: Option<Value>,
}

impl ScriptedReply {
    /// A 2xx reply carrying the given JSON body.
    pub fn success(body: Value) -> Self {
        Self {
            status_ok: true,
            body: Some(body),
        }
    }

    /// A non-2xx reply carrying the given JSON body.
    pub fn failure(body: Value) -> Self {
        Self {
            status_ok: false,
            body: Some(body),
        }
    }

    /// A reply whose body was not valid JSON.
    pub fn unreadable(status_ok: bool) -> Self {
        Self { status_ok, body: None }
    }

    /// Interpret the exchange exactly as the live client does.
    pub fn score(self) -> Result<PredictionResponse> {
        interpret_reply(self.status_ok, self.body)
    }
}

/// Drive the native half of the submit pipeline against a scripted
/// exchange: validation, reply interpretation and the view projection.
/// Validation failures return before the reply is consulted.
pub fn submit_scenario(input: &FormInput, reply: ScriptedReply) -> Result<ScoreView> {
    validate(input)?;
    let prediction = reply.score()?;
    Ok(ScoreView::from_response(&prediction))
}

/// One observed transition of a recorded chart instance. The number is the
/// instance id, counted from 1 per recorder.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    Created(usize, [f64; 2]),
    Updated(usize, [f64; 2]),
    Destroyed(usize),
}

/// Factory for [`RecordingRenderer`] instances sharing one event log.
#[derive(Default)]
pub struct ChartRecorder {
    events: Rc<RefCell<Vec<ChartEvent>>>,
    next_id: Cell<usize>,
}

impl ChartRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer and log the creation with its initial slices.
    pub fn create(&self, spec: &DonutSpec) -> Option<RecordingRenderer> {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.events.borrow_mut().push(ChartEvent::Created(id, spec.values));
        Some(RecordingRenderer {
            id,
            events: Rc::clone(&self.events),
        })
    }

    pub fn events(&self) -> Vec<ChartEvent> {
        self.events.borrow().clone()
    }
}

/// Chart stand-in that appends every call to the recorder's log.
pub struct RecordingRenderer {
    id: usize,
    events: Rc<RefCell<Vec<ChartEvent>>>,
}

impl DonutRenderer for RecordingRenderer {
    fn update(&self, spec: &DonutSpec) {
        self.events.borrow_mut().push(ChartEvent::Updated(self.id, spec.values));
    }

    fn destroy(&self) {
        self.events.borrow_mut().push(ChartEvent::Destroyed(self.id));
    }
}
