//! Controllers for driving the view from external code.
//!
//! A controller is a clonable handle around shared state; non-UI threads
//! push simple requests through it and the app drains them once per frame,
//! before taking the frame's parameter snapshot.

use std::f64::consts::PI;
use std::sync::{Arc, Mutex};

use crate::params::ParamField;

/// One queued parameter request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamRequest {
    /// Set a single field to a value (phase in radians).
    Set(ParamField, f64),
    /// Restore all four defaults together.
    Reset,
}

/// Controller to mutate the sinusoid parameters from outside the UI.
///
/// Requests are applied in order, once per frame. Non-finite values are
/// rejected at the state boundary like any other input.
#[derive(Clone, Default)]
pub struct ParamsController {
    inner: Arc<Mutex<Vec<ParamRequest>>>,
}

impl ParamsController {
    /// Create a fresh controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a single-field update. Phase is expected in radians.
    pub fn set(&self, field: ParamField, value: f64) {
        self.push(ParamRequest::Set(field, value));
    }

    /// Queue a phase update expressed in multiples of π (the external
    /// slider unit); converted to radians here, at the input boundary.
    pub fn set_phase_pi_units(&self, value: f64) {
        self.push(ParamRequest::Set(ParamField::Phase, value * PI));
    }

    /// Queue a reset of all four parameters to their defaults.
    pub fn reset(&self) {
        self.push(ParamRequest::Reset);
    }

    fn push(&self, req: ParamRequest) {
        if let Ok(mut queue) = self.inner.lock() {
            queue.push(req);
        }
    }

    /// Take all pending requests, leaving the queue empty.
    ///
    /// Called by the app at the top of each frame. A poisoned lock yields
    /// no requests rather than a panic in the frame loop.
    pub fn drain(&self) -> Vec<ParamRequest> {
        match self.inner.lock() {
            Ok(mut queue) => std::mem::take(&mut *queue),
            Err(_) => Vec::new(),
        }
    }
}
