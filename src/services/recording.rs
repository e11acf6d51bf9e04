//! Recording alarm scheduler for tests

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use crate::error::NotifierError;

use super::{AlarmRequest, AlarmScheduler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmCall {
    Schedule(Duration),
    Cancel,
}

/// Captures every call; clones share the same log
#[derive(Debug, Clone, Default)]
pub struct RecordingScheduler {
    calls: Arc<Mutex<Vec<AlarmCall>>>,
    pub fail_with: Option<NotifierError>,
}

impl RecordingScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: NotifierError) -> Self {
        Self {
            calls: Arc::default(),
            fail_with: Some(error),
        }
    }

    pub fn calls(&self) -> Vec<AlarmCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn scheduled(&self) -> Vec<Duration> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                AlarmCall::Schedule(delay) => Some(delay),
                AlarmCall::Cancel => None,
            })
            .collect()
    }

    fn record(&self, call: AlarmCall) -> Result<(), NotifierError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        match &self.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

impl AlarmScheduler for RecordingScheduler {
    fn request_authorization(&mut self) -> Result<bool, NotifierError> {
        Ok(self.fail_with.is_none())
    }

    fn schedule_alarm(&mut self, request: &AlarmRequest) -> Result<(), NotifierError> {
        self.record(AlarmCall::Schedule(request.delay))
    }

    fn cancel_alarm(&mut self) -> Result<(), NotifierError> {
        self.record(AlarmCall::Cancel)
    }
}
