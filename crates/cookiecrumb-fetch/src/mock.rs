//! Scripted transport for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::transport::{RequestOptions, Transport, TransportError, TransportResponse};

/// A request seen by [`ScriptedTransport`].
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub(crate) url: String,
    pub(crate) options: RequestOptions,
}

/// Replays canned responses in order and records every request.
#[derive(Debug, Default)]
pub(crate) struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<TransportResponse, String>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(self, response: TransportResponse) -> Self {
        self.replies.lock().unwrap().push_back(Ok(response));
        self
    }

    pub(crate) fn fail(self, message: &str) -> Self {
        self.replies.lock().unwrap().push_back(Err(message.to_string()));
        self
    }

    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            options: options.clone(),
        });
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(TransportError::Failed(message)),
            None => Err(TransportError::Failed(format!("no scripted reply for {url}"))),
        }
    }
}
