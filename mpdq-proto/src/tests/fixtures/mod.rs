use std::sync::Mutex;

use rstest::fixture;

use crate::{
    delimiters::DelimiterTable,
    errors::{MpdError, MpdResult},
    transport::Transport,
};

pub mod mpd_server;

#[fixture]
pub fn delimiters() -> DelimiterTable {
    DelimiterTable::default()
}

/// Answers every exchange with the same canned result and remembers the
/// queries it was given.
#[derive(Debug)]
pub struct TestTransport {
    pub response: MpdResult<String>,
    pub queries: Mutex<Vec<String>>,
}

impl TestTransport {
    pub fn replying(response: &str) -> Self {
        Self { response: Ok(response.to_owned()), queries: Mutex::default() }
    }

    pub fn failing(error: MpdError) -> Self {
        Self { response: Err(error), queries: Mutex::default() }
    }

    #[allow(clippy::unwrap_used)]
    pub fn sent(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl Transport for TestTransport {
    #[allow(clippy::unwrap_used)]
    async fn exchange(&self, query: &str) -> MpdResult<String> {
        self.queries.lock().unwrap().push(query.to_owned());
        self.response.clone()
    }
}
