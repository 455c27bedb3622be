//! Network actor - runs the catalog fetch in the Tokio async runtime

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::CountrySource;

/// Network actor that processes fetch commands
pub struct NetworkActor<S: CountrySource> {
    source: Arc<S>,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl<S: CountrySource> NetworkActor<S> {
    pub fn new(source: S, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            source: Arc::new(source),
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchCountries { id }) => {
                            let response_tx = self.response_tx.clone();
                            let source = Arc::clone(&self.source);

                            self.active_requests.spawn(async move {
                                tracing::info!(id, "Fetching countries");
                                let start = Instant::now();
                                let result = source.fetch_all().await;
                                let time_ms = start.elapsed().as_millis() as u64;

                                let response = match result {
                                    Ok(records) => NetworkResponse::Countries { id, records, time_ms },
                                    Err(e) => NetworkResponse::FetchFailed {
                                        id,
                                        message: e.to_string(),
                                        time_ms,
                                    },
                                };
                                tracing::info!(id, time_ms, "Fetch completed");
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            // The in-flight fetch is dropped with the runtime
                            self.active_requests.abort_all();
                            break;
                        }
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CountryRecord;
    use crate::network::FetchError;

    struct StaticSource(Result<Vec<CountryRecord>, FetchError>);

    impl CountrySource for StaticSource {
        async fn fetch_all(&self) -> Result<Vec<CountryRecord>, FetchError> {
            self.0.clone()
        }
    }

    async fn fetch_once(source: StaticSource) -> NetworkResponse {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(NetworkActor::new(source, resp_tx).run(cmd_rx));

        cmd_tx.send(NetworkCommand::FetchCountries { id: 7 }).unwrap();
        let response = resp_rx.recv().await.unwrap();

        cmd_tx.send(NetworkCommand::Shutdown).unwrap();
        handle.await.unwrap();
        response
    }

    #[tokio::test]
    async fn test_success_forwards_records() {
        let records = vec![CountryRecord::new("FRA", "France", "Europe", "🇫🇷")];
        match fetch_once(StaticSource(Ok(records.clone()))).await {
            NetworkResponse::Countries { id, records: got, .. } => {
                assert_eq!(id, 7);
                assert_eq!(got, records);
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failure_collapses_to_message() {
        let source = StaticSource(Err(FetchError::Status(500)));
        match fetch_once(source).await {
            NetworkResponse::FetchFailed { id, message, .. } => {
                assert_eq!(id, 7);
                assert_eq!(message, "Error fetching countries (HTTP 500)");
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }
}
