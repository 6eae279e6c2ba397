//! FILENAME: app/src/enrichment.rs
// PURPOSE: Best-effort case enrichment through a hosted language model.
// CONTEXT: The service is injected (never a global); the batch runner
//          fans cases out to a small worker pool and substitutes the
//          original case whenever a call fails, so one bad case never
//          stops the batch or reaches the user as more than a warning.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use interchange::ScriptCase;
use serde_json::Value;
use thiserror::Error;
use tokio::task::JoinSet;

use crate::config::EnrichmentConfig;

/// Worker count of the batch runner, matching the upload UI.
pub const DEFAULT_CONCURRENCY: usize = 4;

#[derive(Error, Debug)]
pub enum EnrichmentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response carried no output text")]
    MissingOutput,
}

/// A service that enriches one case at a time.
pub trait Enrich {
    fn enrich(
        &self,
        case: &ScriptCase,
    ) -> impl Future<Output = Result<ScriptCase, EnrichmentError>> + Send;
}

/// Enriches all cases with bounded concurrency, preserving input order.
///
/// Per-case failures fall back to the unenriched case and are logged as
/// warnings; progress counters go to the log after every case.
pub async fn enrich_cases<E>(service: Arc<E>, cases: Vec<ScriptCase>, concurrency: usize) -> Vec<ScriptCase>
where
    E: Enrich + Send + Sync + 'static,
{
    let total = cases.len();
    if total == 0 {
        return Vec::new();
    }

    // Results start as the originals; workers overwrite on success only.
    let results = Arc::new(Mutex::new(cases.clone()));
    let queue: Arc<Mutex<VecDeque<(usize, ScriptCase)>>> =
        Arc::new(Mutex::new(cases.into_iter().enumerate().collect()));
    let done = Arc::new(AtomicUsize::new(0));

    let mut workers = JoinSet::new();
    for _ in 0..concurrency.max(1).min(total) {
        let service = Arc::clone(&service);
        let results = Arc::clone(&results);
        let queue = Arc::clone(&queue);
        let done = Arc::clone(&done);

        workers.spawn(async move {
            loop {
                let next = queue.lock().unwrap().pop_front();
                let (index, case) = match next {
                    Some(item) => item,
                    None => break,
                };

                match service.enrich(&case).await {
                    Ok(enriched) => {
                        results.lock().unwrap()[index] = enriched;
                    }
                    Err(err) => {
                        log::warn!("enrichment failed for case '{}': {}", case.case, err);
                    }
                }

                let finished = done.fetch_add(1, Ordering::SeqCst) + 1;
                log::info!("enrichment progress: {}/{}", finished, total);
            }
        });
    }

    while workers.join_next().await.is_some() {}

    let results = results.lock().unwrap();
    results.clone()
}

/// Instructions sent with every case.
const INSTRUCTIONS: &str = "\
You are an expert SAP assistant. Your task is to take an SAP test case \
and produce an enriched, structured JSON object.\n\
\n\
### Rules\n\
1. Use internal SAP knowledge first.\n\
2. Verify or correct tcodes using the attached vector store.\n\
3. Use web search only if the vector store lacks data.\n\
4. Fill every field in the schema.\n\
5. Output strictly valid JSON following the input schema, with \
mandatory_fields and output_fields populated for every step.";

/// Enrichment through an OpenAI-style Responses endpoint with file-search
/// and web-search tools attached.
pub struct OpenAiEnricher {
    client: reqwest::Client,
    config: EnrichmentConfig,
}

impl OpenAiEnricher {
    pub fn new(config: EnrichmentConfig) -> Self {
        OpenAiEnricher {
            client: reqwest::Client::new(),
            config,
        }
    }
}

impl Enrich for OpenAiEnricher {
    async fn enrich(&self, case: &ScriptCase) -> Result<ScriptCase, EnrichmentError> {
        let body = serde_json::json!({
            "model": self.config.model,
            "instructions": INSTRUCTIONS,
            "input": serde_json::to_string(case)?,
            "tools": [
                {
                    "type": "file_search",
                    "vector_store_ids": [self.config.vector_store_id]
                },
                { "type": "web_search" }
            ]
        });

        let response = self
            .client
            .post(format!("{}/responses", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: Value = response.json().await?;
        let text = output_text(&payload).ok_or(EnrichmentError::MissingOutput)?;
        Ok(serde_json::from_str(text)?)
    }
}

/// Pulls the assistant's output text out of a Responses payload.
fn output_text(payload: &Value) -> Option<&str> {
    payload
        .get("output")?
        .as_array()?
        .iter()
        .filter(|item| item.get("type").and_then(Value::as_str) == Some("message"))
        .flat_map(|item| {
            item.get("content")
                .and_then(Value::as_array)
                .into_iter()
                .flatten()
        })
        .find_map(|content| {
            if content.get("type").and_then(Value::as_str) == Some("output_text") {
                content.get("text").and_then(Value::as_str)
            } else {
                None
            }
        })
}
