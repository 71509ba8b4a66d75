//! Shared test fixtures: in-memory stores, a capturing sink, and
//! service/router builders.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use tower::ServiceExt;
use uuid::Uuid;

use timehub_api::{AppState, build_router};
use timehub_core::config::sweep::SweepMode;
use timehub_core::config::{AppConfig, DatabaseConfig};
use timehub_core::result::AppResult;
use timehub_database::stores::{LogStore, SettingsStore, TimerStore};
use timehub_entity::{ActiveTimer, CardSettings, TimeLog};
use timehub_service::log::LogService;
use timehub_service::settings::SettingsService;
use timehub_service::sink::LogSink;
use timehub_service::timer::{LimitEnforcer, StatusService, TimerService};

/// In-memory timer store keyed by member id, mirroring the one-row-per-
/// member table semantics.
#[derive(Debug, Default)]
pub struct MemoryTimerStore {
    timers: Mutex<HashMap<String, ActiveTimer>>,
}

impl MemoryTimerStore {
    pub fn insert_raw(&self, timer: ActiveTimer) {
        self.timers
            .lock()
            .unwrap()
            .insert(timer.member_id.clone(), timer);
    }

    pub fn len(&self) -> usize {
        self.timers.lock().unwrap().len()
    }
}

#[async_trait]
impl TimerStore for MemoryTimerStore {
    async fn find_all(&self) -> AppResult<Vec<ActiveTimer>> {
        Ok(self.timers.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_member(&self, member_id: &str) -> AppResult<Option<ActiveTimer>> {
        Ok(self.timers.lock().unwrap().get(member_id).cloned())
    }

    async fn find_by_cards(&self, card_ids: &[String]) -> AppResult<Vec<ActiveTimer>> {
        Ok(self
            .timers
            .lock()
            .unwrap()
            .values()
            .filter(|t| card_ids.contains(&t.card_id))
            .cloned()
            .collect())
    }

    async fn put(&self, timer: &ActiveTimer) -> AppResult<()> {
        self.timers
            .lock()
            .unwrap()
            .insert(timer.member_id.clone(), timer.clone());
        Ok(())
    }

    async fn take_by_member(&self, member_id: &str) -> AppResult<Option<ActiveTimer>> {
        Ok(self.timers.lock().unwrap().remove(member_id))
    }

    async fn take_exact(
        &self,
        card_id: &str,
        member_id: &str,
    ) -> AppResult<Option<ActiveTimer>> {
        let mut timers = self.timers.lock().unwrap();
        match timers.get(member_id) {
            Some(t) if t.card_id == card_id => Ok(timers.remove(member_id)),
            _ => Ok(None),
        }
    }

    async fn take_session(&self, timer: &ActiveTimer) -> AppResult<bool> {
        let mut timers = self.timers.lock().unwrap();
        match timers.get(&timer.member_id) {
            Some(t) if t.card_id == timer.card_id && t.start_time == timer.start_time => {
                timers.remove(&timer.member_id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

/// In-memory log store, insertion-ordered.
#[derive(Debug, Default)]
pub struct MemoryLogStore {
    logs: Mutex<Vec<TimeLog>>,
}

impl MemoryLogStore {
    pub fn insert_raw(&self, log: TimeLog) {
        self.logs.lock().unwrap().push(log);
    }

    pub fn all(&self) -> Vec<TimeLog> {
        self.logs.lock().unwrap().clone()
    }
}

#[async_trait]
impl LogStore for MemoryLogStore {
    async fn insert(&self, log: &TimeLog) -> AppResult<()> {
        self.logs.lock().unwrap().push(log.clone());
        Ok(())
    }

    async fn find_by_card(&self, card_id: &str) -> AppResult<Vec<TimeLog>> {
        let mut logs: Vec<TimeLog> = self
            .logs
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.card_id == card_id)
            .cloned()
            .collect();
        logs.sort_by_key(|l| l.logged_at);
        Ok(logs)
    }

    async fn sum_by_cards(&self, card_ids: &[String]) -> AppResult<HashMap<String, i64>> {
        let mut totals = HashMap::new();
        for log in self.logs.lock().unwrap().iter() {
            if card_ids.contains(&log.card_id) {
                *totals.entry(log.card_id.clone()).or_insert(0) += log.duration;
            }
        }
        Ok(totals)
    }

    async fn update_duration(&self, id: Uuid, duration: i64) -> AppResult<Option<TimeLog>> {
        let mut logs = self.logs.lock().unwrap();
        for log in logs.iter_mut() {
            if log.id == id {
                log.duration = duration;
                return Ok(Some(log.clone()));
            }
        }
        Ok(None)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut logs = self.logs.lock().unwrap();
        let before = logs.len();
        logs.retain(|l| l.id != id);
        Ok(logs.len() < before)
    }
}

/// In-memory settings store keyed by card id.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    settings: Mutex<HashMap<String, CardSettings>>,
}

impl MemorySettingsStore {
    pub fn set_limit(&self, card_id: &str, limit: &str) {
        self.settings.lock().unwrap().insert(
            card_id.to_string(),
            CardSettings {
                card_id: card_id.to_string(),
                time_limit: Some(limit.to_string()),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.settings.lock().unwrap().len()
    }

    pub fn get(&self, card_id: &str) -> Option<CardSettings> {
        self.settings.lock().unwrap().get(card_id).cloned()
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn upsert(&self, settings: &CardSettings) -> AppResult<()> {
        self.settings
            .lock()
            .unwrap()
            .insert(settings.card_id.clone(), settings.clone());
        Ok(())
    }

    async fn find(&self, card_id: &str) -> AppResult<Option<CardSettings>> {
        Ok(self.settings.lock().unwrap().get(card_id).cloned())
    }

    async fn find_by_cards(&self, card_ids: &[String]) -> AppResult<Vec<CardSettings>> {
        Ok(self
            .settings
            .lock()
            .unwrap()
            .values()
            .filter(|s| card_ids.contains(&s.card_id))
            .cloned()
            .collect())
    }
}

/// Sink that records delivered logs instead of posting them.
#[derive(Debug, Default)]
pub struct CapturingSink {
    delivered: Mutex<Vec<TimeLog>>,
}

impl CapturingSink {
    pub fn delivered(&self) -> Vec<TimeLog> {
        self.delivered.lock().unwrap().clone()
    }
}

impl LogSink for CapturingSink {
    fn deliver(&self, log: TimeLog) {
        self.delivered.lock().unwrap().push(log);
    }
}

/// Everything a test needs, wired over shared in-memory stores.
pub struct TestHarness {
    pub timers: Arc<MemoryTimerStore>,
    pub logs: Arc<MemoryLogStore>,
    pub settings: Arc<MemorySettingsStore>,
    pub sink: Arc<CapturingSink>,
    pub timer_service: Arc<TimerService>,
    pub enforcer: Arc<LimitEnforcer>,
    pub status_service: Arc<StatusService>,
    pub log_service: Arc<LogService>,
    pub settings_service: Arc<SettingsService>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_mode(SweepMode::Budget, true)
    }

    pub fn with_mode(mode: SweepMode, inline_enforcement: bool) -> Self {
        let timers = Arc::new(MemoryTimerStore::default());
        let logs = Arc::new(MemoryLogStore::default());
        let settings = Arc::new(MemorySettingsStore::default());
        let sink = Arc::new(CapturingSink::default());

        let timer_store: Arc<dyn TimerStore> = timers.clone();
        let log_store: Arc<dyn LogStore> = logs.clone();
        let settings_store: Arc<dyn SettingsStore> = settings.clone();
        let sink_handle: Arc<dyn LogSink> = sink.clone();

        let timer_service = Arc::new(TimerService::new(
            Arc::clone(&timer_store),
            Arc::clone(&log_store),
            Some(sink_handle),
        ));
        let enforcer = Arc::new(LimitEnforcer::new(
            Arc::clone(&timer_store),
            Arc::clone(&log_store),
            Arc::clone(&settings_store),
            Arc::clone(&timer_service),
            mode,
            20,
        ));
        let status_service = Arc::new(StatusService::new(
            Arc::clone(&timer_store),
            Arc::clone(&log_store),
            Arc::clone(&enforcer),
            inline_enforcement,
            20,
        ));
        let log_service = Arc::new(LogService::new(
            Arc::clone(&log_store),
            Arc::clone(&settings_store),
        ));
        let settings_service = Arc::new(SettingsService::new(Arc::clone(&settings_store)));

        Self {
            timers,
            logs,
            settings,
            sink,
            timer_service,
            enforcer,
            status_service,
            log_service,
            settings_service,
        }
    }

    /// Build the HTTP router over this harness's services.
    pub fn router(&self) -> Router {
        build_router(AppState {
            config: Arc::new(test_config()),
            timer_service: Arc::clone(&self.timer_service),
            status_service: Arc::clone(&self.status_service),
            log_service: Arc::clone(&self.log_service),
            settings_service: Arc::clone(&self.settings_service),
        })
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        server: Default::default(),
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            min_connections: 0,
            connect_timeout_seconds: 1,
            idle_timeout_seconds: 1,
        },
        webhook: Default::default(),
        sweep: Default::default(),
        status: Default::default(),
        logging: Default::default(),
    }
}

/// One-shot a JSON request and return (status, parsed body).
pub async fn request_json(
    router: Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response: Response<Body> = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
