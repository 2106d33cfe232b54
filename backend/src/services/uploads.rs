//! Simulated content vault uploads.
//!
//! Nothing is stored: an accepted upload advances a progress counter by a
//! random step on every tick until it reaches 100%, then the content is
//! published to the vault catalog. Uploads are fire-and-forget and cannot be
//! cancelled.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::catalog::{Catalog, ContentType, VaultItem};
use crate::config::UploadSettings;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadFile {
    pub name: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content_type: Option<ContentType>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub files: Vec<UploadFile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadState {
    Uploading,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSummary {
    pub name: String,
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadStatus {
    pub id: u64,
    pub title: String,
    pub state: UploadState,
    pub progress: f64,
    pub files: Vec<FileSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vault_item_id: Option<u32>,
}

/// Formats a byte count the way the upload form lists selected files.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    format!("{} {}", (value * 100.0).round() / 100.0, UNITS[exponent])
}

/// Trims tags and drops blanks and repeats, keeping first occurrence order.
fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}

/// Completed uploads whose status stays queryable; older ones are dropped.
const FINISHED_UPLOADS_KEPT: usize = 32;

/// Drops the oldest completed jobs beyond [`FINISHED_UPLOADS_KEPT`].
/// In-flight uploads are never removed.
fn prune_finished(jobs: &mut HashMap<u64, UploadStatus>) {
    let mut finished: Vec<u64> = jobs
        .values()
        .filter(|job| job.state == UploadState::Complete)
        .map(|job| job.id)
        .collect();
    if finished.len() <= FINISHED_UPLOADS_KEPT {
        return;
    }
    finished.sort_unstable();
    let excess = finished.len() - FINISHED_UPLOADS_KEPT;
    for id in &finished[..excess] {
        jobs.remove(id);
    }
    debug!(dropped = excess, "pruned finished uploads");
}

pub struct UploadTracker {
    settings: UploadSettings,
    catalog: Arc<Catalog>,
    jobs: RwLock<HashMap<u64, UploadStatus>>,
    next_id: AtomicU64,
}

impl UploadTracker {
    pub fn new(settings: UploadSettings, catalog: Arc<Catalog>) -> Self {
        Self {
            settings,
            catalog,
            jobs: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Validates the form and starts the progress loop in the background.
    pub async fn start(self: &Arc<Self>, request: UploadRequest) -> AppResult<UploadStatus> {
        let title = request.title.trim().to_string();
        let content_type = match request.content_type {
            Some(content_type) if !title.is_empty() && !request.files.is_empty() => content_type,
            _ => {
                return Err(AppError::Validation(
                    "Please fill in all required fields and select at least one file.".into(),
                ))
            }
        };

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let status = UploadStatus {
            id,
            title: title.clone(),
            state: UploadState::Uploading,
            progress: 0.0,
            files: request
                .files
                .iter()
                .map(|f| FileSummary {
                    name: f.name.clone(),
                    size: format_file_size(f.size_bytes),
                })
                .collect(),
            vault_item_id: None,
        };
        self.jobs.write().await.insert(id, status.clone());
        info!(upload_id = id, %title, files = request.files.len(), "upload started");

        let item = VaultItem {
            id: 0,
            title,
            content_type,
            duration: None,
            pages: None,
            upload_date: Utc::now().date_naive(),
            download_count: 0,
            rating: 0.0,
            tags: normalize_tags(request.tags),
            progress: 0,
            description: request.description,
        };
        let tracker = Arc::clone(self);
        tokio::spawn(async move { tracker.run(id, item).await });

        Ok(status)
    }

    pub async fn status(&self, id: u64) -> Option<UploadStatus> {
        self.jobs.read().await.get(&id).cloned()
    }

    async fn run(&self, id: u64, item: VaultItem) {
        let max_step = self.settings.max_step_percent.max(1.0);
        let mut ticker = tokio::time::interval(Duration::from_millis(self.settings.tick_ms.max(1)));
        // The first tick of an interval fires immediately.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let step = rand::rng().random_range(0.0..max_step);

            let mut jobs = self.jobs.write().await;
            let Some(job) = jobs.get_mut(&id) else {
                return;
            };
            job.progress = (job.progress + step).min(100.0);
            debug!(upload_id = id, progress = job.progress, "upload progress");
            if job.progress < 100.0 {
                continue;
            }
            drop(jobs);

            let published = self.catalog.add_vault_item(item).await;
            let mut jobs = self.jobs.write().await;
            if let Some(job) = jobs.get_mut(&id) {
                job.state = UploadState::Complete;
                job.vault_item_id = Some(published.id);
            }
            prune_finished(&mut jobs);
            drop(jobs);
            info!(upload_id = id, vault_item_id = published.id, "upload complete");
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_tracker() -> (Arc<Catalog>, Arc<UploadTracker>) {
        let catalog = Arc::new(Catalog::seeded());
        let settings = UploadSettings {
            tick_ms: 1,
            max_step_percent: 40.0,
        };
        (catalog.clone(), Arc::new(UploadTracker::new(settings, catalog)))
    }

    fn request() -> UploadRequest {
        UploadRequest {
            title: "Quarterly Review".into(),
            description: "Slides".into(),
            content_type: Some(ContentType::Pdf),
            tags: vec![" finance ".into(), "finance".into(), "".into(), "q1".into()],
            files: vec![UploadFile {
                name: "review.pdf".into(),
                size_bytes: 1536,
            }],
        }
    }

    #[test]
    fn file_sizes_are_human_readable() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
    }

    #[tokio::test]
    async fn incomplete_form_is_rejected() {
        let (_, tracker) = fast_tracker();

        let mut missing_type = request();
        missing_type.content_type = None;
        let mut missing_files = request();
        missing_files.files.clear();
        let mut blank_title = request();
        blank_title.title = "  ".into();

        for req in [missing_type, missing_files, blank_title] {
            assert!(matches!(tracker.start(req).await, Err(AppError::Validation(_))));
        }
    }

    #[tokio::test]
    async fn upload_completes_and_publishes_to_vault() {
        let (catalog, tracker) = fast_tracker();
        let started = tracker.start(request()).await.unwrap();
        assert_eq!(started.state, UploadState::Uploading);
        assert_eq!(started.files[0].size, "1.5 KB");

        let status = tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                let status = tracker.status(started.id).await.unwrap();
                if status.state == UploadState::Complete {
                    return status;
                }
                tokio::time::sleep(Duration::from_millis(2)).await;
            }
        })
        .await
        .unwrap();

        assert_eq!(status.progress, 100.0);
        let items = catalog.vault_items().await;
        assert_eq!(items.len(), 7);
        let item = items.last().unwrap();
        assert_eq!(Some(item.id), status.vault_item_id);
        assert_eq!(item.title, "Quarterly Review");
        assert_eq!(item.tags, vec!["finance".to_string(), "q1".to_string()]);
    }

    fn job(id: u64, state: UploadState) -> UploadStatus {
        UploadStatus {
            id,
            title: format!("upload {id}"),
            state,
            progress: if state == UploadState::Complete { 100.0 } else { 10.0 },
            files: Vec::new(),
            vault_item_id: None,
        }
    }

    #[test]
    fn only_the_newest_finished_uploads_are_kept() {
        let mut jobs = HashMap::new();
        for id in 1..=40 {
            jobs.insert(id, job(id, UploadState::Complete));
        }
        jobs.insert(0, job(0, UploadState::Uploading));

        prune_finished(&mut jobs);

        assert_eq!(jobs.len(), FINISHED_UPLOADS_KEPT + 1);
        assert!(jobs.contains_key(&0));
        assert!(!jobs.contains_key(&8));
        assert!(jobs.contains_key(&9));
        assert!(jobs.contains_key(&40));
    }

    #[test]
    fn pruning_leaves_small_maps_alone() {
        let mut jobs: HashMap<u64, UploadStatus> = (1..=3).map(|id| (id, job(id, UploadState::Complete))).collect();
        prune_finished(&mut jobs);
        assert_eq!(jobs.len(), 3);
    }

    #[tokio::test]
    async fn unknown_upload_has_no_status() {
        let (_, tracker) = fast_tracker();
        assert!(tracker.status(42).await.is_none());
    }
}
