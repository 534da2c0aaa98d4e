use feedback_core::domain::{FeedbackForm, LoadedForms};
use feedback_core::ports::{FormRepository, Result};
use feedback_core::CoreError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

pub const FEEDBACK_EXTENSION: &str = "feedback";

/// Reads `*.feedback` JSON files from a directory tree
pub struct JsonFormRepository {
    feedback_dir: PathBuf,
}

impl JsonFormRepository {
    pub fn new(feedback_dir: impl Into<PathBuf>) -> Self {
        Self {
            feedback_dir: feedback_dir.into(),
        }
    }

    /// Every file below the feedback directory with the feedback extension, in path order
    fn candidate_paths(&self) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        let walker = WalkDir::new(&self.feedback_dir)
            .follow_links(true)
            .sort_by_file_name();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // Only the root itself is fatal; unreadable entries below it are skipped
                Err(e) if e.depth() > 0 => {
                    debug!("Skipping unreadable entry below {}: {}", self.feedback_dir.display(), e);
                    continue;
                }
                Err(e) => {
                    return Err(match e.into_io_error() {
                        Some(io) => CoreError::Io(io),
                        None => CoreError::Adapter(format!(
                            "cannot scan {}",
                            self.feedback_dir.display()
                        )),
                    })
                }
            };
            if entry.file_type().is_file() && has_feedback_extension(entry.path()) {
                paths.push(entry.into_path());
            }
        }
        Ok(paths)
    }
}

fn has_feedback_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == FEEDBACK_EXTENSION)
}

/// Parses one form file. `Ok(None)` means the form parsed but has no source.
fn read_form(path: &Path) -> Result<Option<FeedbackForm>> {
    let raw = fs::read_to_string(path)?;
    let form: FeedbackForm = serde_json::from_str(&raw)?;
    if form.source.is_empty() {
        return Ok(None);
    }
    Ok(Some(form))
}

impl FormRepository for JsonFormRepository {
    fn fetch_all_forms(&self) -> Result<LoadedForms> {
        let paths = self.candidate_paths()?;
        let mut forms = Vec::new();

        for path in &paths {
            match read_form(path) {
                Ok(Some(form)) => forms.push(form),
                Ok(None) => info!("Skipping {} as incomplete", path.display()),
                Err(e) => debug!("Failed to load feedback: {}: {}", path.display(), e),
            }
        }

        Ok(LoadedForms {
            forms,
            candidates: paths.len(),
        })
    }
}
