// src/config/validate.rs

use crate::config::model::{RawRequestFile, RequestFile};
use crate::dag::TaskSpec;
use crate::errors::{Result, TaskwaveError};

impl TryFrom<RawRequestFile> for RequestFile {
    type Error = crate::errors::TaskwaveError;

    fn try_from(raw: RawRequestFile) -> std::result::Result<Self, Self::Error> {
        validate_request(&raw)?;
        Ok(RequestFile::new_unchecked(raw.config, raw.tasks))
    }
}

/// Boundary checks on task shape.
///
/// Cycles, dangling references and duplicate titles are left to the
/// scheduler and its policies; this only rejects tasks that are malformed on
/// their own.
pub fn validate_request(raw: &RawRequestFile) -> Result<()> {
    for (i, task) in raw.tasks.iter().enumerate() {
        validate_task(i, task)?;
    }
    Ok(())
}

fn validate_task(position: usize, task: &TaskSpec) -> Result<()> {
    if task.title.trim().is_empty() {
        return Err(TaskwaveError::ValidationError(format!(
            "task #{} has an empty title",
            position + 1
        )));
    }

    if !task.estimated_hours.is_finite() || task.estimated_hours <= 0.0 {
        return Err(TaskwaveError::ValidationError(format!(
            "task '{}' must have a positive estimated_hours (got {})",
            task.title, task.estimated_hours
        )));
    }

    if let Some(dep) = task.dependencies.iter().find(|d| d.trim().is_empty()) {
        return Err(TaskwaveError::ValidationError(format!(
            "task '{}' has an empty dependency reference {:?}",
            task.title, dep
        )));
    }

    Ok(())
}
