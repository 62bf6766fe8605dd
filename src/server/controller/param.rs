use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{error::AppError, model::pagination::MAX_PER_PAGE};

/// Query parameters shared by every paginated endpoint.
#[derive(Deserialize, IntoParams, Debug)]
#[into_params(parameter_in = Query)]
pub struct PaginationParam {
    /// Zero-based page number (default: 0)
    #[serde(default)]
    pub page: u64,
    /// Items per page, 1 to 100 (default: 10)
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

impl PaginationParam {
    /// Rejects page sizes outside `1..=MAX_PER_PAGE` and pages whose row
    /// offset does not fit in a signed 64-bit SQL `OFFSET`.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.entries == 0 || self.entries > MAX_PER_PAGE {
            return Err(AppError::BadRequest(format!(
                "entries must be between 1 and {}, got {}",
                MAX_PER_PAGE, self.entries
            )));
        }

        let offset = self.page.checked_mul(self.entries);
        if !matches!(offset, Some(offset) if offset <= i64::MAX as u64) {
            return Err(AppError::BadRequest(format!(
                "page {} is out of range",
                self.page
            )));
        }

        Ok(())
    }
}
