use crate::error::CreateError;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct WindowOptions {
    /// The `n` in "n-th highest": how many top values are retained.
    #[validate(range(min = 1))]
    pub capacity: i64,
}

impl WindowOptions {
    pub fn new(capacity: i64) -> Self {
        Self { capacity }
    }

    pub fn from_toml(text: &str) -> Result<Self, CreateError> {
        let options: WindowOptions =
            toml::from_str(text).map_err(|e| CreateError::InvalidArgument {
                reason: e.message().to_string(),
            })?;
        options
            .validate()
            .map_err(|e| CreateError::InvalidArgument {
                reason: e.to_string(),
            })?;
        Ok(options)
    }

    pub fn capacity(&self) -> Result<usize, CreateError> {
        if self.capacity < 1 {
            return Err(CreateError::InvalidArgument {
                reason: format!("capacity must be at least 1, got {}", self.capacity),
            });
        }
        usize::try_from(self.capacity).map_err(|_| CreateError::InvalidArgument {
            reason: format!("capacity {} exceeds the address space", self.capacity),
        })
    }
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self { capacity: 1 }
    }
}
