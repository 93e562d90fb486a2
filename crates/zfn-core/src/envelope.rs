//! The `{code, msg, data}` envelope every portal endpoint responds with.

use crate::{Error, Result};
use serde::Deserialize;

/// Response code meaning the portal accepted the request.
pub const CODE_OK: i64 = 1000;

/// Fallback used when a failure envelope carries no message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Wire envelope returned by every portal operation.
///
/// `code` is the only field the portal guarantees; `msg` accompanies
/// failures and `data` accompanies successes, but neither is asserted.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Whether the portal reported success.
    pub fn is_ok(&self) -> bool {
        self.code == CODE_OK
    }

    /// The failure message, or the fixed fallback when the portal sent none.
    pub fn msg_or_default(&self) -> String {
        self.msg
            .clone()
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
    }

    /// Decode into the typed payload, or the portal's error report.
    ///
    /// A success envelope with no payload is still an error: every query
    /// this crate issues expects data back.
    pub fn into_result(self) -> Result<T> {
        if !self.is_ok() {
            let msg = self.msg_or_default();
            return Err(Error::Portal {
                code: self.code,
                msg,
            });
        }
        self.data.ok_or_else(|| Error::Portal {
            code: CODE_OK,
            msg: "portal response carried no data".to_string(),
        })
    }

    /// Check the code alone, discarding any payload.
    pub fn ack(self) -> Result<()> {
        if self.is_ok() {
            Ok(())
        } else {
            let msg = self.msg_or_default();
            Err(Error::Portal {
                code: self.code,
                msg,
            })
        }
    }
}
