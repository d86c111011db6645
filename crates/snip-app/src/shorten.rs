//! Loading/error/result state of one shorten operation

use snip_core::ShortenResponse;

#[derive(Debug, Clone, Default)]
pub struct ShortenState {
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<ShortenResponse>,
}

impl ShortenState {
    /// A request went out: mark loading, drop the previous outcome
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
        self.result = None;
    }

    /// Record the outcome of the request started by [`begin`](Self::begin)
    ///
    /// Loading is cleared whichever way it went. The outcome is handed back
    /// so the caller can branch on success or failure.
    pub fn complete(
        &mut self,
        outcome: Result<ShortenResponse, String>,
    ) -> Result<ShortenResponse, String> {
        self.loading = false;
        match outcome {
            Ok(response) => {
                self.result = Some(response.clone());
                Ok(response)
            }
            Err(message) => {
                self.error = Some(message.clone());
                Err(message)
            }
        }
    }

    /// Clear error and result; `loading` is left alone
    pub fn reset(&mut self) {
        self.error = None;
        self.result = None;
    }
}
