// SPDX-License-Identifier: MPL-2.0
//! Upload slice: URL of the latest successful avatar upload.

use crate::domain::avatar::SelectionId;
use crate::error::ApiError;

#[derive(Debug, Default)]
pub struct UploadSlice {
    uploaded: Option<(SelectionId, String)>,
}

impl UploadSlice {
    /// Keeps the URL of a success, whatever selection it belongs to.
    /// Deciding whether it is stale for the preview belongs to the form,
    /// which knows the latest selection. Failures leave the previous URL.
    pub(super) fn finish(&mut self, selection: SelectionId, result: Result<String, ApiError>) {
        if let Ok(url) = result {
            self.uploaded = Some((selection, url));
        }
    }

    pub(super) fn uploaded(&self) -> Option<(SelectionId, &str)> {
        self.uploaded
            .as_ref()
            .map(|(selection, url)| (*selection, url.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::avatar::SelectionCounter;

    #[test]
    fn failed_upload_keeps_previous_url() {
        let mut counter = SelectionCounter::default();
        let first = counter.next();
        let second = counter.next();
        let mut slice = UploadSlice::default();

        slice.finish(first, Ok("https://cdn/1.png".into()));
        slice.finish(second, Err(ApiError::Network("down".into())));

        assert_eq!(slice.uploaded(), Some((first, "https://cdn/1.png")));
    }
}
