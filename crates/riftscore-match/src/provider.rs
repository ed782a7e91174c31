use std::convert::Infallible;

use crate::{MatchSnapshot, sample};

/// Source of finished match snapshots.
///
/// Implementations own transport concerns (network fetch, rate limiting,
/// retries, file access). `Ok(None)` means the match is unknown or has not
/// finished yet; errors are reserved for failures of the source itself.
pub trait MatchProvider {
    type Error;

    fn finished_match(&self, match_id: &str) -> Result<Option<MatchSnapshot>, Self::Error>;
}

/// Serves the bundled [`sample::finished_match`] under [`sample::SAMPLE_MATCH_ID`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleMatchProvider;

impl MatchProvider for SampleMatchProvider {
    type Error = Infallible;

    fn finished_match(&self, match_id: &str) -> Result<Option<MatchSnapshot>, Self::Error> {
        if match_id.trim().eq_ignore_ascii_case(sample::SAMPLE_MATCH_ID) {
            Ok(Some(sample::finished_match()))
        } else {
            Ok(None)
        }
    }
}
