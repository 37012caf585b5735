use crate::core::aggregator::aggregate;
use crate::core::collection::collect_tokens;
use crate::core::parser::ColorParser;
use crate::domain::model::{MixOutcome, MixRequest};
use crate::utils::error::Result;

/// Parse, collect and aggregate one request. Bad tokens end up in
/// `MixOutcome::rejected`; an empty or too small collection is an error.
pub fn run(request: &MixRequest) -> Result<MixOutcome> {
    let parser = ColorParser::new();
    let (collection, rejected) = collect_tokens(&parser, request.tokens.iter().cloned());
    let result = aggregate(&collection, request.mode)?;

    Ok(MixOutcome {
        mode: request.mode,
        result,
        accepted: collection.len(),
        rejected,
    })
}
