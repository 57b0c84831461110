//! The analyst worker's logic.
//!
//! Each cycle takes one campaign in `analyzing`, builds its sales bible (a set
//! of buyer objections with a rebuttal for each) the first time round,
//! qualifies a batch of its hunted prospects, and hands the campaign over to
//! `persuading` once no prospects are left.

pub mod bible;
pub mod cycle;
pub mod error;
pub mod objections;
pub mod prompts;
pub mod qualifier;
pub mod worker;

#[cfg(test)]
mod test_support;

pub use bible::{BuildOutcome, SalesBibleBuilder};
pub use cycle::{CampaignCycle, CycleReport};
pub use error::{CycleError, ExtractError, ParseError};
pub use qualifier::{NoAnalysis, ProspectQualifier, SiteAnalyzer};
pub use worker::{TickOutcome, Worker};
