mod ledger;
mod money;
mod planner;
mod profile;
mod transaction;

pub use ledger::*;
pub use money::*;
pub use planner::*;
pub use profile::*;
pub use transaction::*;
