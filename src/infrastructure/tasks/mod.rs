pub(crate) mod tally;

pub use tally::tally_task;
