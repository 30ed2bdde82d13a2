mod inspect;
mod run;

pub use inspect::Inspect;
pub use run::Run;
