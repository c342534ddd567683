pub mod app_reducer;
pub mod commit_reducer;
pub mod diff_reducer;

pub use app_reducer::reduce;
