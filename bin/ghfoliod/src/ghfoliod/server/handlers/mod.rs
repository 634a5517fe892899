pub mod diagnostics;
pub mod github;
pub mod root;
