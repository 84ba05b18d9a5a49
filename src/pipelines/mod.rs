pub mod extract;
pub mod gemini;
pub mod perf;
pub mod prompt;
pub mod suggest;
