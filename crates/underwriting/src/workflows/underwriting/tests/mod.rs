mod common;
mod pipeline;
mod validation;
