// Adapters layer: bindings between the duration codec and external formats.

pub mod json;
