mod scenario;
mod tracing;
