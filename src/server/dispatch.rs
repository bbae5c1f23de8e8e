use std::thread;

/// Seam between the accept loop and the concurrency model. The listener
/// hands over one job per accepted connection; how (and on what) that job
/// runs is the dispatcher's business, so a bounded worker pool could be
/// substituted here without touching the handler or matcher code.
pub trait ConnectionDispatcher: Send + Sync {
    fn dispatch(&self, job: Box<dyn FnOnce() + Send>);
}

/// The production model: one OS thread per active connection, unbounded.
/// A burst of connections spawns a matching burst of threads; there is
/// deliberately no pooling, rate limit, or backpressure.
pub struct ThreadPerConnection;

impl ConnectionDispatcher for ThreadPerConnection {
    fn dispatch(&self, job: Box<dyn FnOnce() + Send>) {
        thread::spawn(job);
    }
}

/// Runs the job on the calling thread. Used by tests that want the
/// connection handled synchronously through the same seam.
pub struct InlineDispatcher;

impl ConnectionDispatcher for InlineDispatcher {
    fn dispatch(&self, job: Box<dyn FnOnce() + Send>) {
        job();
    }
}
