use std::time::Instant;

/// Wall-clock timing for pipeline stages, reported through tracing.
pub struct StageTimer {
    enabled: bool,
}

impl StageTimer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn time<T>(&self, stage: &'static str, f: impl FnOnce() -> T) -> T {
        if !self.enabled {
            return f();
        }

        let start = Instant::now();
        let out = f();
        tracing::debug!(
            "stage {} finished in {:.1} ms",
            stage,
            start.elapsed().as_secs_f64() * 1000.0
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_passes_through_the_closure_result() {
        let timer = StageTimer::new(true);
        let value = timer.time("unit", || 41 + 1);
        assert_eq!(value, 42);

        let disabled = StageTimer::new(false);
        assert_eq!(disabled.time("unit", || "ok"), "ok");
    }
}
