//! Background-task bookkeeping for view lifecycles.
//!
//! Views that tick or poll spawn their tasks in `on_mount` and must stop
//! them in `on_remove`; [`TaskTracker`] keeps the handles together so
//! teardown is a single `abort_all`.

use tokio::task::AbortHandle;

/// A handle to a spawned task that can be aborted.
#[derive(Debug)]
pub struct TaskHandle {
    abort_handle: AbortHandle,
}

impl TaskHandle {
    pub fn new(abort_handle: AbortHandle) -> Self {
        Self { abort_handle }
    }

    /// Abort the task. It is cancelled at its next await point.
    pub fn abort(&self) {
        self.abort_handle.abort();
    }

    /// Whether the task has finished (completed or aborted).
    pub fn is_finished(&self) -> bool {
        self.abort_handle.is_finished()
    }
}

/// A collection of task handles cancelled together.
#[derive(Debug, Default)]
pub struct TaskTracker {
    handles: Vec<TaskHandle>,
}

impl TaskTracker {
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    /// Track a handle. Finished tasks are pruned as new ones arrive.
    pub fn track(&mut self, handle: TaskHandle) {
        self.handles.retain(|h| !h.is_finished());
        self.handles.push(handle);
    }

    /// Abort every tracked task.
    pub fn abort_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }

    /// The number of tasks still running.
    pub fn active_count(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }
}

impl Drop for TaskTracker {
    fn drop(&mut self) {
        self.abort_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn abort_stops_a_running_task() {
        let handle = tokio::spawn(async {
            loop {
                tokio::time::sleep(tokio::time::Duration::from_secs(1)).await;
            }
        });
        let task_handle = TaskHandle::new(handle.abort_handle());
        assert!(!task_handle.is_finished());

        task_handle.abort();
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        assert!(task_handle.is_finished());
    }

    #[tokio::test]
    async fn tracker_aborts_everything_at_once() {
        let mut tracker = TaskTracker::new();
        for _ in 0..2 {
            let handle = tokio::spawn(async {
                loop {
                    tokio::time::sleep(tokio::time::Duration::from_secs(1)).await;
                }
            });
            tracker.track(TaskHandle::new(handle.abort_handle()));
        }
        assert_eq!(tracker.active_count(), 2);

        tracker.abort_all();
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        assert_eq!(tracker.active_count(), 0);
    }
}
