//! Cancellable repeating task backing the countdown tick.

use gloo_timers::callback::Interval;
use log::debug;

/// Owns at most one scheduled repeating task. Dropping the handle cancels
/// it, which is how [`Interval`] behaves.
pub struct Ticker<H = Interval> {
    handle: Option<H>,
}

impl<H> Default for Ticker<H> {
    fn default() -> Self {
        Ticker { handle: None }
    }
}

impl<H> Ticker<H> {
    /// Keep `handle` as the only live task, dropping any earlier one first.
    pub fn replace(&mut self, handle: H) {
        self.cancel();
        self.handle = Some(handle);
    }

    pub fn cancel(&mut self) {
        if self.handle.take().is_some() {
            debug!("Ticker cancelled");
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}

impl Ticker<Interval> {
    /// Schedule `callback` every `period_ms`, cancelling any interval that
    /// is already scheduled first.
    pub fn start<F>(&mut self, period_ms: u32, callback: F)
    where
        F: FnMut() + 'static,
    {
        self.cancel();
        self.replace(Interval::new(period_ms, callback));
        debug!("Ticker scheduled every {} ms", period_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    // Each clone held by the ticker counts as one live task.
    fn live_tasks(token: &Rc<()>) -> usize {
        Rc::strong_count(token) - 1
    }

    #[test]
    fn starting_twice_keeps_one_task_alive() {
        let token = Rc::new(());
        let mut ticker = Ticker::default();

        ticker.replace(token.clone());
        assert_eq!(live_tasks(&token), 1);

        ticker.replace(token.clone());
        assert_eq!(live_tasks(&token), 1);
        assert!(ticker.is_active());
    }

    #[test]
    fn cancel_drops_the_task() {
        let token = Rc::new(());
        let mut ticker = Ticker::default();
        ticker.replace(token.clone());

        ticker.cancel();
        assert_eq!(live_tasks(&token), 0);
        assert!(!ticker.is_active());

        ticker.cancel();
        assert_eq!(live_tasks(&token), 0);
    }

    #[test]
    fn dropping_the_ticker_cancels() {
        let token = Rc::new(());
        {
            let mut ticker = Ticker::default();
            ticker.replace(token.clone());
        }
        assert_eq!(live_tasks(&token), 0);
    }
}
