use super::*;
use crate::style::props::StyleProp;
use crate::style::sink::InMemorySink;
use std::cell::Cell;
use std::rc::Rc;

struct Counter {
    calls: Rc<Cell<u32>>,
    stop_after: Option<u32>,
}

impl FrameCallback for Counter {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> Flow {
        self.calls.set(self.calls.get() + 1);
        ctx.sink.apply(&"probe".into(), &StyleProp::opacity(1.0));
        match self.stop_after {
            Some(n) if self.calls.get() >= n => Flow::Done,
            _ => Flow::Continue,
        }
    }
}

fn counter(stop_after: Option<u32>) -> (Box<Counter>, Rc<Cell<u32>>) {
    let calls = Rc::new(Cell::new(0));
    (
        Box::new(Counter {
            calls: calls.clone(),
            stop_after,
        }),
        calls,
    )
}

#[test]
fn removed_callbacks_never_fire_again() {
    let mut ticker = Ticker::new();
    let mut sink = InMemorySink::new();
    let (cb, calls) = counter(None);
    let sub = ticker.add(cb);

    ticker.tick(0.016, 0.0, &mut sink);
    assert_eq!(calls.get(), 1);

    assert!(ticker.remove(sub));
    ticker.tick(0.032, 0.0, &mut sink);
    ticker.tick(0.048, 0.0, &mut sink);
    assert_eq!(calls.get(), 1);
    assert!(ticker.is_empty());
}

#[test]
fn done_callbacks_are_dropped() {
    let mut ticker = Ticker::new();
    let mut sink = InMemorySink::new();
    let (cb, calls) = counter(Some(2));
    let sub = ticker.add(cb);

    for i in 1..=5 {
        ticker.tick(f64::from(i) * 0.016, 0.0, &mut sink);
    }
    assert_eq!(calls.get(), 2);
    assert!(!ticker.is_registered(&sub));
    assert!(!ticker.remove(sub));
}

#[test]
fn stale_timestamps_are_ignored() {
    let mut ticker = Ticker::new();
    let mut sink = InMemorySink::new();
    let (cb, calls) = counter(None);
    let _sub = ticker.add(cb);

    ticker.tick(1.0, 0.0, &mut sink);
    ticker.tick(1.0, 0.0, &mut sink);
    ticker.tick(0.5, 0.0, &mut sink);
    ticker.tick(f64::NAN, 0.0, &mut sink);
    assert_eq!(calls.get(), 1);
}

#[test]
fn callbacks_run_in_registration_order() {
    struct Tag(&'static str, Rc<std::cell::RefCell<Vec<&'static str>>>);
    impl FrameCallback for Tag {
        fn on_frame(&mut self, _ctx: &mut FrameCtx<'_>) -> Flow {
            self.1.borrow_mut().push(self.0);
            Flow::Continue
        }
    }

    let log = Rc::new(std::cell::RefCell::new(Vec::new()));
    let mut ticker = Ticker::new();
    let _a = ticker.add(Box::new(Tag("a", log.clone())));
    let _b = ticker.add(Box::new(Tag("b", log.clone())));
    ticker.tick(0.1, 0.0, &mut InMemorySink::new());
    assert_eq!(*log.borrow(), vec!["a", "b"]);
}
