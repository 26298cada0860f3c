use std::cell::{Cell, RefCell};

use super::*;

struct Counter {
    hits: Cell<u32>,
    last_scroll: Cell<f64>,
}

impl Counter {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            hits: Cell::new(0),
            last_scroll: Cell::new(f64::NAN),
        })
    }
}

impl TickListener for Counter {
    fn on_tick(&self, tick: &Tick) {
        self.hits.set(self.hits.get() + 1);
        self.last_scroll.set(tick.scroll_y);
    }
}

fn tick(scroll_y: f64) -> Tick {
    Tick {
        kind: TickKind::Scroll,
        scroll_y,
        viewport: Viewport::default(),
        time_ms: 0.0,
    }
}

fn weak_of<L: TickListener + 'static>(l: &Rc<L>) -> Weak<dyn TickListener> {
    Rc::downgrade(l) as Weak<dyn TickListener>
}

#[test]
fn dispatch_reaches_every_subscriber() {
    let reg = ListenerRegistry::new();
    let a = Counter::new();
    let b = Counter::new();
    let _sa = reg.subscribe(weak_of(&a));
    let _sb = reg.subscribe(weak_of(&b));

    reg.dispatch(&tick(120.0));
    assert_eq!(a.hits.get(), 1);
    assert_eq!(b.hits.get(), 1);
    assert_eq!(b.last_scroll.get(), 120.0);
    assert_eq!(reg.live_count(), 2);
}

#[test]
fn dropping_subscription_deregisters() {
    let reg = ListenerRegistry::new();
    let a = Counter::new();
    let sub = reg.subscribe(weak_of(&a));
    reg.dispatch(&tick(1.0));
    drop(sub);
    reg.dispatch(&tick(2.0));
    assert_eq!(a.hits.get(), 1);
    assert_eq!(reg.live_count(), 0);
}

#[test]
fn explicit_release_deregisters() {
    let reg = ListenerRegistry::new();
    let a = Counter::new();
    reg.subscribe(weak_of(&a)).release();
    reg.dispatch(&tick(1.0));
    assert_eq!(a.hits.get(), 0);
}

#[test]
fn dropped_listener_is_never_called_even_with_leaked_subscription() {
    let reg = ListenerRegistry::new();
    let a = Counter::new();
    let sub = reg.subscribe(weak_of(&a));
    std::mem::forget(sub);
    drop(a);
    assert_eq!(reg.live_count(), 0);
    reg.dispatch(&tick(1.0));
    assert_eq!(reg.live_count(), 0);
}

#[test]
fn subscription_outliving_registry_is_harmless() {
    let a = Counter::new();
    let sub = {
        let reg = ListenerRegistry::new();
        reg.subscribe(weak_of(&a))
    };
    drop(sub);
    assert_eq!(
        format!("{:?}", Subscription::detached()),
        "Subscription { active: false }"
    );
}

struct Unsubscriber {
    slot: RefCell<Option<Subscription>>,
    hits: Cell<u32>,
}

impl TickListener for Unsubscriber {
    fn on_tick(&self, _tick: &Tick) {
        self.hits.set(self.hits.get() + 1);
        self.slot.borrow_mut().take();
    }
}

#[test]
fn listener_may_unsubscribe_itself_during_dispatch() {
    let reg = ListenerRegistry::new();
    let u = Rc::new(Unsubscriber {
        slot: RefCell::new(None),
        hits: Cell::new(0),
    });
    let other = Counter::new();
    let sub = reg.subscribe(weak_of(&u));
    let _so = reg.subscribe(weak_of(&other));
    *u.slot.borrow_mut() = Some(sub);

    reg.dispatch(&tick(1.0));
    reg.dispatch(&tick(2.0));
    assert_eq!(u.hits.get(), 1);
    assert_eq!(other.hits.get(), 2);
    assert_eq!(reg.live_count(), 1);
}

struct Subscriber {
    reg: ListenerRegistry,
    late: Rc<Counter>,
    subs: RefCell<Vec<Subscription>>,
}

impl TickListener for Subscriber {
    fn on_tick(&self, _tick: &Tick) {
        let s = self.reg.subscribe(weak_of(&self.late));
        self.subs.borrow_mut().push(s);
    }
}

#[test]
fn listener_subscribed_during_dispatch_starts_on_next_tick() {
    let reg = ListenerRegistry::new();
    let late = Counter::new();
    let s = Rc::new(Subscriber {
        reg: reg.clone(),
        late: late.clone(),
        subs: RefCell::new(Vec::new()),
    });
    let _ss = reg.subscribe(weak_of(&s));

    reg.dispatch(&tick(1.0));
    assert_eq!(late.hits.get(), 0);
    s.subs.borrow_mut().clear();
    reg.dispatch(&tick(2.0));
    // subscribed again during the second dispatch, so still not called
    assert_eq!(late.hits.get(), 0);
    s.subs.borrow_mut().clear();
    assert_eq!(reg.live_count(), 1);
}
