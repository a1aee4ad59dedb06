#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use portfolio_ui::nav::outside::OutsideClick;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn pointer_down_on_document() {
    let document = web_sys::window().unwrap().document().unwrap();
    let event = web_sys::Event::new("pointerdown").unwrap();
    document.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn fires_while_attached_and_stops_after_drop() {
    let hits = Rc::new(Cell::new(0));
    let counter = hits.clone();
    let sub = OutsideClick::attach(move |target| {
        assert!(target.is_some());
        counter.set(counter.get() + 1);
    })
    .unwrap();

    pointer_down_on_document();
    assert_eq!(hits.get(), 1);

    drop(sub);
    pointer_down_on_document();
    assert_eq!(hits.get(), 1);
}

#[wasm_bindgen_test]
fn dropping_from_inside_the_callback_detaches() {
    let hits = Rc::new(Cell::new(0));
    let slot: Rc<std::cell::RefCell<Option<OutsideClick>>> = Rc::default();

    let counter = hits.clone();
    let own = slot.clone();
    let sub = OutsideClick::attach(move |_| {
        counter.set(counter.get() + 1);
        own.borrow_mut().take();
    })
    .unwrap();
    *slot.borrow_mut() = Some(sub);

    pointer_down_on_document();
    pointer_down_on_document();
    assert_eq!(hits.get(), 1);
    assert!(slot.borrow().is_none());
}
