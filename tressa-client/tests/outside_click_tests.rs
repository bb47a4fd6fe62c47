//! Outside-click directive behaviour against a host document

use std::cell::RefCell;
use std::rc::Rc;

use tressa_client::{ClickEvent, Document, NodeId, OutsideClickRegistry};

/// Records which element's callback fired, in order
#[derive(Clone, Default)]
struct Spy {
    calls: Rc<RefCell<Vec<(&'static str, NodeId)>>>,
}

impl Spy {
    fn callback(&self, label: &'static str) -> impl FnMut(&ClickEvent) + 'static {
        let calls = Rc::clone(&self.calls);
        move |event: &ClickEvent| calls.borrow_mut().push((label, event.target))
    }

    fn take(&self) -> Vec<(&'static str, NodeId)> {
        self.calls.borrow_mut().drain(..).collect()
    }
}

struct Page {
    doc: Document,
    dropdown: NodeId,
    dropdown_item: NodeId,
    popover: NodeId,
    popover_button: NodeId,
    background: NodeId,
}

fn page() -> Page {
    let mut doc = Document::new();
    let body = doc.body();
    let dropdown = doc.create_child(body).unwrap();
    let list = doc.create_child(dropdown).unwrap();
    let dropdown_item = doc.create_child(list).unwrap();
    let popover = doc.create_child(body).unwrap();
    let popover_button = doc.create_child(popover).unwrap();
    let background = doc.create_child(body).unwrap();
    Page {
        doc,
        dropdown,
        dropdown_item,
        popover,
        popover_button,
        background,
    }
}

#[test]
fn click_outside_fires_once() {
    let mut p = page();
    let spy = Spy::default();
    let mut registry = OutsideClickRegistry::new();
    registry.bind(&mut p.doc, p.dropdown, spy.callback("dropdown"));

    p.doc.click(p.background).unwrap();

    assert_eq!(spy.take(), vec![("dropdown", p.background)]);
}

#[test]
fn clicks_on_element_or_descendants_are_ignored() {
    let mut p = page();
    let spy = Spy::default();
    let mut registry = OutsideClickRegistry::new();
    registry.bind(&mut p.doc, p.dropdown, spy.callback("dropdown"));

    p.doc.click(p.dropdown).unwrap();
    p.doc.click(p.dropdown_item).unwrap();

    assert!(spy.take().is_empty());
}

#[test]
fn unbind_stops_callbacks_and_removes_listener() {
    let mut p = page();
    let spy = Spy::default();
    let mut registry = OutsideClickRegistry::new();
    let baseline = p.doc.listener_count();

    registry.bind(&mut p.doc, p.dropdown, spy.callback("dropdown"));
    assert_eq!(p.doc.listener_count(), baseline + 1);

    assert!(registry.unbind(&mut p.doc, p.dropdown));
    assert_eq!(p.doc.listener_count(), baseline);
    assert!(!registry.is_bound(p.dropdown));

    p.doc.click(p.background).unwrap();
    assert!(spy.take().is_empty());
}

#[test]
fn unbinding_out_of_order_removes_the_right_listener() {
    let mut p = page();
    let spy = Spy::default();
    let mut registry = OutsideClickRegistry::new();
    let modal = p.doc.create_child(p.doc.body()).unwrap();

    registry.bind(&mut p.doc, p.dropdown, spy.callback("dropdown"));
    registry.bind(&mut p.doc, p.popover, spy.callback("popover"));
    registry.bind(&mut p.doc, modal, spy.callback("modal"));

    // Unbind the first-bound element while later ones stay live
    registry.unbind(&mut p.doc, p.dropdown);
    p.doc.click(p.background).unwrap();
    let mut fired: Vec<_> = spy.take().into_iter().map(|(label, _)| label).collect();
    fired.sort();
    assert_eq!(fired, vec!["modal", "popover"]);

    registry.unbind(&mut p.doc, modal);
    p.doc.click(p.background).unwrap();
    assert_eq!(spy.take(), vec![("popover", p.background)]);

    registry.unbind(&mut p.doc, p.popover);
    assert_eq!(p.doc.listener_count(), 0);
    assert!(registry.is_empty());
}

#[test]
fn each_element_only_ignores_its_own_subtree() {
    let mut p = page();
    let spy = Spy::default();
    let mut registry = OutsideClickRegistry::new();
    registry.bind(&mut p.doc, p.dropdown, spy.callback("dropdown"));
    registry.bind(&mut p.doc, p.popover, spy.callback("popover"));

    p.doc.click(p.popover_button).unwrap();

    assert_eq!(spy.take(), vec![("dropdown", p.popover_button)]);
}

#[test]
fn elements_attached_after_binding_count_as_inside() {
    let mut p = page();
    let spy = Spy::default();
    let mut registry = OutsideClickRegistry::new();
    registry.bind(&mut p.doc, p.dropdown, spy.callback("dropdown"));

    let late_item = p.doc.create_element();
    p.doc.append_child(p.dropdown_item, late_item).unwrap();
    p.doc.click(late_item).unwrap();

    assert!(spy.take().is_empty());
}
