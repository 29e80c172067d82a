//! Lifecycle tests: every alternative that is placed is dropped exactly once.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::cell::Cell;
use std::rc::Rc;

use oneof::{visit, Variant, Visitor};
use pretty_assertions::assert_eq;

/// Shared drop counter.
#[derive(Clone, Default)]
struct Drops(Rc<Cell<usize>>);

impl Drops {
    fn count(&self) -> usize {
        self.0.get()
    }

    fn token(&self, id: u32) -> Token {
        Token {
            id,
            drops: self.clone(),
        }
    }
}

/// Bumps its counter when dropped.
#[derive(Debug)]
struct Token {
    id: u32,
    drops: Drops,
}

impl std::fmt::Debug for Drops {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Drops({})", self.count())
    }
}

impl Clone for Token {
    fn clone(&self) -> Self {
        self.drops.token(self.id)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Token {
    fn drop(&mut self) {
        self.drops.0.set(self.drops.0.get() + 1);
    }
}

type Slot = Variant<(u32, Token, String)>;

#[test]
fn test_scope_end_drops_once() {
    let drops = Drops::default();
    {
        let _value = Slot::new(drops.token(1));
        assert_eq!(drops.count(), 0);
    }
    assert_eq!(drops.count(), 1);
}

#[test]
fn test_move_does_not_drop() {
    let drops = Drops::default();
    let value = Slot::new(drops.token(1));
    let moved = value;
    assert_eq!(drops.count(), 0);
    drop(moved);
    assert_eq!(drops.count(), 1);
}

#[test]
fn test_clone_drops_independently() {
    let drops = Drops::default();
    let value = Slot::new(drops.token(1));
    let copy = value.clone();
    assert_eq!(copy, value);
    drop(value);
    assert_eq!(drops.count(), 1);
    assert_eq!(copy.get::<Token, _>().unwrap().id, 1);
    drop(copy);
    assert_eq!(drops.count(), 2);
}

#[test]
fn test_set_drops_previous_occupant_first() {
    let drops = Drops::default();
    let mut value = Slot::new(drops.token(1));
    value.set(String::from("next"));
    assert_eq!(drops.count(), 1);
    drop(value);
    assert_eq!(drops.count(), 1);
}

#[test]
fn test_set_same_alternative_drops_old_value() {
    let drops = Drops::default();
    let mut value = Slot::new(drops.token(1));
    value.set(drops.token(2));
    assert_eq!(drops.count(), 1);
    assert_eq!(value.get::<Token, _>().unwrap().id, 2);
    drop(value);
    assert_eq!(drops.count(), 2);
}

#[test]
fn test_plain_assignment_drops_previous_occupant() {
    let drops = Drops::default();
    let mut value = Slot::new(drops.token(1));
    assert!(value.holds_alternative::<Token, _>());
    assert_eq!(drops.count(), 0);
    value = Slot::new(7_u32);
    assert_eq!(drops.count(), 1);
    assert_eq!(value.get::<u32, _>(), Ok(&7));
}

#[test]
fn test_clone_from_drops_previous_occupant() {
    let drops = Drops::default();
    let source = Slot::new(drops.token(2));
    let mut target = Slot::new(drops.token(1));
    target.clone_from(&source);
    assert_eq!(drops.count(), 1);
    assert_eq!(target.get::<Token, _>().unwrap().id, 2);
}

#[test]
fn test_into_inner_transfers_ownership() {
    let drops = Drops::default();
    let value = Slot::new(drops.token(1));
    let token = value.into_inner::<Token, _>().unwrap();
    assert_eq!(drops.count(), 0);
    drop(token);
    assert_eq!(drops.count(), 1);
}

#[test]
fn test_bad_into_inner_drops_container() {
    let drops = Drops::default();
    let value = Slot::new(drops.token(1));
    assert!(value.into_inner::<String, _>().is_err());
    assert_eq!(drops.count(), 1);
}

/// Counts the tokens it is handed by value.
struct Consume(usize);

impl Visitor<u32> for Consume {
    type Output = ();
    fn visit(&mut self, _: u32) {}
}

impl Visitor<Token> for Consume {
    type Output = ();
    fn visit(&mut self, token: Token) {
        self.0 += 1;
        drop(token);
    }
}

impl Visitor<String> for Consume {
    type Output = ();
    fn visit(&mut self, _: String) {}
}

#[test]
fn test_owned_visit_drops_once() {
    let drops = Drops::default();
    let mut consume = Consume(0);
    visit(&mut consume, Slot::new(drops.token(1)));
    assert_eq!(consume.0, 1);
    assert_eq!(drops.count(), 1);
}

#[test]
fn test_trivial_alternatives_need_no_drop() {
    assert!(!<(u32, f64, *mut ()) as oneof::Alternatives>::NEEDS_DROP);
    assert!(<(u32, Token, String) as oneof::Alternatives>::NEEDS_DROP);
}
