use dynamic_array::DynamicArray;
use std::{
    cell::Cell,
    panic::{catch_unwind, AssertUnwindSafe},
};

thread_local! {
    static CLONES_LEFT: Cell<Option<usize>> = Cell::new(None);
}

/// Lets `clones` more clones through, then the next one panics
fn arm(clones: usize) { CLONES_LEFT.with(|left| left.set(Some(clones))) }

fn disarm() { CLONES_LEFT.with(|left| left.set(None)) }

#[derive(Debug, PartialEq)]
struct Fused(String);

impl Clone for Fused {
    fn clone(&self) -> Self {
        CLONES_LEFT.with(|left| match left.get() {
            Some(0) => crate::boom(),
            Some(n) => left.set(Some(n - 1)),
            None => (),
        });
        Fused(self.0.clone())
    }
}

fn fused(values: std::ops::Range<i32>) -> DynamicArray<Fused> { values.map(|x| Fused(S!(x))).collect() }

/// Panics when dropped if `explode` is set
struct Brittle {
    value: String,
    explode: bool,
}

impl Drop for Brittle {
    fn drop(&mut self) {
        if self.explode {
            crate::boom()
        }
    }
}

fn brittle(value: i32, explode: bool) -> Brittle {
    Brittle {
        value: S!(value),
        explode,
    }
}

#[mockalloc::test]
fn push_with_panic_in_place() {
    new_vec!(mut vec, max(4));
    vec.push(S!(0));
    vec.push(S!(1));

    let result = catch_unwind(AssertUnwindSafe(|| {
        vec.push_with(|| crate::boom());
    }));

    assert!(result.is_err());
    assert_eq!(vec, S!([0, 1]));
    assert_eq!(vec.capacity(), 4);
}

#[mockalloc::test]
fn push_with_panic_during_growth() {
    new_vec!(mut vec, max(2));
    vec.push(S!(0));
    vec.push(S!(1));
    let block = vec.as_ptr();

    let result = catch_unwind(AssertUnwindSafe(|| {
        vec.push_with(|| crate::boom());
    }));

    assert!(result.is_err());
    assert_eq!(vec, S!([0, 1]));
    assert_eq!(vec.capacity(), 2);
    assert_eq!(vec.as_ptr(), block);

    vec.push(S!(2));
    assert_eq!(vec, S!([0, 1, 2]));
    assert_eq!(vec.capacity(), 4);
}

#[mockalloc::test]
fn insert_with_panic_leaves_order_untouched() {
    for &capacity in &[3, 8] {
        for index in 0..=3 {
            new_vec!(mut vec, max(capacity));
            vec.extend((0..3).map(|x| S!(x)));

            let result = catch_unwind(AssertUnwindSafe(|| {
                vec.insert_with(index, || crate::boom());
            }));

            assert!(result.is_err());
            assert_eq!(vec, S!([0, 1, 2]));
            assert_eq!(vec.capacity(), capacity);
        }
    }
}

#[mockalloc::test]
fn clone_panic_leaves_source_intact() {
    let source = fused(0..5);

    for clones in 0..5 {
        arm(clones);
        let result = catch_unwind(AssertUnwindSafe(|| source.clone()));
        disarm();

        assert!(result.is_err());
        assert_eq!(source, fused(0..5));
    }

    assert_eq!(source.clone(), source);
}

#[mockalloc::test]
fn assign_panic_into_smaller_capacity_leaves_target_intact() {
    let source = fused(0..5);

    for clones in 0..5 {
        let mut target = DynamicArray::with_capacity(2);
        target.push(Fused(S!("x")));
        target.push(Fused(S!("y")));

        arm(clones);
        let result = catch_unwind(AssertUnwindSafe(|| target.assign(&source)));
        disarm();

        assert!(result.is_err());
        assert_eq!(target, [Fused(S!("x")), Fused(S!("y"))]);
        assert_eq!(target.capacity(), 2);
    }
}

#[mockalloc::test]
fn assign_panic_in_place_stays_consistent() {
    let source = fused(0..6);

    for clones in 0..6 {
        let mut target = DynamicArray::with_capacity(8);
        target.extend((10..13).map(|x| Fused(S!(x))));

        arm(clones);
        let result = catch_unwind(AssertUnwindSafe(|| target.assign(&source)));
        disarm();

        assert!(result.is_err());
        assert!(target.len() <= 6);
        assert_eq!(target.capacity(), 8);
    }
}

#[mockalloc::test]
fn extend_from_slice_panic_drops_new_items() {
    let source = fused(0..4);
    let mut target = fused(10..12);

    arm(2);
    let result = catch_unwind(AssertUnwindSafe(|| target.extend_from_slice(&source)));
    disarm();

    assert!(result.is_err());
    assert_eq!(target, fused(10..12));
}

#[mockalloc::test]
fn resize_with_panic_restores_len() {
    new_vec!(mut vec);
    vec.push(S!("a"));
    let mut built = 0;

    let result = catch_unwind(AssertUnwindSafe(|| {
        vec.resize_with(5, || {
            built += 1;
            if built == 3 {
                crate::boom()
            }
            S!(built)
        });
    }));

    assert!(result.is_err());
    assert_eq!(built, 3);
    assert_eq!(vec, S!(["a"]));
}

#[mockalloc::test]
fn erase_with_panicking_drop_closes_the_gap() {
    let mut vec = DynamicArray::new();
    vec.push(brittle(0, false));
    vec.push(brittle(1, true));
    vec.push(brittle(2, false));

    let result = catch_unwind(AssertUnwindSafe(|| {
        vec.erase(1);
    }));

    assert!(result.is_err());
    assert_eq!(vec.len(), 2);
    assert!(vec.iter().map(|b| b.value.as_str()).eq(["0", "2"]));
}

#[mockalloc::test]
fn truncate_with_panicking_drop_drops_the_rest() {
    let mut vec = DynamicArray::new();
    vec.push(brittle(0, false));
    vec.push(brittle(1, true));
    vec.push(brittle(2, false));

    let result = catch_unwind(AssertUnwindSafe(|| vec.truncate(1)));

    assert!(result.is_err());
    assert_eq!(vec.len(), 1);
    assert_eq!(vec[0].value, "0");
}
