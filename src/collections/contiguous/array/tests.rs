#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;
use std::mem::MaybeUninit;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_construction() {
    let arr = Array::from(0_usize..5);
    assert_eq!(arr.len(), 5, "Array should take its length from the iterator.");
    assert_eq!(&*arr, &[0, 1, 2, 3, 4], "Elements should appear in iteration order.");

    let empty: Array<u8> = Array::new();
    assert_eq!(empty.len(), 0);
    assert!(empty.is_empty());
    assert_eq!(
        empty.iter().count(),
        0,
        "An empty Array should be valid for iteration of zero elements."
    );
}

#[test]
fn test_zst_support() {
    let arr = Array::from(iter::repeat_with(|| ZeroSizedType).take(5));
    assert_eq!(arr[0], ZeroSizedType, "Indexing with no offset should work.");
    assert_eq!(arr[4], ZeroSizedType, "Indexing with an in-bounds offset should work.");
    assert_eq!(
        arr.iter().count(),
        5,
        "Should iterate over the right number of ZST instances."
    );
}

#[test]
fn test_realloc() {
    let mut arr: Array<MaybeUninit<usize>> = Array::new_uninit(10);
    for i in 0..10 {
        arr[i] = MaybeUninit::new(i);
    }

    let old_ptr = arr.ptr;
    arr.realloc(10);
    assert_eq!(
        arr.ptr, old_ptr,
        "When reallocating to the same length, the pointer shouldn't change."
    );

    arr.realloc(4);
    // SAFETY: The first 4 elements were initialized above and survive shrinking.
    let arr = unsafe { arr.assume_init() };
    assert_eq!(
        &*arr,
        &[0, 1, 2, 3],
        "When shrinking, the leading elements should remain in the Array."
    );

    let mut arr: Array<MaybeUninit<u8>> = Array::new_uninit(0);
    arr.realloc(3);
    for i in 0..3 {
        arr[i] = MaybeUninit::new(i as u8 + 1);
    }
    // SAFETY: All 3 elements were just initialized.
    let arr = unsafe { arr.assume_init() };
    assert_eq!(
        &*arr,
        &[1, 2, 3],
        "Growing from a zero-length Array should produce a fresh allocation."
    );

    assert_panics!({
        Array::<u64>::make_layout(usize::MAX)
    }, "An impossible layout should panic rather than allocate.");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let arr = Array::from(iter::repeat_with(|| counter.clone()).take(10));

    drop(arr);

    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_equality_and_hash() {
    let arr = Array::from(0_usize..5);

    assert_eq!(
        arr,
        Array::from([0, 1, 2, 3, 4].into_iter()),
        "Different construction methods should produce equal results."
    );
    assert_ne!(Array::from([0, 1, 2, 5, 4].into_iter()), Array::from(0..5));
    assert_eq!(&*arr, &[0, 1, 2, 3, 4], "Deref equality should be upheld.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one(Array::from(0_usize..5)),
        "Equal arrays should produce the same hash."
    );
}

#[test]
fn test_iterators() {
    let mut arr = Array::from(0_usize..5);
    let collected = Array::from(arr.iter().cloned());
    assert_eq!(arr, collected, "Collected iter should be equal.");

    for i in arr.iter_mut() {
        *i *= 2;
    }
    assert_eq!(
        *arr,
        [0_usize, 2, 4, 6, 8],
        "Array mutated through iter_mut should equal this slice."
    );

    assert_eq!(
        arr,
        Array::from(arr.clone().into_iter()),
        "Cloned and collected array should be equal."
    );

    let mut iter = arr.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.len(), 0);
}

#[test]
fn test_into_iter_drop() {
    let counter = CountedDrop::new(0);
    let arr = Array::from(iter::repeat_with(|| counter.clone()).take(10));

    drop(arr.into_iter());
    assert_eq!(
        counter.take(),
        10,
        "Dropping an owned iterator should drop all elements."
    );

    let counter = CountedDrop::new(0);
    let arr = Array::from(iter::repeat_with(|| counter.clone()).take(10));

    let mut iter = arr.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    drop(iter);
    assert_eq!(
        counter.take(),
        10,
        "Elements consumed from either end and the unconsumed remainder should all drop once."
    );
}
