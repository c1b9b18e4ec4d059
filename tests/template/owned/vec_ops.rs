use dynamic_array::DynamicArray;

#[mockalloc::test]
fn push_insert_erase_pop() {
    new_vec!(mut vec);

    vec.push(S!("1"));
    vec.push(S!("2"));
    vec.push(S!("3"));
    assert_eq!(vec.capacity(), 4);

    vec.insert(1, S!("9"));
    assert_eq!(vec, S!([1, 9, 2, 3]));

    assert_eq!(vec.erase(0).map(|s| s.as_str()), Some("9"));
    assert_eq!(vec, S!([9, 2, 3]));

    assert_eq!(vec.pop(), "3");
    assert_eq!(vec, S!([9, 2]));
}

#[mockalloc::test]
fn insert_then_erase_restores() {
    for index in 0..=5 {
        new_vec!(mut vec, max(5));
        vec.extend((0..5).map(|x| S!(x)));

        vec.insert(index, S!("x"));
        vec.erase(index);

        assert_eq!(vec, S!([0, 1, 2, 3, 4]));
    }
}

#[mockalloc::test]
fn remove_moves_value_out() {
    new_vec!(mut vec, max(4));
    vec.extend((0..4).map(|x| S!(x)));

    let removed = vec.remove(1);
    assert_eq!(removed, "1");
    assert_eq!(vec, S!([0, 2, 3]));
}

#[mockalloc::test]
fn truncate_and_resize_with() {
    new_vec!(mut vec);
    vec.resize_with(4, || S!("a"));
    assert_eq!(vec, S!(["a", "a", "a", "a"]));
    assert_eq!(vec.capacity(), 4);

    vec.truncate(1);
    vec.resize(3, S!("b"));
    assert_eq!(vec, S!(["a", "b", "b"]));
    assert_eq!(vec.capacity(), 4);
}

#[mockalloc::test]
fn move_construction_leaves_source_empty() {
    new_vec!(mut vec);
    vec.extend((0..3).map(|x| S!(x)));

    let moved = vec.take();
    assert_eq!(moved, S!([0, 1, 2]));
    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 0);
}

#[mockalloc::test]
fn move_assignment_releases_prior_contents() {
    let mut target: DynamicArray<String> = (0..10).map(|x| S!(x)).collect();
    let mut source: DynamicArray<String> = (0..2).map(|x| S!(x)).collect();
    assert_eq!(target.len(), 10);

    target = source.take();

    assert_eq!(target, S!([0, 1]));
    assert!(source.is_empty());
}

#[mockalloc::test]
fn partially_consumed_into_iter() {
    new_vec!(mut vec);
    vec.extend((0..6).map(|x| S!(x)));

    let mut iter = vec.into_iter();
    assert_eq!(iter.next().as_deref(), Some("0"));
    assert_eq!(iter.next_back().as_deref(), Some("5"));
    assert_eq!(iter.nth(2).as_deref(), Some("3"));
    iter.as_mut_slice()[0].push('!');
    assert_eq!(iter.as_slice(), ["4!"]);
}

#[mockalloc::test]
fn iter_mut_through_reference() {
    new_vec!(mut vec);
    vec.extend((0..3).map(|x| S!(x)));

    for value in &mut vec {
        value.push('.');
    }

    assert_eq!(vec, S!(["0.", "1.", "2."]));
    assert_eq!(vec.last().map(String::as_str), Some("2."));
}
