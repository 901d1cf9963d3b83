use boxvec::BoxVec;

#[test]
fn test_iter_yields_live_elements_in_order() {
    let mut vec: BoxVec<u32> = BoxVec::with_capacity(10);
    vec.push_back(1);
    vec.push_back(2);
    vec.push_back(3);

    let collected: Vec<u32> = vec.iter().copied().collect();
    assert_eq!(collected, vec![1, 2, 3]);
}

#[test]
fn test_iter_on_empty() {
    let vec: BoxVec<u32> = BoxVec::new();
    assert_eq!(vec.iter().next(), None);
}

#[test]
fn test_iter_stops_at_logical_length() {
    let mut vec = BoxVec::from([1, 2, 3, 4]);
    vec.resize(2);

    // Stale slots beyond the length are not visited
    assert_eq!(vec.iter().count(), 2);
}

#[test]
fn test_for_loop_over_reference() {
    let vec = BoxVec::from([1, 2, 3]);
    let mut sum = 0;

    for value in &vec {
        sum += value;
    }

    assert_eq!(sum, 6);
}

#[test]
fn test_iter_mut_modifies_in_place() {
    let mut vec = BoxVec::from([1, 2, 3]);

    for value in &mut vec {
        *value *= 10;
    }

    assert_eq!(vec.as_slice(), &[10, 20, 30]);
}

#[test]
fn test_into_iter_moves_elements_out() {
    let mut vec: BoxVec<String> = BoxVec::new();
    vec.push_back("a".to_string());
    vec.push_back("b".to_string());

    let collected: Vec<String> = vec.into_iter().collect();
    assert_eq!(collected, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_into_iter_is_double_ended() {
    let vec = BoxVec::from([1, 2, 3, 4]);

    let reversed: Vec<i32> = vec.into_iter().rev().collect();
    assert_eq!(reversed, vec![4, 3, 2, 1]);
}

#[test]
fn test_into_iter_mixed_direction() {
    let vec = BoxVec::from([1, 2, 3]);
    let mut iter = vec.into_iter();

    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(3));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_into_iter_is_exact_size() {
    let vec = BoxVec::from([1, 2, 3]);
    let mut iter = vec.into_iter();

    assert_eq!(iter.len(), 3);
    iter.next();
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.size_hint(), (2, Some(2)));
}

#[test]
fn test_into_iter_skips_placeholder_region() {
    let mut vec: BoxVec<u32> = BoxVec::with_capacity(8);
    vec.push_back(5);

    let collected: Vec<u32> = vec.into_iter().collect();
    assert_eq!(collected, vec![5]);
}

#[test]
fn test_from_iterator() {
    let vec: BoxVec<u32> = (0..5).collect();

    assert_eq!(vec.as_slice(), &[0, 1, 2, 3, 4]);
    assert_eq!(vec.len(), 5);
}

#[test]
fn test_from_iterator_reserves_ahead() {
    // A sized iterator triggers a single up-front reservation
    let vec: BoxVec<u32> = (0..100).collect();

    assert_eq!(vec.len(), 100);
    assert_eq!(vec.capacity(), 100);
}

#[test]
fn test_extend() {
    let mut vec = BoxVec::from([1, 2]);

    vec.extend([3, 4, 5]);

    assert_eq!(vec.as_slice(), &[1, 2, 3, 4, 5]);
}

#[test]
fn test_extend_empty_iterator() {
    let mut vec = BoxVec::from([1, 2]);

    vec.extend(std::iter::empty());

    assert_eq!(vec.as_slice(), &[1, 2]);
}
