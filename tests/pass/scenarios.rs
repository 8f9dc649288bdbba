use std::cell::Cell;

use pre::{
    predicate,
    throw_on_fail::{NotEmpty, Positive, SameSize, Sorted},
    Cond, Owned, Throw,
};

#[predicate]
fn positive_cell(value: &Cell<i32>) -> bool {
    value.get() > 0
}

fn wrapper_positive(value: Positive<Owned<i32>>) -> i32 {
    *value
}

fn wrapper_not_empty(values: NotEmpty<&Vec<i32>>) -> i32 {
    values[0]
}

fn wrapper_sorted(values: Sorted<&Vec<i32>>) -> i32 {
    values[values.len() - 1]
}

fn same_size(pair: SameSize<(&Vec<i32>, &Vec<String>)>) -> usize {
    pair.get::<0>().len()
}

fn main() {
    // A positive number passes, a negative one is reported by name.
    assert_eq!(Positive::new(5).map(wrapper_positive), Ok(5));
    let err = Positive::<Owned<i32>>::new(-5).unwrap_err();
    assert_eq!(err.to_string(), "precondition 'positive' failed");

    // A filled vector passes, an empty one does not.
    let full = vec![1, 2, 3, 4, 5];
    assert_eq!(NotEmpty::new(&full).map(wrapper_not_empty), Ok(1));
    let empty = Vec::new();
    let err = NotEmpty::<&Vec<i32>>::new(&empty).unwrap_err();
    assert_eq!(err.precondition(), "not_empty");

    // Ascending order passes, descending order does not.
    let ascending = vec![1, 2];
    assert_eq!(Sorted::new(&ascending).map(wrapper_sorted), Ok(2));
    let descending = vec![2, 1];
    assert!(Sorted::<&Vec<i32>>::new(&descending).is_err());

    // Changes through a mutable alias reach the original, and outside changes are seen
    // through a read-only alias.
    let mut x = 5;
    {
        let mut alias: Positive<&mut i32> = Positive::new(&mut x).unwrap();
        *alias -= 1;
    }
    assert_eq!(x, 4);

    let shared = Cell::new(5);
    let alias: Cond<&Cell<i32>, Throw<PositiveCell>> = Cond::new(&shared).unwrap();
    shared.set(6);
    assert_eq!(Cell::get(&alias), 6);

    // Vectors of different element types are compared by length only.
    let numbers = vec![0; 5];
    let names = vec![String::new(); 5];
    assert_eq!(SameSize::new((&numbers, &names)).map(same_size), Ok(5));
    let numbers = vec![0; 3];
    assert!(SameSize::<(&Vec<i32>, &Vec<String>)>::new((&numbers, &names)).is_err());
}
