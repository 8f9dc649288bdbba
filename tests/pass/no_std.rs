#![no_std]

use pre::{throw_on_fail::NotEmpty, Owned};

fn first(values: NotEmpty<&[u8]>) -> u8 {
    values[0]
}

fn main() {
    let values = [3, 1, 2];
    assert_eq!(NotEmpty::new(&values[..]).map(first), Ok(3));

    let err = NotEmpty::<Owned<[u8; 0]>>::new([]).err();
    assert_eq!(err.map(|err| err.precondition()), Some("not_empty"));
}
