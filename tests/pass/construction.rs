use pre::{
    throw_on_fail::{NotEmpty, Positive},
    Owned, Violation,
};

fn owned(value: Positive<Owned<i64>>) -> i64 {
    *value
}

fn alias(mut value: Positive<&mut i64>) -> i64 {
    *value += 1;
    *value
}

fn read_only(value: Positive<&i64>) -> i64 {
    *value
}

fn transient(list: NotEmpty<Owned<Vec<u8>>>) -> usize {
    list.len()
}

fn main() -> Result<(), Violation> {
    let mut x: i64 = 5;
    let small: i32 = 3;

    // An owned slot accepts moved, copied and converted values.
    assert_eq!(owned(Positive::new(x)?), 5);
    assert_eq!(owned(Positive::new(small)?), 3);
    assert_eq!(owned(Positive::new(7_i64)?), 7);

    // A mutable alias accepts only mutable references.
    assert_eq!(alias(Positive::new(&mut x)?), 6);
    assert_eq!(x, 6);

    // A read-only alias accepts both kinds of references.
    assert_eq!(read_only(Positive::new(&x)?), 6);
    assert_eq!(read_only(Positive::new(&mut x)?), 6);
    assert_eq!(read_only(Positive::new(&7)?), 7);

    // A temporary moves into the wrapper.
    assert_eq!(transient(NotEmpty::new(vec![1_u8, 2, 3])?), 3);
    let list: Vec<u8> = vec![4, 5];
    assert_eq!(transient(NotEmpty::new(list)?), 2);

    // Strings convert into owned slots of `String`.
    let name: NotEmpty<Owned<String>> = NotEmpty::new("pre")?;
    assert_eq!(name.as_str(), "pre");

    Ok(())
}
