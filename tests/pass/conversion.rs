use pre::{throw_on_fail::NotEmpty, Owned, Violation};

fn main() -> Result<(), Violation> {
    // An owned slot converts to a shared reference, a mutable reference and the owned value.
    let mut owned: NotEmpty<Owned<Vec<i32>>> = NotEmpty::new(vec![1, 2])?;
    let shared: &Vec<i32> = &owned;
    assert_eq!(shared.len(), 2);
    let mutable: &mut Vec<i32> = &mut owned;
    mutable.push(3);
    let inner: Vec<i32> = owned.into_inner();
    assert_eq!(inner, [1, 2, 3]);

    // A mutable alias converts to both kinds of references, but never to the owned value.
    let mut list = vec![1];
    let mut alias: NotEmpty<&mut Vec<i32>> = NotEmpty::new(&mut list)?;
    assert_eq!(alias.first(), Some(&1));
    alias.push(2);
    let back: &mut Vec<i32> = alias.into_inner();
    back.push(3);
    assert_eq!(list, [1, 2, 3]);

    // A read-only alias only converts to shared references.
    let read_only: NotEmpty<&Vec<i32>> = NotEmpty::new(&list)?;
    let first: &i32 = &read_only[0];
    assert_eq!(*first, 1);
    let back: &Vec<i32> = read_only.into_inner();
    assert_eq!(back.len(), 3);

    // Every slot of a record keeps its own kind.
    let mut a = vec![1, 2];
    let b = vec![3, 4];
    let mut pair: pre::throw_on_fail::SameSize<(&mut Vec<i32>, &Vec<i32>, Owned<Vec<i32>>)> =
        pre::throw_on_fail::SameSize::new((&mut a, &b, vec![5, 6]))?;
    pair.get_mut::<0>()[0] = 10;
    pair.get_mut::<2>()[1] = 60;
    assert_eq!(pair.get::<1>(), &[3, 4]);
    let (first, second, third) = pair.parts();
    first.push(0);
    third.push(0);
    assert_eq!(second.len(), 2);
    let (first, _, third) = pair.into_inner();
    assert_eq!(first, &[10, 2, 0]);
    assert_eq!(third, [5, 60, 0]);

    Ok(())
}
