use pre::{assert_on_fail, predicate, Cond, Owned, Predicate, Throw};

#[predicate]
fn even(value: &u32) -> bool {
    value % 2 == 0
}

#[predicate(Ascending)]
pub fn strictly_increasing(first: &i32, second: &i32, third: &i32) -> bool {
    first < second && second < third
}

#[predicate]
fn shorter_than<T>(list: &[T], limit: &usize) -> bool {
    list.len() < *limit
}

#[predicate]
fn all_lowercase(words: &[&str]) -> bool {
    words.iter().all(|word| word.chars().all(char::is_lowercase))
}

mod nested {
    use pre::predicate;

    #[predicate]
    pub(crate) fn r#ref(value: &Option<u8>) -> bool {
        value.is_some()
    }
}

fn halve(value: Cond<Owned<u32>, Throw<Even>>) -> u32 {
    *value / 2
}

fn main() {
    assert_eq!(<Even as Predicate<Owned<u32>>>::NAME, "even");
    assert_eq!(Cond::new(10_u32).map(halve), Ok(5));
    assert_eq!(
        Cond::<Owned<u32>, Throw<Even>>::new(3_u32)
            .unwrap_err()
            .to_string(),
        "precondition 'even' failed"
    );

    // The function itself is still usable.
    assert!(even(&4));

    let (a, mut b) = (1, 2);
    let ascending = Cond::<(&i32, &mut i32, Owned<i32>), Throw<Ascending>>::new((&a, &mut b, 3));
    assert!(ascending.is_ok());
    assert!(Cond::<(&i32, &i32, Owned<i32>), Throw<Ascending>>::new((&a, &a, 3)).is_err());

    let list = [1, 2, 3];
    assert!(Cond::<(&[i32], Owned<usize>), Throw<ShorterThan>>::new((&list[..], 4_usize)).is_ok());
    assert!(Cond::<(&[i32], Owned<usize>), Throw<ShorterThan>>::new((&list[..], 3_usize)).is_err());

    let words = ["pre", "cond"];
    let lowercase: assert_on_fail_alias::Lowercase<'_> = Cond::assured(&words[..]);
    assert_eq!(lowercase.len(), 2);

    let some = Some(1);
    assert!(Cond::<&Option<u8>, Throw<nested::Ref>>::new(&some).is_ok());
    assert!(Cond::<&Option<u8>, Throw<nested::Ref>>::new(&None).is_err());
}

mod assert_on_fail_alias {
    use super::{AllLowercase, Cond};
    use pre::Assert;

    pub type Lowercase<'a> = Cond<&'a [&'a str], Assert<AllLowercase>>;
}

#[allow(dead_code)]
fn uses_policy_module(value: assert_on_fail::NotZero<Owned<u8>>) -> u8 {
    *value
}
