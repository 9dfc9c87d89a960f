use super::Either;

#[test]
fn test_first_case_accessors() {
    let value: Either<i32, &str> = Either::First(42);
    assert_eq!(value.first_value(), Some(&42));
    assert_eq!(value.second_value(), None);
    assert!(value.is_first());
    assert!(!value.is_second());
}

#[test]
fn test_second_case_accessors() {
    let value: Either<i32, &str> = Either::Second("hello");
    assert_eq!(value.first_value(), None);
    assert_eq!(value.second_value(), Some(&"hello"));
    assert!(value.is_second());
}

#[test]
fn test_owning_accessors() {
    let value: Either<String, u8> = Either::First("owned".to_string());
    assert_eq!(value.clone().into_first(), Some("owned".to_string()));
    assert_eq!(value.into_second(), None);
}

#[test]
fn test_map_keeps_tag() {
    let first: Either<i32, i32> = Either::First(2);
    assert_eq!(first.map_first(|x| x * 10), Either::First(20));
    assert_eq!(first.map_second(|x| x * 10), Either::First(2));

    let second: Either<i32, i32> = Either::Second(3);
    assert_eq!(second.map_second(|x| x + 1), Either::Second(4));
}

#[test]
fn test_either_runs_only_active_closure() {
    let value: Either<i32, &str> = Either::Second("abc");
    let len = value.either(|_| panic!("first closure must not run"), |s| s.len());
    assert_eq!(len, 3);
}

#[test]
fn test_flip_twice_is_identity() {
    let value: Either<u8, char> = Either::Second('x');
    assert_eq!(value.flip(), Either::First('x'));
    assert_eq!(value.flip().flip(), value);
}

#[test]
fn test_into_inner_and_as_ref() {
    let value: Either<String, String> = Either::Second("inner".to_string());
    assert_eq!(value.as_ref().second_value().map(|s| s.as_str()), Some("inner"));
    assert_eq!(value.into_inner(), "inner");
}

#[test]
fn test_ordering_puts_first_before_second() {
    let mut values: Vec<Either<i32, i32>> =
        vec![Either::Second(0), Either::First(5), Either::First(1)];
    values.sort();
    assert_eq!(
        values,
        vec![Either::First(1), Either::First(5), Either::Second(0)]
    );
}
