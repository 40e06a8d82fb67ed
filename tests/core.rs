use anyhow::Result;
use ironlinq::testing::*;
use ironlinq::*;

#[test]
fn filter_keeps_even_digits() -> Result<()> {
    let evens = digits().filter(|i| i % 2 == 0);
    assert_sequence_eq(&evens, &[0, 2, 4, 6, 8]);
    Ok(())
}

#[test]
fn take_and_skip_split_the_sequence() -> Result<()> {
    let s = digits();
    let head = s.try_take(4)?;
    let tail = s.try_skip(4)?;
    assert_sequence_eq(&head, &[0, 1, 2, 3]);
    assert_sequence_eq(&tail, &[4, 5, 6, 7, 8, 9]);
    assert_eq!(head.len() + tail.len(), s.len());
    Ok(())
}

#[test]
fn take_last_and_skip_last() -> Result<()> {
    let s = digits();
    assert_sequence_eq(&s.take_last(3), &[7, 8, 9]);
    assert_sequence_eq(&s.skip_last(7), &[0, 1, 2]);
    assert!(s.take_last(0).is_empty());
    assert_eq!(s.skip_last(0), s);
    Ok(())
}

#[test]
fn counts_at_the_bounds_are_accepted() -> Result<()> {
    let s = digits();
    assert_eq!(s.try_take(10)?, s);
    assert!(s.try_skip(10)?.is_empty());
    assert!(s.try_take(0)?.is_empty());
    Ok(())
}

#[test]
fn counts_past_the_bounds_fail_fast() {
    let s = digits();
    assert_panics_with(
        || {
            let _ = s.take(11);
        },
        "take(): count 11 out of range for length 10",
    );
    assert_panics_with(
        || {
            let _ = s.skip(-1);
        },
        "skip()",
    );
    assert_panics_with(
        || {
            let _ = s.take_last(11);
        },
        "take_last()",
    );
    assert_panics_with(
        || {
            let _ = s.skip_last(-2);
        },
        "skip_last()",
    );
}

#[test]
fn try_twins_report_the_operator() {
    let s = digits();
    let err = s.try_take_last(20).unwrap_err();
    assert_eq!(err.op(), Some("take_last"));
    assert!(err.is_precondition());
    assert!(matches!(
        err,
        SeqError::CountOutOfRange { count: 20, len: 10, .. }
    ));
}

#[test]
fn take_while_and_skip_while_are_complementary() -> Result<()> {
    let s = Sequence::from([1, 2, 3, 10, 1, 2]);
    let head = s.take_while(|&x| x < 5);
    let tail = s.skip_while(|&x| x < 5);
    assert_sequence_eq(&head, &[1, 2, 3]);
    assert_sequence_eq(&tail, &[10, 1, 2]);
    Ok(())
}

#[test]
fn element_access_on_users() -> Result<()> {
    let users = sample_users();
    assert_eq!(users.first(|u| u.name.starts_with('C')).name, "C1");
    assert_eq!(users.last(|u| u.name.starts_with('A')).name, "A99");
    assert_eq!(users.try_single(|u| u.age > 60)?.name, "D1");
    assert_eq!(users.element_at(2).name, "B1");
    Ok(())
}

#[test]
fn strict_access_panics_with_operator_name() {
    let users = sample_users();
    assert_panics_with(
        || {
            let _ = users.first(|u| u.age > 100);
        },
        "first(): no element satisfies the predicate",
    );
    assert_panics_with(
        || {
            let _ = users.single(|u| u.age == 17);
        },
        "single(): expected exactly one matching element, found 2",
    );
    assert_panics_with(
        || {
            let _ = users.element_at(9);
        },
        "element_at(): index 9",
    );
    let empty: Sequence<i32> = Sequence::empty();
    assert_panics_with(
        || {
            let _ = empty.last(no_predicate());
        },
        "last(): empty sequence",
    );
}

#[test]
fn or_default_variants_never_panic() -> Result<()> {
    let users = sample_users();
    assert_eq!(users.first_or_default(|u| u.age > 100), SampleUser::default());
    assert_eq!(users.single_or_default(|u| u.age == 17), SampleUser::default());
    assert_eq!(users.element_at_or_default(-1), SampleUser::default());
    assert_eq!(users.last_or_default(|u| u.age == 28).name, "A3");

    let empty: Sequence<i32> = Sequence::empty();
    assert_eq!(empty.first_or_default(no_predicate()), 0);
    Ok(())
}

#[test]
fn search_operators() -> Result<()> {
    let users = sample_users();
    assert!(users.contains(&SampleUser::new("B1", 45)));
    assert!(!users.contains(&SampleUser::new("B1", 46)));
    assert!(users.any(|u| u.age < 10));
    assert!(users.exists(|u| u.name == "A99"));
    assert!(!users.all(|u| u.age >= 18));
    assert_eq!(users.find_index(|u| u.age == 28), Some(4));
    assert_eq!(users.find_last_index(|u| u.age == 28), Some(6));
    assert_eq!(users.find_index(|u| u.age == 99), None);
    assert_eq!(users.find_all(|u| u.age == 17).len(), 2);
    assert_eq!(users.find(|u| u.age == 17).name, "A2");
    assert_eq!(users.find_last(|u| u.age == 17).name, "C1");
    Ok(())
}

#[test]
fn any_and_all_on_empty_sequence() -> Result<()> {
    let empty: Sequence<i32> = Sequence::empty();
    assert!(!empty.any(no_predicate()));
    assert!(empty.all(|_| false));
    assert_eq!(empty.count(no_predicate()), 0);
    Ok(())
}

#[test]
fn select_and_select_many() -> Result<()> {
    let names = sample_users().select(|u| u.name.clone());
    assert_eq!(names.len(), 9);
    assert_eq!(names[0], "A1");

    let words = Sequence::from(["ab", "cde"]);
    let chars = words.select_many(|w| w.chars().collect::<Vec<_>>());
    assert_sequence_eq(&chars, &['a', 'b', 'c', 'd', 'e']);
    Ok(())
}

#[test]
fn chained_pipeline() -> Result<()> {
    let out = sample_users()
        .filter(|u| u.age >= 18)
        .order_by(|u| u.age)
        .select(|u| u.name.clone())
        .take(3);
    assert_sequence_eq(&out, &["C2".to_string(), "A3".to_string(), "A1".to_string()]);
    Ok(())
}
