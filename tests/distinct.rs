use anyhow::Result;
use ironlinq::testing::*;
use ironlinq::*;

#[test]
fn distinct_keeps_first_occurrence_order() -> Result<()> {
    let s = Sequence::from([3, 1, 3, 2, 1, 4]);
    assert_sequence_eq(&s.distinct(), &[3, 1, 2, 4]);
    assert_sequence_eq(&s.distinct_hashed(), &[3, 1, 2, 4]);
    Ok(())
}

#[test]
fn distinct_uses_structural_equality() -> Result<()> {
    let mut tagged = SampleUser::new("A1", 31);
    tagged.tags.push("admin".into());

    let s = Sequence::from([
        SampleUser::new("A1", 31),
        tagged.clone(),
        SampleUser::new("A1", 31),
        tagged,
    ]);
    let d = s.distinct();
    assert_eq!(d.len(), 2);
    assert!(d[1].tags.contains(&"admin".to_string()));
    assert_eq!(d, s.distinct_hashed());
    Ok(())
}

#[test]
fn distinct_on_floats_without_hash() -> Result<()> {
    let s = Sequence::from([0.5_f64, 0.5, 1.5]);
    assert_sequence_eq(&s.distinct(), &[0.5, 1.5]);
    Ok(())
}

#[test]
fn distinct_of_empty_and_unique() -> Result<()> {
    let empty: Sequence<i32> = Sequence::empty();
    assert!(empty.distinct().is_empty());
    assert_eq!(digits().distinct(), digits());
    Ok(())
}
