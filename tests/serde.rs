use anyhow::Result;
use ironlinq::testing::*;
use ironlinq::*;

#[test]
fn sequence_serializes_as_plain_array() -> Result<()> {
    let s = Sequence::from([3, 1, 2]);
    assert_eq!(serde_json::to_string(&s)?, "[3,1,2]");

    let back: Sequence<i32> = serde_json::from_str("[3,1,2]")?;
    assert_eq!(back, s);
    Ok(())
}

#[test]
fn nested_records_deserialize_into_sequence() -> Result<()> {
    let json = r#"[
        {"name": "A1", "age": 31, "tags": ["admin"]},
        {"name": "B1", "age": 45, "tags": []}
    ]"#;
    let users: Sequence<SampleUser> = serde_json::from_str(json)?;
    assert_eq!(users.single(|u| !u.tags.is_empty()).name, "A1");
    assert_eq!(users.numbers().max(|u| u.age), Some(45));
    Ok(())
}
