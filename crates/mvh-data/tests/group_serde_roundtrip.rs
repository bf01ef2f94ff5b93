use mvh_core::ProblemId;
use mvh_data::{partition_domain, ComparisonRecord, DomainGroup};

#[test]
fn domain_group_roundtrips_through_json() {
    let records = vec![
        ComparisonRecord {
            domain: "blocks".to_string(),
            problem: ProblemId::new("2"),
            mcts_time: 10.0,
            mcts_plan_length: 5.0,
            hsp_time: 20.0,
            hsp_plan_length: 6.0,
        },
        ComparisonRecord {
            domain: "blocks".to_string(),
            problem: ProblemId::new("1"),
            mcts_time: 30.0,
            mcts_plan_length: 7.0,
            hsp_time: 40.0,
            hsp_plan_length: 8.0,
        },
    ];
    let group = partition_domain(&records, "blocks", "blocksworld");
    let json = serde_json::to_string(&group).expect("serialize");
    let back: DomainGroup = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(group, back);
}

#[test]
fn record_deserializes_from_named_fields() {
    let json = r#"{
        "domain": "gripper",
        "problem": "4",
        "mcts_time": 1.5,
        "mcts_plan_length": 3.0,
        "hsp_time": 2.5,
        "hsp_plan_length": 4.0
    }"#;
    let record: ComparisonRecord = serde_json::from_str(json).expect("deserialize");
    assert_eq!(record.problem.as_str(), "4");
    assert_eq!(record.hsp_plan_length, 4.0);
}
