use crate::data::{and_truth_table, salary_samples};

#[test]
fn test_and_truth_table() {
    let dataset = and_truth_table();
    assert_eq!(dataset.len(), 4);
    assert!(!dataset.is_empty());
    // 每个样本的标签都应等于两个输入的“与”
    for (input, label) in dataset.inputs.iter().zip(&dataset.labels) {
        assert_eq!(input.len(), 2);
        let expected = if input[0] == 1.0 && input[1] == 1.0 { 1.0 } else { 0.0 };
        assert_eq!(label, &vec![expected]);
    }
}

#[test]
fn test_salary_samples() {
    let dataset = salary_samples();
    assert_eq!(dataset.len(), 5);
    assert!(dataset.inputs.iter().all(|input| input.len() == 1));
    assert_eq!(
        dataset.scalar_labels(),
        vec![5500.0, 2300.0, 7600.0, 1800.0, 11400.0]
    );
}
