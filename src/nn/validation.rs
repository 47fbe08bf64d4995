/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 两种网络实现共用的参数校验。所有校验都在 API 边界提前完成，
 *                 前向/反向传播内部不再做任何检查
 */

use crate::errors::{ComparisonOperator, NetworkError};

pub(crate) fn validate_layer_sizes(layer_sizes: &[usize]) -> Result<(), NetworkError> {
    if layer_sizes.len() < 2 {
        return Err(NetworkError::value_must_satisfy(
            "网络层数",
            ComparisonOperator::GreaterOrEqual,
            2,
        ));
    }
    if let Some(index) = layer_sizes.iter().position(|&size| size == 0) {
        return Err(NetworkError::value_must_satisfy(
            &format!("第{index}层的节点数"),
            ComparisonOperator::GreaterThan,
            0,
        ));
    }
    Ok(())
}

pub(crate) fn validate_rate(rate: f64) -> Result<(), NetworkError> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(NetworkError::value_must_satisfy(
            "学习率",
            ComparisonOperator::GreaterThan,
            0,
        ));
    }
    Ok(())
}

pub(crate) fn validate_iterations(iterations: usize) -> Result<(), NetworkError> {
    if iterations == 0 {
        return Err(NetworkError::value_must_satisfy(
            "迭代轮数",
            ComparisonOperator::GreaterThan,
            0,
        ));
    }
    Ok(())
}

pub(crate) fn validate_init_range(init_range: f64) -> Result<(), NetworkError> {
    if !init_range.is_finite() || init_range <= 0.0 {
        return Err(NetworkError::value_must_satisfy(
            "权重初始化范围",
            ComparisonOperator::GreaterThan,
            0,
        ));
    }
    Ok(())
}

/// 校验向量长度与层的节点数一致
pub(crate) fn check_dimension(
    expected: usize,
    got: usize,
    message: &str,
) -> Result<(), NetworkError> {
    if expected != got {
        return Err(NetworkError::DimensionMismatch {
            expected,
            got,
            message: message.to_string(),
        });
    }
    Ok(())
}

/// 训练集非空，且标签与样本一一对应
pub(crate) fn validate_sample_count(
    label_count: usize,
    sample_count: usize,
) -> Result<(), NetworkError> {
    if sample_count == 0 {
        return Err(NetworkError::InvalidConfiguration(
            "训练集不能为空".to_string(),
        ));
    }
    if label_count != sample_count {
        return Err(NetworkError::InvalidConfiguration(format!(
            "标签数量（{label_count}）与样本数量（{sample_count}）不一致"
        )));
    }
    Ok(())
}

/// 训练前一次性校验整个训练集：样本与标签数量一致且非空，每个样本/标签的长度与输入/输出层一致
pub(crate) fn validate_training_set(
    labels: &[Vec<f64>],
    data_set: &[Vec<f64>],
    input_size: usize,
    output_size: usize,
) -> Result<(), NetworkError> {
    validate_sample_count(labels.len(), data_set.len())?;
    for (label, sample) in labels.iter().zip(data_set) {
        check_dimension(input_size, sample.len(), "样本长度与输入层节点数不一致")?;
        check_dimension(output_size, label.len(), "标签长度与输出层节点数不一致")?;
    }
    Ok(())
}
